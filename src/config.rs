//! Gesture configuration persistence
//!
//! Stores the platform-derived gesture constants in
//! `~/.config/swipecell/config.yaml`

use serde::{Deserialize, Serialize};

/// Gesture tuning that persists across sessions
///
/// The defaults match common touch-platform values; hosts embedding panels
/// should overwrite `touch_slop` and `min_fling_velocity` with the values
/// their platform reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Distance (px) a pointer must travel before a drag can be claimed
    #[serde(default = "default_touch_slop")]
    pub touch_slop: f32,

    /// Velocity (px/s) above which a release counts as a fling
    #[serde(default = "default_min_fling_velocity")]
    pub min_fling_velocity: f32,

    /// Settle duration (ms) for a full-extent slide with no fling velocity
    #[serde(default = "default_base_settle_ms")]
    pub base_settle_ms: u64,

    /// Hard cap (ms) on any settle animation
    #[serde(default = "default_max_settle_ms")]
    pub max_settle_ms: u64,
}

fn default_touch_slop() -> f32 {
    8.0
}

fn default_min_fling_velocity() -> f32 {
    300.0
}

fn default_base_settle_ms() -> u64 {
    256
}

fn default_max_settle_ms() -> u64 {
    600
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            touch_slop: default_touch_slop(),
            min_fling_velocity: default_min_fling_velocity(),
            base_settle_ms: default_base_settle_ms(),
            max_settle_ms: default_max_settle_ms(),
        }
    }
}

impl SwipeConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
