//! Command-line argument parsing for the demo
//!
//! The demo drives a simulated recycling list headlessly, so everything
//! interesting is a flag: policy, reveal mode, list size, and the gesture
//! script to replay.

use clap::{Parser, ValueEnum};

use swipecell::{Policy, RevealMode};

/// Headless swipe-panel list demo
#[derive(Parser, Debug)]
#[command(name = "swipecell", version, about = "Headless swipe-panel list demo")]
pub struct CliArgs {
    /// Open policy for the list
    #[arg(long, value_enum, default_value = "single")]
    pub policy: PolicyArg,

    /// Reveal mode for every row panel
    #[arg(long, value_enum, default_value = "pull-out")]
    pub mode: ModeArg,

    /// Number of logical rows in the simulated list
    #[arg(long, default_value_t = 50)]
    pub rows: usize,

    /// Number of row instances kept live (the recycler viewport)
    #[arg(long, default_value_t = 8)]
    pub viewport: usize,

    /// Gesture script to replay, comma separated:
    /// swipe:P, tap:P/M, scroll:N, open:P, close:P, close-all
    #[arg(
        long,
        default_value = "swipe:1,swipe:3,tap:3/1,scroll:4,scroll:-4,close-all"
    )]
    pub script: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    Single,
    Multiple,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Single => Policy::Single,
            PolicyArg::Multiple => Policy::Multiple,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    PullOut,
    LayDown,
    PullStack,
}

impl From<ModeArg> for RevealMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::PullOut => RevealMode::PullOut,
            ModeArg::LayDown => RevealMode::LayDown,
            ModeArg::PullStack => RevealMode::PullStack,
        }
    }
}
