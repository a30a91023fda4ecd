//! Headless demo: a recycling list of swipeable rows
//!
//! Reproduces the classic swipe-list sample without a renderer: a fixed
//! window of row instances is recycled over a longer list of logical
//! positions, each row holding a panel with "favorite" and "delete" menu
//! surfaces. A gesture script swipes rows open, taps menus, and scrolls
//! the list; every lifecycle event lands in the log.

mod cli;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use swipecell::coordinator::{PanelSource, SwipeCoordinator};
use swipecell::events::{HitTarget, PointerEvent};
use swipecell::geometry::{Point, Rect, Size};
use swipecell::panel::SwipePanel;
use swipecell::{PanelHandle, SwipeConfig};

const ROW_WIDTH: i32 = 400;
const ROW_HEIGHT: i32 = 72;
const MENU_WIDTH: i32 = 96;

/// Simulated frame interval for settle ticks
const TICK: Duration = Duration::from_millis(16);

/// The sample data set: one row per US state
const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

fn main() -> Result<()> {
    swipecell::tracing::init();

    let args = cli::CliArgs::parse();
    let commands = parse_script(&args.script)?;
    let config = SwipeConfig::load();

    let mut list = ListSim::new(&args, &config)?;
    for command in commands {
        list.run(command)?;
    }
    list.report();
    Ok(())
}

// ============================================================================
// Script parsing
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Command {
    /// Drag the row at a logical position fully open
    Swipe(usize),
    /// Tap a menu surface of an (open) row
    Tap { position: usize, menu: usize },
    /// Scroll the viewport by N rows (negative = up)
    Scroll(i32),
    /// Programmatic open via the coordinator
    Open(usize),
    /// Programmatic close via the coordinator
    Close(usize),
    /// Close every open row
    CloseAll,
}

fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for part in script.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let command = match part.split_once(':') {
            None if part == "close-all" => Command::CloseAll,
            Some(("swipe", pos)) => Command::Swipe(parse_number(pos, part)?),
            Some(("scroll", n)) => Command::Scroll(
                n.parse()
                    .with_context(|| format!("bad scroll delta in {:?}", part))?,
            ),
            Some(("open", pos)) => Command::Open(parse_number(pos, part)?),
            Some(("close", pos)) => Command::Close(parse_number(pos, part)?),
            Some(("tap", target)) => {
                let (pos, menu) = target
                    .split_once('/')
                    .with_context(|| format!("tap needs position/menu in {:?}", part))?;
                Command::Tap {
                    position: parse_number(pos, part)?,
                    menu: parse_number(menu, part)?,
                }
            }
            _ => bail!("unknown script command {:?}", part),
        };
        commands.push(command);
    }
    Ok(commands)
}

fn parse_number(text: &str, part: &str) -> Result<usize> {
    text.parse()
        .with_context(|| format!("bad number in {:?}", part))
}

// ============================================================================
// Simulated recycling list
// ============================================================================

/// One recycled row instance: a panel plus its current label
struct Row {
    panel: PanelHandle,
    label: Rc<Cell<&'static str>>,
}

impl PanelSource for Row {
    fn swipe_panel(&self) -> Option<PanelHandle> {
        Some(self.panel.clone())
    }
}

/// Per-row divider plan: the row rect and whether a trailing divider is
/// drawn (every row but the last). Consumed by the host's decoration
/// painter; the demo only logs it.
#[derive(Debug)]
struct DividerSpec {
    rect: Rect,
    draw_trailing: bool,
}

struct ListSim {
    rows: Vec<Row>,
    coordinator: SwipeCoordinator,
    refresh_requested: Rc<Cell<bool>>,
    first_visible: usize,
    row_count: usize,
    /// Monotonic clock for synthesized pointer events
    clock: Duration,
}

impl ListSim {
    fn new(args: &cli::CliArgs, config: &SwipeConfig) -> Result<Self> {
        let row_count = args.rows.min(STATES.len());
        let viewport = args.viewport.min(row_count).max(1);

        let refresh_requested = Rc::new(Cell::new(false));
        let refresh_flag = refresh_requested.clone();
        let coordinator = SwipeCoordinator::new(
            args.policy.into(),
            Box::new(move || refresh_flag.set(true)),
        );

        let mut rows = Vec::with_capacity(viewport);
        for _ in 0..viewport {
            rows.push(make_row(args.mode.into(), config));
        }

        let mut list = Self {
            rows,
            coordinator,
            refresh_requested,
            first_visible: 0,
            row_count,
            clock: Duration::ZERO,
        };
        list.relayout_visible()?;
        Ok(list)
    }

    fn run(&mut self, command: Command) -> Result<()> {
        tracing::info!(?command, "running");
        match command {
            Command::Swipe(position) => self.swipe_open(position)?,
            Command::Tap { position, menu } => self.tap_menu(position, menu)?,
            Command::Scroll(delta) => self.scroll(delta)?,
            Command::Open(position) => {
                self.coordinator.open_item(position);
                self.pump()?;
            }
            Command::Close(position) => {
                self.coordinator.close_item(position);
                self.pump()?;
            }
            Command::CloseAll => {
                self.coordinator.close_all_items();
                self.settle_all();
            }
        }
        Ok(())
    }

    /// Rebind and lay out every visible row instance
    ///
    /// This is the recycling pass: the same instances are bound to
    /// whatever logical positions the viewport currently covers, and
    /// each layout replays that position's open intent.
    fn relayout_visible(&mut self) -> Result<()> {
        for slot in 0..self.rows.len() {
            let position = self.first_visible + slot;
            if position >= self.row_count {
                break;
            }
            let row = &self.rows[slot];
            row.label.set(STATES[position]);
            self.coordinator
                .bind(row, position)
                .context("failed to bind visible row")?;

            let mut panel = row.panel.borrow_mut();
            panel.set_frame(Rect::new(
                0,
                slot as i32 * ROW_HEIGHT,
                ROW_WIDTH,
                ROW_HEIGHT,
            ));
            panel.measure();
            panel.layout();
        }
        self.settle_all();
        Ok(())
    }

    /// Apply any refresh the coordinator requested
    fn pump(&mut self) -> Result<()> {
        if self.refresh_requested.replace(false) {
            self.relayout_visible()?;
        }
        Ok(())
    }

    /// Scroll the viewport; open rows close, instances are recycled
    fn scroll(&mut self, delta: i32) -> Result<()> {
        self.coordinator.close_all_items();
        self.settle_all();

        let max_first = self.row_count.saturating_sub(self.rows.len());
        let first = self.first_visible as i64 + delta as i64;
        self.first_visible = first.clamp(0, max_first as i64) as usize;
        self.relayout_visible()
    }

    /// Drag the row at `position` fully open with a synthesized gesture
    fn swipe_open(&mut self, position: usize) -> Result<()> {
        let slot = self
            .slot_of(position)
            .with_context(|| format!("position {} is not visible", position))?;
        let panel = self.rows[slot].panel.clone();

        let extent = panel.borrow().drag_extent();
        let start = Point::new(
            (ROW_WIDTH / 2) as f32,
            (slot as i32 * ROW_HEIGHT + ROW_HEIGHT / 2) as f32,
        );

        self.feed(&panel, PointerEvent::press(start.x, start.y, self.clock));
        let steps = 8;
        for step in 1..=steps {
            let x = start.x - (extent as f32 * step as f32 / steps as f32);
            self.feed(&panel, PointerEvent::moved(x, start.y, self.clock));
        }
        self.feed(
            &panel,
            PointerEvent::release(start.x - extent as f32, start.y, self.clock),
        );

        self.settle(&panel);
        self.pump()
    }

    /// Tap a menu surface of a visible row
    fn tap_menu(&mut self, position: usize, menu: usize) -> Result<()> {
        let slot = self
            .slot_of(position)
            .with_context(|| format!("position {} is not visible", position))?;
        let panel = self.rows[slot].panel.clone();

        let target = {
            let panel = panel.borrow();
            let surface = panel
                .menu_surfaces()
                .get(menu)
                .with_context(|| format!("row {} has no menu {}", position, menu))?;
            let frame = surface.frame();
            Point::new(
                frame.left() as f32 + frame.width as f32 / 2.0,
                frame.top() as f32 + frame.height as f32 / 2.0,
            )
        };

        self.feed(&panel, PointerEvent::press(target.x, target.y, self.clock));
        self.feed(&panel, PointerEvent::release(target.x, target.y, self.clock));
        self.settle(&panel);
        self.pump()
    }

    fn feed(&mut self, panel: &PanelHandle, event: PointerEvent) {
        let result = panel.borrow_mut().on_pointer_event(&event);
        tracing::trace!(?event, ?result, "pointer");
        self.clock += TICK;
    }

    /// Tick one panel's settle animation to completion
    fn settle(&mut self, panel: &PanelHandle) {
        loop {
            let more = panel.borrow_mut().tick(TICK);
            self.clock += TICK;
            if !more {
                break;
            }
        }
        panel.borrow_mut().take_redraw_request();
    }

    fn settle_all(&mut self) {
        for slot in 0..self.rows.len() {
            let panel = self.rows[slot].panel.clone();
            self.settle(&panel);
        }
    }

    fn slot_of(&self, position: usize) -> Option<usize> {
        if position >= self.row_count {
            return None;
        }
        position
            .checked_sub(self.first_visible)
            .filter(|slot| *slot < self.rows.len())
    }

    fn divider_plan(&self) -> Vec<DividerSpec> {
        (0..self.rows.len())
            .filter_map(|slot| {
                let position = self.first_visible + slot;
                if position >= self.row_count {
                    return None;
                }
                Some(DividerSpec {
                    rect: Rect::new(0, slot as i32 * ROW_HEIGHT, ROW_WIDTH, ROW_HEIGHT),
                    draw_trailing: position != self.row_count - 1,
                })
            })
            .collect()
    }

    fn report(&self) {
        let mut open = self.coordinator.open_items();
        open.sort_unstable();
        println!("open positions: {:?}", open);
        println!("open panels: {}", self.coordinator.open_panels().len());
        for spec in self.divider_plan() {
            tracing::debug!(?spec, "divider");
        }
    }
}

fn make_row(mode: swipecell::RevealMode, config: &SwipeConfig) -> Row {
    let mut panel = SwipePanel::new(mode, config);
    panel.add_surface(Size::new(ROW_WIDTH, ROW_HEIGHT));
    panel.add_surface(Size::new(MENU_WIDTH, ROW_HEIGHT));
    panel.add_surface(Size::new(MENU_WIDTH, ROW_HEIGHT));

    let label = Rc::new(Cell::new(""));

    let tap_label = label.clone();
    panel.set_tap_listener(Box::new(move |_, target| {
        // The original demo raised a toast here; we log instead.
        let action = match target {
            HitTarget::Content => "row tapped",
            HitTarget::Menu { index: 0 } => "favorite",
            HitTarget::Menu { .. } => "delete",
        };
        tracing::info!("{}: {}", tap_label.get(), action);
    }));

    let swipe_label = label.clone();
    panel.set_swipe_listener(Box::new(move |id, event| {
        tracing::debug!(?id, ?event, label = swipe_label.get(), "lifecycle");
    }));

    Row {
        panel: Rc::new(RefCell::new(panel)),
        label,
    }
}
