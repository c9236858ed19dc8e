//! TUI application state and logic.

use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use chrono::{DateTime, Local};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};
use triage_board::{ReportOpener, StageBoard};
use triage_feed::FeedSource;
use triage_models::{Report, Seed, Stage};

use crate::config::TriageConfig;

/// What a clickable region on screen refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A stage's drop surface.
    Column(Stage),
    /// A rendered report card.
    Card {
        /// Column the card is in.
        stage: Stage,
        /// Position of the card within the column.
        index: usize,
    },
    /// A card's view action.
    View {
        /// Column the card is in.
        stage: Stage,
        /// Position of the card within the column.
        index: usize,
    },
}

/// A screen region registered while drawing.
#[derive(Debug, Clone, Copy)]
pub struct HitRegion {
    /// Screen area of the region.
    pub rect: Rect,
    /// What the region refers to.
    pub target: HitTarget,
}

impl HitRegion {
    /// Returns true if the point lies inside the region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position { x, y })
    }
}

/// Status line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Whether the message reports a failure.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates an informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Creates an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Feed load running on a worker thread.
struct PendingRefresh {
    /// Board generation when the load started.
    generation: u64,
    /// Source being loaded.
    source: FeedSource,
    rx: mpsc::Receiver<triage_feed::Result<Seed>>,
}

/// TUI application state.
pub struct App {
    // Board
    /// Interactive board.
    pub board: StageBoard,
    /// Resolved configuration.
    pub config: TriageConfig,
    /// Whether the built-in samples are shown instead of the configured feed.
    pub use_mock: bool,

    // Selection
    /// Column holding the keyboard selection.
    pub selected_stage: Stage,
    /// Position of the keyboard selection within its column.
    pub cursor: usize,

    // UI State
    /// Status line content.
    pub status: Option<StatusMessage>,
    /// When the feed was last loaded successfully.
    pub last_refresh: Option<DateTime<Local>>,
    /// Regions registered by the last draw, in draw order.
    pub hit_regions: Vec<HitRegion>,

    // Runtime
    /// Whether the app should quit.
    pub should_quit: bool,
    last_poll: Instant,
    pending_refresh: Option<PendingRefresh>,
    opener: Box<dyn ReportOpener>,
}

impl App {
    /// Creates the app and loads the configured feed.
    pub fn new(config: TriageConfig, opener: Box<dyn ReportOpener>) -> Self {
        let use_mock = config.source.is_mock();
        let board = StageBoard::new(Seed::default(), config.read_only);

        let mut app = Self {
            board,
            config,
            use_mock,
            selected_stage: Stage::Pending,
            cursor: 0,
            status: None,
            last_refresh: None,
            hit_regions: Vec::new(),
            should_quit: false,
            last_poll: Instant::now(),
            pending_refresh: None,
            opener,
        };

        app.reseed();
        app
    }

    /// Feed currently driving the board.
    pub fn active_source(&self) -> FeedSource {
        if self.use_mock {
            FeedSource::Mock
        } else {
            self.config.source.clone()
        }
    }

    fn fetch(&mut self) -> Option<Seed> {
        self.last_poll = Instant::now();
        let source = self.active_source();
        let result = triage_feed::load(&source, self.config.http_timeout);
        self.accept(&source, result)
    }

    fn accept(&mut self, source: &FeedSource, result: triage_feed::Result<Seed>) -> Option<Seed> {
        match result {
            Ok(seed) => {
                self.last_refresh = Some(Local::now());
                Some(seed)
            }
            Err(e) => {
                warn!(source = %source, error = %e, "failed to load reports");
                self.status = Some(StatusMessage::error(format!("Failed to load reports: {}", e)));
                None
            }
        }
    }

    /// Re-fetches the feed and merges it into the board.
    pub fn refresh(&mut self) {
        if let Some(seed) = self.fetch() {
            self.merge(seed);
        }
    }

    fn merge(&mut self, seed: Seed) {
        let partitioned = seed.is_partitioned();
        let count = self.board.ingest(seed);
        self.status = Some(StatusMessage::info(if partitioned {
            format!("Board replaced ({} reports)", count)
        } else {
            format!("{} new report(s)", count)
        }));
        self.clamp_cursor();
    }

    /// Re-fetches the feed and rebuilds the board from scratch.
    ///
    /// A failed load leaves the board as it was.
    pub fn reseed(&mut self) {
        if let Some(seed) = self.fetch() {
            let count = seed.len();
            self.board.reseed(seed);
            self.status = Some(StatusMessage::info(if count == 0 {
                "No reports available".to_string()
            } else {
                format!("Loaded {} report(s) from {}", count, self.active_source())
            }));
            self.clamp_cursor();
        }
    }

    /// Switches between the built-in samples and the configured feed.
    pub fn toggle_mock(&mut self) {
        self.use_mock = !self.use_mock;
        info!(use_mock = self.use_mock, "switching report source");
        self.reseed();
    }

    /// Periodic work: applies a finished background load, then starts a
    /// new one when the auto-refresh interval has elapsed.
    pub fn tick(&mut self) {
        self.poll_refresh();

        if let Some(interval) = self.config.refresh_interval {
            if self.pending_refresh.is_none() && self.last_poll.elapsed() >= interval {
                self.start_background_refresh();
            }
        }
    }

    /// Returns true while a background load is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.pending_refresh.is_some()
    }

    fn start_background_refresh(&mut self) {
        self.last_poll = Instant::now();
        let source = self.active_source();
        let timeout = self.config.http_timeout;
        let (tx, rx) = mpsc::channel();

        self.pending_refresh = Some(PendingRefresh {
            generation: self.board.generation(),
            source: source.clone(),
            rx,
        });

        // Blocking HTTP stays off the event loop
        thread::spawn(move || {
            let _ = tx.send(triage_feed::load(&source, timeout));
        });
    }

    fn poll_refresh(&mut self) {
        let received = match &self.pending_refresh {
            Some(pending) => match pending.rx.try_recv() {
                Ok(result) => Some(result),
                Err(mpsc::TryRecvError::Empty) => return,
                Err(mpsc::TryRecvError::Disconnected) => None,
            },
            None => return,
        };
        let Some(pending) = self.pending_refresh.take() else {
            return;
        };
        let Some(result) = received else {
            warn!(source = %pending.source, "background refresh ended without a result");
            return;
        };

        // A re-seed or source switch since the load started makes it stale
        if pending.generation != self.board.generation() || pending.source != self.active_source() {
            debug!(source = %pending.source, "discarding stale background refresh");
            return;
        }

        if let Some(seed) = self.accept(&pending.source, result) {
            self.merge(seed);
        }
    }

    // Hit testing

    /// Forgets the regions of the previous frame.
    pub fn clear_hit_regions(&mut self) {
        self.hit_regions.clear();
    }

    /// Registers a region for the frame being drawn.
    pub fn add_hit_region(&mut self, rect: Rect, target: HitTarget) {
        self.hit_regions.push(HitRegion { rect, target });
    }

    /// Most specific region under the point (last registered wins).
    pub fn hit_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|r| r.contains(x, y))
            .map(|r| r.target)
    }

    /// Column whose drop surface is under the point.
    pub fn column_at(&self, x: u16, y: u16) -> Option<Stage> {
        self.hit_regions.iter().find_map(|r| match r.target {
            HitTarget::Column(stage) if r.contains(x, y) => Some(stage),
            _ => None,
        })
    }

    // Mouse gesture

    /// Left button pressed.
    pub fn mouse_down(&mut self, x: u16, y: u16) {
        match self.hit_at(x, y) {
            Some(HitTarget::View { stage, index }) => {
                self.select(stage, index);
                self.open_selected();
            }
            Some(HitTarget::Card { stage, index }) => {
                self.select(stage, index);
                if self.board.drag_start(stage, index) {
                    self.board.drag_enter(stage);
                }
            }
            Some(HitTarget::Column(stage)) => {
                self.selected_stage = stage;
                self.clamp_cursor();
            }
            None => {}
        }
    }

    /// Pointer moved with the left button held.
    pub fn mouse_drag(&mut self, x: u16, y: u16) {
        if self.board.gesture().is_idle() {
            return;
        }
        match self.column_at(x, y) {
            Some(stage) => self.board.drag_enter(stage),
            None => self.board.drag_leave(),
        }
    }

    /// Left button released.
    pub fn mouse_up(&mut self, x: u16, y: u16) {
        if self.board.gesture().is_idle() {
            return;
        }
        match self.column_at(x, y) {
            Some(stage) => self.drop_on(stage),
            None => self.board.cancel(),
        }
    }

    // Keyboard gesture

    /// Picks up the selected report.
    pub fn grab_selected(&mut self) {
        if self.board.drag_start(self.selected_stage, self.cursor) {
            self.board.drag_enter(self.selected_stage);
        }
    }

    /// Moves the hover target one column left or right while dragging.
    pub fn shift_hover(&mut self, rightwards: bool) {
        let Some((source, _)) = self.board.gesture().source() else {
            return;
        };
        let current = self.board.gesture().hover_target().unwrap_or(source);
        let next = if rightwards {
            current.right()
        } else {
            current.left()
        };
        self.board.drag_enter(next);
    }

    /// Drops the dragged report on the hovered column.
    pub fn drop_hovered(&mut self) {
        let gesture = self.board.gesture();
        let Some((source, _)) = gesture.source() else {
            return;
        };
        self.drop_on(gesture.hover_target().unwrap_or(source));
    }

    /// Abandons the drag in flight.
    pub fn cancel_drag(&mut self) {
        self.board.cancel();
    }

    fn drop_on(&mut self, target: Stage) {
        let outcome = self.board.drop_on(target);
        if let triage_board::MoveOutcome::Moved { id, .. } = outcome {
            if let Some((stage, index)) = self.board.board().position(&id) {
                self.select(stage, index);
            }
        }
        self.clamp_cursor();
    }

    // Selection

    fn select(&mut self, stage: Stage, index: usize) {
        self.selected_stage = stage;
        self.cursor = index;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.board.board().stage(self.selected_stage).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Moves the selection up within its column.
    pub fn select_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the selection down within its column.
    pub fn select_down(&mut self) {
        self.cursor += 1;
        self.clamp_cursor();
    }

    /// Moves the selection to the column on the left.
    pub fn select_left(&mut self) {
        self.selected_stage = self.selected_stage.left();
        self.clamp_cursor();
    }

    /// Moves the selection to the column on the right.
    pub fn select_right(&mut self) {
        self.selected_stage = self.selected_stage.right();
        self.clamp_cursor();
    }

    /// The selected report, if its column is not empty.
    pub fn selected_report(&self) -> Option<&Report> {
        self.board.board().stage(self.selected_stage).get(self.cursor)
    }

    /// Opens the selected report's locator.
    pub fn open_selected(&mut self) {
        let Some(id) = self.selected_report().map(|r| r.id.clone()) else {
            return;
        };
        match self.board.open(&id, self.opener.as_ref()) {
            Ok(true) => self.status = Some(StatusMessage::info(format!("Opened {}", id))),
            Ok(false) => {}
            Err(e) => {
                warn!(%id, error = %e, "failed to open report");
                self.status = Some(StatusMessage::error(format!("Cannot open {}: {}", id, e)));
            }
        }
    }
}
