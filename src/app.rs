use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Direction};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::cursor::SelectionCursor;
use crate::system::kill::TerminateError;
use crate::system::process::ProcessRecord;
use crate::system::snapshot::{SharedSnapshot, Snapshot, SystemLoad};
use crate::system::{LoadSource, ProcessControl};

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub terminate: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            terminate: parse_key(&kb.terminate).unwrap_or(KeyCode::Enter),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created: Instant,
}

impl StatusMessage {
    fn from_result(pid: u32, result: Result<(), TerminateError>) -> Self {
        let (text, kind) = match result {
            Ok(()) => (format!("Process {pid} terminated."), StatusKind::Success),
            Err(err) => (err.to_string(), StatusKind::Failure),
        };
        Self {
            text,
            kind,
            created: Instant::now(),
        }
    }
}

/// Display controller state.
///
/// Reads the latest published snapshot on every frame tick and owns the
/// selection cursor. Termination requests go straight to the OS and never
/// touch the shared snapshot.
pub struct App {
    pub running: bool,
    pub shared: SharedSnapshot,
    pub snapshot: Arc<Snapshot>,
    pub load: SystemLoad,
    pub cursor: SelectionCursor,
    pub status_message: Option<StatusMessage>,
    pub visible_rows: usize,
    /// Process rows the table area can show; `None` until the screen is measured.
    pub viewport_rows: Option<usize>,
    pub status_ttl: Duration,
    pub keybinds: ResolvedKeybinds,
    load_source: Box<dyn LoadSource>,
    control: Box<dyn ProcessControl>,
}

impl App {
    pub fn new(
        config: &Config,
        shared: SharedSnapshot,
        load_source: Box<dyn LoadSource>,
        control: Box<dyn ProcessControl>,
    ) -> Self {
        let snapshot = shared.load();
        let mut app = App {
            running: true,
            shared,
            snapshot,
            load: SystemLoad::default(),
            cursor: SelectionCursor::new(),
            status_message: None,
            visible_rows: config.general.visible_rows,
            viewport_rows: None,
            status_ttl: Duration::from_millis(config.general.status_ttl_ms),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            load_source,
            control,
        };
        let visible = app.visible_count();
        app.cursor.clamp(visible);
        app
    }

    /// Per-frame refresh: system load, latest snapshot, status expiry.
    pub fn on_tick(&mut self) {
        self.load = self.load_source.system_load();
        self.refresh_snapshot();
        if self
            .status_message
            .as_ref()
            .is_some_and(|msg| msg.created.elapsed() >= self.status_ttl)
        {
            self.status_message = None;
        }
    }

    /// Copies out the live snapshot and re-clamps the cursor to it.
    pub fn refresh_snapshot(&mut self) {
        self.snapshot = self.shared.load();
        let visible = self.visible_count();
        self.cursor.clamp(visible);
    }

    /// Records the table height measured on screen and re-clamps the cursor,
    /// so the selection never points below the last drawn row.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = Some(rows);
        let visible = self.visible_count();
        self.cursor.clamp(visible);
    }

    pub fn window_len(&self) -> usize {
        match self.viewport_rows {
            Some(rows) => self.visible_rows.min(rows),
            None => self.visible_rows,
        }
    }

    pub fn visible(&self) -> &[ProcessRecord] {
        self.snapshot.visible(self.window_len())
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_record(&self) -> Option<&ProcessRecord> {
        self.cursor
            .selected()
            .and_then(|index| self.visible().get(index))
    }

    pub fn selected_pid(&self) -> Option<u32> {
        self.selected_record().map(|record| record.pid)
    }

    /// The status message, if one is set and has not expired.
    pub fn active_status(&self) -> Option<&StatusMessage> {
        self.status_message
            .as_ref()
            .filter(|msg| msg.created.elapsed() < self.status_ttl)
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        let code = key.code;
        let kb = &self.keybinds;

        match code {
            KeyCode::Up => return Action::Navigate(Direction::Up),
            KeyCode::Down => return Action::Navigate(Direction::Down),
            KeyCode::Esc => return Action::Quit,
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.terminate {
            return match self.selected_pid() {
                Some(pid) => Action::Terminate(pid),
                None => Action::None,
            };
        }

        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Navigate(Direction::Up) => {
                let visible = self.visible_count();
                self.cursor.up(visible);
            }
            Action::Navigate(Direction::Down) => {
                let visible = self.visible_count();
                self.cursor.down(visible);
            }
            Action::Terminate(pid) => {
                let result = self.control.terminate(pid);
                self.status_message = Some(StatusMessage::from_result(pid, result));
                // The list may have shrunk since this frame was drawn.
                self.refresh_snapshot();
            }
            Action::None => {}
        }
    }
}
