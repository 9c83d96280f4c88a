//! Interactive generation form.
//!
//! The form owns the field buffers, the submission lifecycle state, and
//! one in-flight request at most. Submission is rejected while a prior
//! request is pending; the outcome arrives over a channel polled on
//! every tick so the event loop never blocks on the network.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use blogagent_client::{Config, GenerationClient};
use blogagent_core::{demo, FormInput, GenerateRequest, GenerationError, GenerationResult, UiState};

pub mod form;
pub mod markdown;
pub mod output;

/// How long the loop waits for a key before running a tick.
const TICK: Duration = Duration::from_millis(100);

/// How long a flash notification stays visible.
const FLASH_SECS: u64 = 3;

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Keywords,
    Tone,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Keywords,
            Self::Keywords => Self::Tone,
            Self::Tone => Self::Submit,
            Self::Submit => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::Submit,
            Self::Keywords => Self::Title,
            Self::Tone => Self::Keywords,
            Self::Submit => Self::Tone,
        }
    }
}

/// A transient notification shown on every terminal transition.
#[derive(Debug)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
    shown_at: Instant,
}

impl Flash {
    fn new(message: impl Into<String>, is_error: bool) -> Self {
        Self {
            message: message.into(),
            is_error,
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self, secs: u64) -> bool {
        self.shown_at.elapsed() >= Duration::from_secs(secs)
    }
}

type Outcome = std::result::Result<GenerationResult, GenerationError>;

/// Application state for the generation form.
#[derive(Debug)]
pub struct App {
    pub input: FormInput,
    pub focus: Focus,
    pub state: UiState,
    pub scroll: u16,
    pub flash: Option<Flash>,
    pub demo_mode: bool,
    /// Frame counter; drives the loading spinner.
    pub tick: usize,
    pub should_quit: bool,
    rx: Option<mpsc::Receiver<Outcome>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    #[must_use]
    pub fn new(demo_mode: bool) -> Self {
        Self {
            input: FormInput::default(),
            focus: Focus::Title,
            state: UiState::Idle,
            scroll: 0,
            flash: None,
            demo_mode,
            tick: 0,
            should_quit: false,
            rx: None,
            task: None,
        }
    }

    fn show_flash(&mut self, message: impl Into<String>, is_error: bool) {
        self.flash = Some(Flash::new(message, is_error));
    }

    /// Check the submission preconditions and build the wire request.
    ///
    /// Returns `None` without touching `state` when the title is blank
    /// (validation notice, no request) or when a request is already in
    /// flight (resubmission is rejected, not queued or cancelled).
    pub fn prepare_submit(&mut self) -> Option<GenerateRequest> {
        if self.state.is_loading() {
            self.show_flash("A request is already in flight", true);
            return None;
        }
        match self.input.to_request() {
            Ok(request) => Some(request),
            Err(_) => {
                self.show_flash("Title required: enter a blog post title to get started", true);
                None
            }
        }
    }

    /// Submit the form. In demo mode the placeholder resolves
    /// synchronously; otherwise the request is spawned on the runtime
    /// and its outcome is delivered through [`App::poll_result`].
    pub fn submit(&mut self, client: &GenerationClient, handle: &tokio::runtime::Handle) {
        let Some(request) = self.prepare_submit() else {
            return;
        };

        self.state.begin();
        self.scroll = 0;

        if self.demo_mode {
            self.state.resolve(Ok(demo::placeholder(&request)));
            self.show_flash("Demo content generated (backend not contacted)", false);
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        let client = client.clone();
        self.task = Some(handle.spawn(async move {
            let outcome = client
                .generate(&request)
                .await
                .map_err(|e| GenerationError::new(e.to_string()));
            if tx.send(outcome).is_err() {
                log::debug!("form closed before the generation result arrived");
            }
        }));
    }

    /// Poll for a settled request. Called once per tick; never blocks.
    pub fn poll_result(&mut self) {
        if let Some(ref rx) = self.rx {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.rx = None;
                    self.task = None;
                    self.finish(outcome);
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.rx = None;
                    self.task = None;
                    self.finish(Err(GenerationError::new(
                        "generation task stopped unexpectedly",
                    )));
                }
            }
        }
    }

    /// Settle the submission and show its terminal-transition flash.
    pub fn finish(&mut self, outcome: Outcome) {
        match &outcome {
            Ok(_) => self.show_flash("Blog generated", false),
            Err(error) => self.show_flash(error.message.clone(), true),
        }
        self.state.resolve(outcome);
    }

    pub fn clear_expired_flash(&mut self) {
        if let Some(flash) = &self.flash {
            if flash.is_expired(FLASH_SECS) {
                self.flash = None;
            }
        }
    }

    /// Handle a key press. Returns `true` when the key requested a
    /// submission; the caller performs the actual dispatch.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Control chords never reach the text fields. Ctrl+Enter submits
        // from anywhere, matching the form's hint; Ctrl+C quits.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Enter => return true,
                KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Enter => match self.focus {
                Focus::Submit => return true,
                _ => self.focus = self.focus.next(),
            },
            KeyCode::Left | KeyCode::Right if self.focus == Focus::Tone => {
                let current = self.input.tone.unwrap_or_default();
                self.input.tone = Some(if key.code == KeyCode::Right {
                    current.next()
                } else {
                    current.prev()
                });
            }
            KeyCode::Char(c) => match self.focus {
                Focus::Title => self.input.title.push(c),
                Focus::Keywords => self.input.keywords.push(c),
                _ => {}
            },
            KeyCode::Backspace => match self.focus {
                Focus::Title => {
                    self.input.title.pop();
                }
                Focus::Keywords => {
                    self.input.keywords.pop();
                }
                _ => {}
            },
            _ => {}
        }
        false
    }
}

/// Run the interactive generation form.
///
/// Sets up the terminal, runs the main event loop, and restores the
/// terminal on exit (including on error). Any request still in flight
/// at teardown is aborted.
pub async fn run_tui(config: Config, demo_mode: bool) -> Result<()> {
    let client = GenerationClient::new(&config.endpoint, config.timeout())
        .context("Failed to create HTTP client")?;
    let handle = tokio::runtime::Handle::current();
    let mut app = App::new(demo_mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, &mut app, &client, &handle);

    // Abort any request still in flight
    if let Some(task) = app.task.take() {
        task.abort();
    }

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &GenerationClient,
    handle: &tokio::runtime::Handle,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    app.submit(client, handle);
                }
            }
        }

        app.tick = app.tick.wrapping_add(1);
        app.poll_result();
        app.clear_expired_flash();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render one frame: header, form, output panel, flash/help bar.
fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(12), // Form
            Constraint::Min(5),     // Output panel
            Constraint::Length(3),  // Flash / help bar
        ])
        .split(area);

    form::render_header(frame, app, chunks[0]);
    form::render(frame, app, chunks[1]);
    output::render(frame, app, chunks[2]);
    form::render_footer(frame, app, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogagent_core::Tone;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_blank_title_never_submits() {
        let mut app = App::new(false);
        app.input.title = "   ".to_string();

        assert!(app.prepare_submit().is_none());
        assert_eq!(app.state, UiState::Idle);
        let flash = app.flash.as_ref().unwrap();
        assert!(flash.is_error);
    }

    #[test]
    fn test_resubmit_while_loading_rejected() {
        let mut app = App::new(false);
        app.input.title = "Rust".to_string();
        app.state.begin();

        assert!(app.prepare_submit().is_none());
        assert!(app.state.is_loading());
        assert!(app.flash.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_prepare_submit_applies_defaults() {
        let mut app = App::new(false);
        app.input.title = " Rust ".to_string();

        let request = app.prepare_submit().unwrap();
        assert_eq!(request.title, "Rust");
        assert_eq!(request.tone, Tone::Neutral);
        // Preparing alone does not start the submission.
        assert_eq!(app.state, UiState::Idle);
    }

    #[test]
    fn test_finish_success() {
        let mut app = App::new(false);
        app.state.begin();
        app.finish(Ok(GenerationResult::new("X")));

        assert_eq!(app.state.content(), Some("X"));
        assert!(!app.flash.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_finish_failure_is_visible() {
        let mut app = App::new(false);
        app.state.begin();
        app.finish(Err(GenerationError::new("Y")));

        assert_eq!(app.state.error_message(), Some("Y"));
        let flash = app.flash.as_ref().unwrap();
        assert!(flash.is_error);
        assert_eq!(flash.message, "Y");
    }

    #[tokio::test]
    async fn test_demo_submit_resolves_synchronously() {
        let client = GenerationClient::with_defaults("http://127.0.0.1:5000").unwrap();
        let handle = tokio::runtime::Handle::current();

        let mut app = App::new(true);
        app.input.title = "Rust".to_string();
        app.submit(&client, &handle);

        let content = app.state.content().unwrap();
        assert!(content.starts_with("# Rust"));
        assert!(app
            .flash
            .as_ref()
            .unwrap()
            .message
            .contains("Demo content"));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = App::new(false);
        app.handle_key(key(KeyCode::Char('R')));
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input.title, "R");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.input.keywords, "x");
        assert_eq!(app.input.title, "R");
    }

    #[test]
    fn test_tone_cycles_with_arrows() {
        let mut app = App::new(false);
        app.focus = Focus::Tone;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.input.tone, Some(Tone::Casual));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.input.tone, Some(Tone::Neutral));
    }

    #[test]
    fn test_ctrl_enter_requests_submit() {
        let mut app = App::new(false);
        let submit = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));
        assert!(submit);

        // Plain Enter only submits from the submit row.
        assert!(!app.handle_key(key(KeyCode::Enter)));
        app.focus = Focus::Submit;
        assert!(app.handle_key(key(KeyCode::Enter)));
    }
}
