//! Main TUI application state and logic

use super::panes::{self, PseudocodeScrollState};
use super::view::StateView;
use crate::trace::{Step, StepKind, Trace};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Pseudocode,
    State,
    Variables,
    Narration,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: pseudocode -> narration -> state -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Pseudocode => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::State,
            FocusedPane::State => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Pseudocode,
        }
    }
}

/// The main application state: a read-only cursor over one trace
pub struct App<K, S> {
    /// Algorithm name shown as the pseudocode title
    title: String,
    pseudocode: &'static [&'static str],
    trace: Trace<K, S>,
    /// Extra lines under the state, e.g. a precomputed table
    notes: Vec<String>,

    /// Index of the step on screen
    position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub pseudocode_scroll: PseudocodeScrollState,
    pub state_scroll: usize,
    pub variables_scroll: usize,
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl<K: StepKind, S: StateView> App<K, S> {
    pub fn new(
        title: impl Into<String>,
        pseudocode: &'static [&'static str],
        trace: Trace<K, S>,
    ) -> Self {
        let now = Instant::now();
        App {
            title: title.into(),
            pseudocode,
            trace,
            notes: Vec::new(),
            position: 0,
            focused_pane: FocusedPane::Pseudocode,
            pseudocode_scroll: PseudocodeScrollState::default(),
            state_scroll: 0,
            variables_scroll: 0,
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Step<K, S>> {
        self.trace.get(self.position)
    }

    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(700) {
                if self.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        // Left column: Pseudocode (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        // Right column: State (top) | Variables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let Some(step) = self.trace.get(self.position) else {
            return;
        };

        panes::render_pseudocode_pane(
            frame,
            left_rows[0],
            &self.title,
            self.pseudocode,
            step.pseudocode_line,
            self.focused_pane == FocusedPane::Pseudocode,
            &mut self.pseudocode_scroll,
        );

        let messages: Vec<&str> = self.trace.steps()[..=self.position]
            .iter()
            .map(|s| s.message.as_str())
            .collect();
        panes::render_narration_pane(
            frame,
            left_rows[1],
            &messages,
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        panes::render_state_pane(
            frame,
            right_rows[0],
            &step.state,
            &self.notes,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        panes::render_variables_pane(
            frame,
            right_rows[1],
            step.kind.label(),
            &step.variables,
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.position,
            self.trace.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n).take_while(|_| self.step_forward()).count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = if self.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Pseudocode => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.pseudocode_scroll.target_line_row {
                        self.pseudocode_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::State => self.state_scroll = self.state_scroll.saturating_sub(1),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1)
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Pseudocode => {
                    if let Some(row) = self.pseudocode_scroll.target_line_row {
                        self.pseudocode_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::State => self.state_scroll = self.state_scroll.saturating_add(1),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1)
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1)
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time =
                            now.checked_sub(Duration::from_secs(1)).unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to(self.last_index());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.jump_to(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Advance one step. Returns false at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.position < self.last_index() {
            self.jump_to(self.position + 1);
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns false at the first step.
    pub fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.jump_to(self.position - 1);
            true
        } else {
            false
        }
    }

    fn jump_to(&mut self, position: usize) {
        self.position = position.min(self.last_index());
        // Keep the newest narration line in view
        self.narration_scroll = usize::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Visualization;
    use crate::search::{BinarySearch, BinarySearchInput};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App<crate::search::BinarySearchKind, crate::search::BinarySearchState> {
        let input = BinarySearchInput {
            array: vec![1, 3, 5, 7, 9, 11],
            target: 7,
        };
        let out = BinarySearch::execute(&input).unwrap();
        App::new(BinarySearch::NAME, BinarySearch::pseudocode(&input), out.trace)
    }

    fn press(app: &mut App<impl StepKind, impl StateView>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = app();
        assert!(!app.step_backward());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.position(), 3);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.position(), 6);
        assert!(!app.step_forward());
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.position(), 6);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.position(), 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.position(), 0);
    }

    #[test]
    fn test_focus_cycles_back() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focused_pane, FocusedPane::Pseudocode);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_renders_status_and_narration() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Step 7/7"));
        assert!(screen.contains("END"));
        assert!(screen.contains("binary search"));
    }
}
