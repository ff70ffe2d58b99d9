//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::{Config, MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED};
use crate::error::InputError;
use crate::input::{self, ArrayKind};
use crate::playback::{Clock, Controller, PlaybackState, SystemClock};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Longest time the loop waits for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(50);

const SPEED_STEP: u32 = 5;

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a custom array into the edit buffer
    EditingCustom,
}

/// The main application state
pub struct App<C: Clock = SystemClock> {
    /// Playback over the current run
    pub controller: Controller<C>,

    /// Selected algorithm for the next sort
    pub algorithm: Algorithm,

    /// How new arrays are produced
    pub kind: ArrayKind,

    /// Element count for generated arrays
    pub size: usize,

    /// Array every sort starts from and every reset returns to
    pub initial_array: Vec<i32>,

    /// Last applied custom array text
    pub custom_input: String,

    /// Text being typed while in [`InputMode::EditingCustom`]
    pub edit_buffer: String,

    /// Why the custom array text was rejected, if it was
    pub validation_error: Option<InputError>,

    pub mode: InputMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: StdRng,
}

impl App<SystemClock> {
    /// Create a new app from the startup configuration
    pub fn new(config: &Config) -> Result<Self, InputError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: &Config, clock: C) -> Result<Self, InputError> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let initial_array =
            input::build_array(config.kind, config.size, &config.custom_input, &mut rng)?;

        let mut controller = Controller::with_clock(initial_array.clone(), clock);
        controller.set_speed(config.speed);

        Ok(App {
            controller,
            algorithm: config.algorithm,
            kind: config.kind,
            size: initial_array.len(),
            initial_array,
            custom_input: config.custom_input.clone(),
            edit_buffer: String::new(),
            validation_error: None,
            mode: InputMode::Normal,
            should_quit: false,
            status_message: String::from("Ready!"),
            rng,
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next playback tick
            let timeout = self
                .controller
                .time_until_tick()
                .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.tick();
        }

        Ok(())
    }

    /// Deliver a due playback tick
    pub fn tick(&mut self) {
        if !self.controller.poll() {
            return;
        }
        if self.controller.is_finished() {
            self.status_message = format!(
                "{} finished in {} steps",
                self.algorithm.name(),
                self.controller.total_steps()
            );
            info!(steps = self.controller.total_steps(), "playback finished");
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Settings on top, bars in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let is_editing = self.mode == InputMode::EditingCustom;
        let custom_text = if is_editing {
            self.edit_buffer.as_str()
        } else {
            self.custom_input.as_str()
        };

        super::panes::render_controls_pane(
            frame,
            chunks[0],
            super::panes::ControlsRenderData {
                algorithm: self.algorithm,
                kind: self.kind,
                size: self.size,
                speed: self.controller.speed(),
                custom_input: custom_text,
                validation_error: self.validation_error.as_ref().map(ToString::to_string),
                is_editing,
                is_locked: self.controller.is_sorting(),
            },
        );

        let title = match self.controller.algorithm() {
            Some(algorithm) => format!("{} · {} elements", algorithm.name(), self.size),
            None => format!("{} elements", self.size),
        };
        super::panes::render_bars_pane(
            frame,
            chunks[1],
            super::panes::BarsRenderData {
                step: self.controller.displayed_state(),
                title,
            },
            self.controller.is_sorting(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.controller.current_step(),
                total_steps: self.controller.total_steps(),
                state: self.controller.state(),
                is_editing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::EditingCustom => self.handle_edit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.start_sort(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10) {
                    self.step_forward_n(n as usize);
                }
            }
            KeyCode::Esc | KeyCode::Char('x') => self.cancel_or_reset(),
            KeyCode::Char('n') => self.new_array(),
            KeyCode::Char('a') => self.select_algorithm(self.algorithm.next()),
            KeyCode::Char('A') => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('t') => self.select_kind(self.kind.next()),
            KeyCode::Char('[') => self.change_size(-1),
            KeyCode::Char(']') => self.change_size(1),
            KeyCode::Char('{') => self.change_size(-10),
            KeyCode::Char('}') => self.change_size(10),
            KeyCode::Char('-') => {
                self.set_speed(self.controller.speed().saturating_sub(SPEED_STEP))
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_speed(self.controller.speed().saturating_add(SPEED_STEP))
            }
            KeyCode::Char('c') => self.begin_custom_edit(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                self.custom_input = std::mem::take(&mut self.edit_buffer);
                let text = self.custom_input.clone();
                if self.apply_custom(&text) {
                    self.status_message = "Custom array applied".to_string();
                }
            }
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.edit_buffer.clear();
                // Back to the verdict on the text that is actually applied
                self.validation_error = input::parse_custom(&self.custom_input).err();
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
                self.validation_error = input::parse_custom(&self.edit_buffer).err();
            }
            KeyCode::Char(c)
                if c.is_ascii_digit() || matches!(c, ',' | '-' | ' ' | '.' | '+') =>
            {
                self.edit_buffer.push(c);
                self.validation_error = input::parse_custom(&self.edit_buffer).err();
            }
            _ => {}
        }
    }

    // ========== Actions ==========

    /// Whether the custom array is selected but currently invalid
    fn custom_blocked(&self) -> bool {
        self.kind == ArrayKind::Custom && self.validation_error.is_some()
    }

    fn start_sort(&mut self) {
        if self.controller.is_sorting() {
            return;
        }
        if self.custom_blocked() {
            self.status_message = "Fix the custom array first".to_string();
            return;
        }
        if self.controller.start(self.algorithm, &self.initial_array) {
            self.status_message = format!("Sorting with {}...", self.algorithm.name());
        }
    }

    fn toggle_pause(&mut self) {
        if self.controller.is_paused() {
            if self.controller.resume() {
                self.status_message = "Playing...".to_string();
            }
        } else if self.controller.pause() {
            self.status_message = "Paused".to_string();
        }
    }

    /// Step forward in the run
    fn step_forward(&mut self) {
        if self.controller.step_forward() {
            self.status_message = "Stepped forward".to_string();
        } else if self.controller.is_paused() {
            self.status_message = "Cannot step forward: already at the last step".to_string();
        }
    }

    /// Step backward in the run
    fn step_backward(&mut self) {
        if self.controller.step_backward() {
            self.status_message = "Stepped backward".to_string();
        } else if self.controller.is_paused() {
            self.status_message = "Cannot step backward: already at the first step".to_string();
        }
    }

    fn step_forward_n(&mut self, n: usize) {
        if !self.controller.is_paused() {
            return;
        }
        let stepped = (0..n).take_while(|_| self.controller.step_forward()).count();
        self.status_message = format!("Stepped forward {} step(s)", stepped);
    }

    /// Cancel a sort in progress, or return a finished run to the start
    fn cancel_or_reset(&mut self) {
        if self.controller.state() == PlaybackState::Idle {
            return;
        }
        let was_sorting = self.controller.is_sorting();
        self.controller.reset(self.initial_array.clone());
        self.status_message = if was_sorting {
            "Sort cancelled".to_string()
        } else {
            "Reset".to_string()
        };
    }

    fn new_array(&mut self) {
        if self.controller.is_sorting() {
            return;
        }
        if self.regenerate() {
            self.status_message = "New array".to_string();
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.controller.is_sorting() {
            return;
        }
        self.algorithm = algorithm;
        self.status_message = format!("Algorithm: {}", algorithm.name());
    }

    fn select_kind(&mut self, kind: ArrayKind) {
        if self.controller.is_sorting() {
            return;
        }
        self.kind = kind;
        self.regenerate();
        self.status_message = format!("Array: {}", kind.name());
    }

    fn change_size(&mut self, delta: isize) {
        if self.controller.is_sorting() || self.kind == ArrayKind::Custom {
            return;
        }
        let size = self
            .size
            .saturating_add_signed(delta)
            .clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        if size != self.size {
            self.size = size;
            self.regenerate();
            self.status_message = format!("Size: {}", size);
        }
    }

    /// Speed may change at any time, including mid-sort
    fn set_speed(&mut self, speed: u32) {
        self.controller.set_speed(speed.clamp(MIN_SPEED, MAX_SPEED));
        self.status_message = format!("Speed: {}/s", self.controller.speed());
    }

    fn begin_custom_edit(&mut self) {
        if self.controller.is_sorting() {
            return;
        }
        self.kind = ArrayKind::Custom;
        self.edit_buffer = self.custom_input.clone();
        self.mode = InputMode::EditingCustom;
        self.status_message = "Editing custom array".to_string();
    }

    /// Replace the initial array according to the current kind and size.
    /// Returns false when the custom text is invalid.
    fn regenerate(&mut self) -> bool {
        if self.kind == ArrayKind::Custom {
            let text = self.custom_input.clone();
            return self.apply_custom(&text);
        }
        match input::generate_array(self.kind, self.size, &mut self.rng) {
            Some(array) => {
                self.install_array(array);
                true
            }
            None => false,
        }
    }

    fn apply_custom(&mut self, text: &str) -> bool {
        match input::parse_custom(text) {
            Ok(array) => {
                self.validation_error = None;
                self.size = array.len();
                self.install_array(array);
                true
            }
            Err(e) => {
                debug!(error = %e, "custom array rejected");
                self.status_message = e.to_string();
                self.validation_error = Some(e);
                false
            }
        }
    }

    fn install_array(&mut self, array: Vec<i32>) {
        debug!(kind = self.kind.name(), len = array.len(), "installing array");
        self.initial_array = array.clone();
        self.controller.reset(array);
    }
}
