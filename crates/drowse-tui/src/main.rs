#![forbid(unsafe_code)]

//! Drowse — a single-screen terminal bedtime estimator.
//!
//! Collects a wake time, a desired amount of sleep, and a daily coffee
//! intake, feeds them into a pre-trained regression model, and shows the
//! estimated ideal bedtime in a modal alert.
//!
//! # Running
//!
//! ```sh
//! cargo run -p drowse-tui
//! ```
//!
//! # Controls
//!
//! - Up/Down (Tab/Shift+Tab): switch input
//! - Left/Right: adjust value (Shift: step wake time by an hour)
//! - Enter / c: calculate
//! - Enter / Esc / o: dismiss the alert
//! - q / Ctrl+C: quit

mod alert;
mod form;
mod theme;

use drowse_core::{Advice, ClockFormat, SleepModel, advise};
use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::{Cmd, Model, Program, ProgramConfig, ScreenMode};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use crate::form::BedtimeForm;

/// Top-level application message.
enum Msg {
    Event(Event),
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// Top-level application state.
struct DrowseApp {
    form: BedtimeForm,
    /// The alert currently shown, if any. Owned here, not by the estimator.
    alert: Option<Advice>,
    clock: ClockFormat,
    /// Loaded once at startup; `None` makes every Calculate fail softly.
    model: Option<SleepModel>,
}

impl DrowseApp {
    fn new() -> Self {
        let model = match SleepModel::bundled() {
            Ok(model) => Some(model),
            Err(err) => {
                tracing::warn!(error = %err, "sleep model failed to load");
                None
            }
        };
        Self {
            form: BedtimeForm::new(),
            alert: None,
            clock: ClockFormat::TwelveHour,
            model,
        }
    }

    fn calculate(&mut self) {
        let advice = match &self.model {
            Some(model) => advise(
                model,
                self.form.wake(),
                self.form.sleep(),
                self.form.coffee(),
                self.clock,
            ),
            None => Advice::failure(),
        };
        tracing::debug!(
            wake = %self.form.wake(),
            sleep = self.form.sleep().hours(),
            coffee = self.form.coffee().cups(),
            is_error = advice.is_error,
            "calculated bedtime"
        );
        self.alert = Some(advice);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Cmd<Msg> {
        // Ctrl+C always quits, modal or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(Modifiers::CTRL) {
            return Cmd::Quit;
        }

        if self.alert.is_some() {
            // Modal: swallow everything except dismissal.
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Escape | KeyCode::Char('o')
            ) {
                self.alert = None;
            }
            return Cmd::None;
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers == Modifiers::NONE => Cmd::Quit,
            KeyCode::Enter | KeyCode::Char('c') => {
                self.calculate();
                Cmd::None
            }
            _ => {
                self.form.handle_key(key);
                Cmd::None
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.alert.is_some() {
            " Enter/Esc: OK "
        } else {
            " \u{2191}/\u{2193}: input | \u{2190}/\u{2192}: adjust | Enter: calculate | q: quit "
        };
        Paragraph::new(hints)
            .style(theme::status_bar())
            .render(area, frame);
    }
}

impl Model for DrowseApp {
    type Message = Msg;

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        match msg {
            Msg::Event(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(&key)
            }
            _ => Cmd::None,
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());

        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(area);

        Paragraph::new(" Drowse ")
            .style(theme::title_bar())
            .render(chunks[0], frame);

        let content_block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Bedtime Estimator")
            .title_alignment(Alignment::Center)
            .style(theme::muted());

        let inner = content_block.inner(chunks[1]);
        content_block.render(chunks[1], frame);
        self.form.render(frame, inner);

        if let Some(advice) = &self.alert {
            alert::render(advice, frame, area);
        }

        self.render_status_bar(frame, chunks[2]);
    }
}

fn main() {
    let model = DrowseApp::new();
    let config = ProgramConfig {
        screen_mode: ScreenMode::AltScreen,
        ..ProgramConfig::default()
    };
    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
