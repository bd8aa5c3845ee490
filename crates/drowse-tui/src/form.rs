#![forbid(unsafe_code)]

//! The three-section input form.
//!
//! Focus moves between the wake-time, sleep-amount, and coffee sections;
//! Left/Right step the focused value. All bounds are enforced here in the
//! input layer — the estimator never sees an out-of-range value.

use drowse_core::{CoffeeIntake, SleepAmount, TimeOfDay};
use ftui_core::event::{KeyCode, KeyEvent, Modifiers};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use crate::theme;

/// Which form section has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Wake,
    Sleep,
    Coffee,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Wake => Self::Sleep,
            Self::Sleep => Self::Coffee,
            Self::Coffee => Self::Wake,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Wake => Self::Coffee,
            Self::Sleep => Self::Wake,
            Self::Coffee => Self::Sleep,
        }
    }
}

/// Minutes stepped per Left/Right press on the wake-time section.
const WAKE_STEP_MINUTES: i32 = 15;

pub struct BedtimeForm {
    wake: TimeOfDay,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
    focus: Field,
}

impl Default for BedtimeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BedtimeForm {
    pub fn new() -> Self {
        Self {
            wake: TimeOfDay::DEFAULT_WAKE,
            sleep: SleepAmount::default(),
            coffee: CoffeeIntake::default(),
            focus: Field::Wake,
        }
    }

    pub fn wake(&self) -> TimeOfDay {
        self.wake
    }

    pub fn sleep(&self) -> SleepAmount {
        self.sleep
    }

    pub fn coffee(&self) -> CoffeeIntake {
        self.coffee
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Handle a key press. Returns `true` if the form consumed it.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = self.focus.prev();
                true
            }
            KeyCode::Right => {
                self.step(1, key.modifiers);
                true
            }
            KeyCode::Left => {
                self.step(-1, key.modifiers);
                true
            }
            KeyCode::Char('+') => {
                self.step(1, Modifiers::NONE);
                true
            }
            KeyCode::Char('-') => {
                self.step(-1, Modifiers::NONE);
                true
            }
            _ => false,
        }
    }

    fn step(&mut self, direction: i32, modifiers: Modifiers) {
        match self.focus {
            Field::Wake => {
                // Shift steps a full hour, otherwise quarter-hour.
                self.wake = if modifiers.contains(Modifiers::SHIFT) {
                    self.wake.add_hours(direction)
                } else {
                    self.wake.add_minutes(direction * WAKE_STEP_MINUTES)
                };
            }
            Field::Sleep => {
                self.sleep = if direction > 0 {
                    self.sleep.increment()
                } else {
                    self.sleep.decrement()
                };
            }
            Field::Coffee => {
                self.coffee = if direction > 0 {
                    self.coffee.increment()
                } else {
                    self.coffee.decrement()
                };
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(4),
                Constraint::Fixed(4),
                Constraint::Fixed(4),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_section(
            frame,
            chunks[0],
            Field::Wake,
            "When do you want to wake up?",
            &self.wake.to_string(),
        );
        self.render_section(
            frame,
            chunks[1],
            Field::Sleep,
            "Desired amount of sleep",
            &self.sleep.label(),
        );
        self.render_section(
            frame,
            chunks[2],
            Field::Coffee,
            "Daily coffee intake",
            &self.coffee.label(),
        );
    }

    fn render_section(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: Field,
        headline: &str,
        value: &str,
    ) {
        if area.is_empty() {
            return;
        }

        let focused = self.focus == field;
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(headline)
            .title_alignment(Alignment::Left)
            .style(theme::section_border(focused));

        let inner = block.inner(area);
        block.render(area, frame);

        if inner.is_empty() {
            return;
        }

        let marker = if focused { "\u{25C2} " } else { "  " };
        let line = format!("{marker}{value}");
        let style = if focused {
            theme::value_focused()
        } else {
            theme::body()
        };
        Paragraph::new(line).style(style).render(inner, frame);
    }
}
