//! Button control for triggering actions
//!
//! Renders as: `[ Button Text ]`
//!
//! One module covers the whole component: state (`ButtonState`), rendering
//! (`render_button`), input handling (`ButtonState::handle_mouse`,
//! `ButtonState::handle_key`) and hit testing (`ButtonLayout`).

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::FocusState;
use crate::view::theme::Theme;

/// State for a button control
#[derive(Debug, Clone)]
pub struct ButtonState {
    /// Button label text
    pub label: String,
    /// Focus state
    pub focus: FocusState,
    /// Whether the button is currently pressed (for visual feedback)
    pub pressed: bool,
}

impl ButtonState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focus: FocusState::Normal,
            pressed: false,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Replace the label (the toggle button's label depends on the mode)
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Check if the button can be activated
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Width of the rendered control: "[ " + label + " ]"
    pub fn width(&self) -> u16 {
        (self.label.chars().count() + 4) as u16
    }

    /// Handle a mouse event against the button's rendered layout.
    ///
    /// A click is a press inside the button followed by a release inside it.
    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &ButtonLayout) -> Option<ButtonEvent> {
        if !self.is_enabled() {
            return None;
        }

        let inside = layout.contains(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.pressed = true;
                None // Wait for release to trigger the click
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_pressed = self.pressed;
                self.pressed = false;

                (inside && was_pressed).then_some(ButtonEvent::Clicked)
            }
            MouseEventKind::Moved => {
                if inside {
                    if self.focus == FocusState::Normal {
                        self.focus = FocusState::Hovered;
                    }
                    Some(ButtonEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(ButtonEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this button (when focused).
    /// Enter or Space activates it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ButtonEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(ButtonEvent::Clicked),
            _ => None,
        }
    }
}

/// Events returned from button input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Button was clicked (mouse released over button, or Enter/Space)
    Clicked,
    /// Mouse is hovering over the button
    Hovered,
    /// Mouse left the button area
    Left,
}

/// Colors for the button control
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    /// Button text color
    pub text: Color,
    /// Bracket color
    pub border: Color,
    /// Background behind the whole control
    pub bg: Color,
    /// Background while pressed
    pub pressed_bg: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Hovered highlight color
    pub hovered: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            text: Color::White,
            border: Color::Gray,
            bg: Color::Reset,
            pressed_bg: Color::DarkGray,
            focused: Color::Cyan,
            hovered: Color::Blue,
            disabled: Color::DarkGray,
        }
    }
}

impl ButtonColors {
    /// Create colors from a palette
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text: theme.app_fg,
            border: theme.hint_fg,
            bg: theme.app_bg,
            pressed_bg: theme.panel_bg,
            focused: theme.accent_fg,
            hovered: theme.accent_fg,
            disabled: theme.hint_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonLayout {
    /// The clickable button area
    pub button_area: Rect,
}

impl ButtonLayout {
    /// Check if a point is within the button
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.button_area.x
            && x < self.button_area.x + self.button_area.width
            && y >= self.button_area.y
            && y < self.button_area.y + self.button_area.height
    }
}

/// Render a button control and return its layout for hit testing.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &ButtonState,
    colors: &ButtonColors,
) -> ButtonLayout {
    if area.height == 0 || area.width < 4 {
        return ButtonLayout::default();
    }

    let (text_color, bracket_color) = match state.focus {
        FocusState::Normal => (colors.text, colors.border),
        FocusState::Focused => (colors.focused, colors.focused),
        FocusState::Hovered => (colors.hovered, colors.hovered),
        FocusState::Disabled => (colors.disabled, colors.disabled),
    };
    let bg = if state.pressed && state.is_enabled() {
        colors.pressed_bg
    } else {
        colors.bg
    };

    let actual_width = state.width().min(area.width);

    // Truncate the label if the area is narrower than the control
    let max_label_len = actual_width.saturating_sub(4) as usize;
    let display_label: String = state.label.chars().take(max_label_len).collect();

    let mut label_style = Style::default().fg(text_color).bg(bg);
    if state.focus == FocusState::Focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let bracket_style = Style::default().fg(bracket_color).bg(bg);

    let line = Line::from(vec![
        Span::styled("[ ", bracket_style),
        Span::styled(display_label, label_style),
        Span::styled(" ]", bracket_style),
    ]);

    let button_area = Rect::new(area.x, area.y, actual_width, 1);
    frame.render_widget(Paragraph::new(line), button_area);

    ButtonLayout { button_area }
}
