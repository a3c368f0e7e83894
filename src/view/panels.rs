//! The two presentational views
//!
//! `RootView` draws the full-screen panel with the title, the toggle button
//! and a status bar; `NestedView` draws the bordered inner panel. Each view
//! holds a `ThemeSubscription` and a cached style record; `sync` recomputes
//! the record when the store published a mode change, and `render` is a pure
//! function of the cached state. Repeated renders without a toggle produce
//! identical output.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::state::ThemeSubscription;
use crate::view::controls::{render_button, ButtonColors, ButtonLayout, ButtonState, FocusState};
use crate::view::theme::{Theme, ThemeMode, ThemeSet};

/// Text shown inside the nested panel
const NESTED_TEXT: &str = "This is a nested panel";

/// Style record computed from the current palette: everything a view needs
/// to paint itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub bg: Color,
    pub fg: Color,
    pub border_fg: Color,
    pub padding: u16,
}

impl PanelStyle {
    /// Style record for the root panel
    pub fn root(theme: &Theme) -> Self {
        Self {
            bg: theme.app_bg,
            fg: theme.app_fg,
            border_fg: theme.app_fg,
            padding: 1,
        }
    }

    /// Style record for the nested panel
    pub fn nested(theme: &Theme) -> Self {
        Self {
            bg: theme.panel_bg,
            fg: theme.panel_fg,
            border_fg: theme.panel_border_fg,
            padding: 1,
        }
    }

    fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }
}

/// Layout information from the root view's last render
#[derive(Debug, Clone, Copy, Default)]
pub struct RootLayout {
    /// Toggle button area for hit testing
    pub button: ButtonLayout,
    /// Area handed to the nested view
    pub content: Rect,
}

/// Full-screen view: title, toggle button, nested content area, status bar.
pub struct RootView {
    subscription: ThemeSubscription,
    mode: ThemeMode,
    style: PanelStyle,
    hint_fg: Color,
    status_bar_bg: Color,
    status_bar_fg: Color,
    button_colors: ButtonColors,
    /// The toggle control; focused by default since it is the only control
    pub button: ButtonState,
}

impl RootView {
    pub fn new(subscription: ThemeSubscription, themes: &ThemeSet, mode: ThemeMode) -> Self {
        let theme = themes.for_mode(mode);
        let button = ButtonState::new(mode.toggle_label()).with_focus(FocusState::Focused);
        Self {
            subscription,
            mode,
            style: PanelStyle::root(theme),
            hint_fg: theme.hint_fg,
            status_bar_bg: theme.status_bar_bg,
            status_bar_fg: theme.status_bar_fg,
            button_colors: ButtonColors::from_theme(theme),
            button,
        }
    }

    /// Recompute the cached style record and button label if the store
    /// published a mode change. Returns true when anything changed.
    pub fn sync(&mut self, themes: &ThemeSet) -> bool {
        let Some(mode) = self.subscription.poll() else {
            return false;
        };

        let theme = themes.for_mode(mode);
        self.mode = mode;
        self.style = PanelStyle::root(theme);
        self.hint_fg = theme.hint_fg;
        self.status_bar_bg = theme.status_bar_bg;
        self.status_bar_fg = theme.status_bar_fg;
        self.button_colors = ButtonColors::from_theme(theme);
        self.button.set_label(mode.toggle_label());
        true
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> RootLayout {
        let base = self.style.base();
        frame.render_widget(Block::new().style(base), area);

        if area.width < 8 || area.height < 7 {
            // Too small for the full layout; the background fill is all we draw
            return RootLayout::default();
        }

        let pad = self.style.padding;
        let inner = Rect::new(
            area.x + pad,
            area.y + pad,
            area.width - 2 * pad,
            area.height - 2 * pad,
        );

        let title = Paragraph::new("duotone")
            .alignment(Alignment::Center)
            .style(base.add_modifier(Modifier::BOLD));
        frame.render_widget(title, Rect::new(inner.x, inner.y, inner.width, 1));

        // Toggle button, centered
        let button_y = inner.y + 2;
        let button_width = self.button.width().min(inner.width);
        let button_x = inner.x + (inner.width - button_width) / 2;
        let button = render_button(
            frame,
            Rect::new(button_x, button_y, button_width, 1),
            &self.button,
            &self.button_colors,
        );

        let hint = Paragraph::new("Press Enter or click to toggle")
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.hint_fg).bg(self.style.bg));
        frame.render_widget(hint, Rect::new(inner.x, button_y + 1, inner.width, 1));

        // Status bar on the bottom terminal row
        let status_y = area.y + area.height - 1;
        let status = Paragraph::new(format!(" {} mode | t toggle | q quit", self.mode.name()))
            .style(Style::default().bg(self.status_bar_bg).fg(self.status_bar_fg));
        frame.render_widget(status, Rect::new(area.x, status_y, area.width, 1));

        // Remaining space between the hint line and the status bar goes to
        // the nested view
        let content_y = button_y + 3;
        let content = Rect::new(
            inner.x,
            content_y,
            inner.width,
            status_y.saturating_sub(content_y),
        );

        RootLayout { button, content }
    }
}

/// Inner bordered panel with static text.
pub struct NestedView {
    subscription: ThemeSubscription,
    style: PanelStyle,
}

impl NestedView {
    pub fn new(subscription: ThemeSubscription, themes: &ThemeSet, mode: ThemeMode) -> Self {
        Self {
            subscription,
            style: PanelStyle::nested(themes.for_mode(mode)),
        }
    }

    /// Recompute the cached style record if the store published a mode
    /// change. Returns true when anything changed.
    pub fn sync(&mut self, themes: &ThemeSet) -> bool {
        let Some(mode) = self.subscription.poll() else {
            return false;
        };

        self.style = PanelStyle::nested(themes.for_mode(mode));
        true
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let panel_width = area.width.min((NESTED_TEXT.len() + 8) as u16);
        let panel_height = area.height.min(3 + 2 * self.style.padding);
        if panel_width < 4 || panel_height < 3 {
            return;
        }

        // Center the panel in the available content area
        let panel = Rect::new(
            area.x + (area.width - panel_width) / 2,
            area.y + (area.height - panel_height) / 2,
            panel_width,
            panel_height,
        );

        let block = Block::bordered()
            .border_style(Style::default().fg(self.style.border_fg).bg(self.style.bg))
            .padding(Padding::uniform(self.style.padding))
            .style(self.style.base());

        let text = Paragraph::new(NESTED_TEXT)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(text, panel);
    }
}
