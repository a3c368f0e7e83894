//! Application shell
//!
//! Owns the theme store and both views for the lifetime of the program, and
//! dispatches terminal events to them. The store is created here and
//! subscription handles are passed into the view constructors; nothing in
//! the tree reaches for global state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::config::Config;
use crate::state::ThemeStore;
use crate::view::controls::ButtonEvent;
use crate::view::panels::{NestedView, RootLayout, RootView};
use crate::view::theme::{Theme, ThemeMode, ThemeSet};

pub struct App {
    store: ThemeStore,
    themes: ThemeSet,
    root: RootView,
    nested: NestedView,
    /// Layout from the last render, for mouse hit testing
    layout: RootLayout,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, themes: ThemeSet) -> Self {
        let mode = ThemeMode::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?} in config, using light", config.theme);
            ThemeMode::default()
        });

        let mut store = ThemeStore::new(mode);
        let root = RootView::new(store.subscribe(), &themes, mode);
        let nested = NestedView::new(store.subscribe(), &themes, mode);

        Self {
            store,
            themes,
            root,
            nested,
            layout: RootLayout::default(),
            should_quit: false,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.store.mode()
    }

    /// The palette currently displayed
    pub fn theme(&self) -> &Theme {
        self.themes.for_mode(self.store.mode())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Flip the theme; views pick up the change on the next render.
    pub fn toggle_theme(&mut self) {
        self.store.toggle();
    }

    /// Button area from the last render (for tests and hit debugging)
    pub fn button_area(&self) -> Rect {
        self.layout.button.button_area
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
            }
            _ => {
                if self.root.button.handle_key(key) == Some(ButtonEvent::Clicked) {
                    self.toggle_theme();
                }
            }
        }
    }

    /// Returns true if a re-render is needed.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match self.root.button.handle_mouse(event, &self.layout.button) {
            Some(ButtonEvent::Clicked) => {
                self.toggle_theme();
                true
            }
            // Hover or press state changed: repaint for the visual feedback
            Some(_) => true,
            None => matches!(
                event.kind,
                MouseEventKind::Down(_) | MouseEventKind::Up(_)
            ),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.root.sync(&self.themes);
        self.nested.sync(&self.themes);

        let area = frame.area();
        let layout = self.root.render(frame, area);
        self.nested.render(frame, layout.content);
        self.layout = layout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(&Config::default(), ThemeSet::builtin())
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn test_initial_mode_from_config() {
        let config = Config {
            theme: "dark".into(),
            ..Default::default()
        };
        let app = App::new(&config, ThemeSet::builtin());
        assert_eq!(app.mode(), ThemeMode::Dark);
        assert_eq!(app.theme().name, "dark");
    }

    #[test]
    fn test_unknown_config_theme_falls_back_to_light() {
        let config = Config {
            theme: "sepia".into(),
            ..Default::default()
        };
        let app = App::new(&config, ThemeSet::builtin());
        assert_eq!(app.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_key_t_toggles() {
        let mut app = app();
        assert_eq!(app.mode(), ThemeMode::Light);

        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.mode(), ThemeMode::Dark);

        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_enter_activates_focused_button() {
        let mut app = app();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), ThemeMode::Dark);

        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = App::new(&Config::default(), ThemeSet::builtin());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_click_on_button_toggles() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut app, &mut terminal);

        let area = app.button_area();
        assert!(area.width > 0, "button should have been laid out");
        let (x, y) = (area.x + area.width / 2, area.y);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        });
        let rerender = app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        });

        assert!(rerender);
        assert_eq!(app.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_mouse_click_outside_button_does_nothing() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut app, &mut terminal);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });

        assert_eq!(app.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_views_pick_up_toggle_on_next_render() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut app, &mut terminal);

        app.toggle_theme();
        draw(&mut app, &mut terminal);

        let buffer = terminal.backend().buffer();
        let style = buffer.cell((0u16, 0u16)).unwrap().style();
        assert_eq!(style.bg, Some(ratatui::style::Color::Rgb(34, 34, 34)));
    }
}
