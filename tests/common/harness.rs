// Test harness that drives the App against a ratatui TestBackend

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use duotone::app::App;
use duotone::config::Config;
use duotone::view::theme::ThemeSet;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::Terminal;

pub struct AppTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl AppTestHarness {
    /// Create a harness with the default config (light mode)
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Result<Self> {
        let app = App::new(&config, ThemeSet::builtin());
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { app, terminal })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn render(&mut self) -> Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Snapshot of the rendered buffer (symbols and styles)
    pub fn buffer(&self) -> Buffer {
        self.terminal.backend().buffer().clone()
    }

    /// The rendered screen as plain text, one line per terminal row
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn get_cell_style(&self, x: u16, y: u16) -> Option<Style> {
        self.terminal
            .backend()
            .buffer()
            .cell((x, y))
            .map(|cell| cell.style())
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "Screen should contain {needle:?}:\n{screen}"
        );
    }

    /// Position of a text fragment on screen, if rendered
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        for (y, line) in self.screen_to_string().lines().enumerate() {
            if let Some(byte_x) = line.find(needle) {
                // Rendered lines are effectively single-width cells here
                let x = line[..byte_x].chars().count();
                return Some((x as u16, y as u16));
            }
        }
        None
    }

    /// Send a key press to the app
    pub fn key(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    /// Send a left-button press and release at the given cell
    pub fn click(&mut self, x: u16, y: u16) {
        self.app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        self.app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y));
    }

    /// Click the center of the toggle button (requires a prior render)
    pub fn click_button(&mut self) {
        let area = self.app.button_area();
        assert!(area.width > 0, "Button not laid out; call render() first");
        self.click(area.x + area.width / 2, area.y);
    }
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::empty(),
    }
}
