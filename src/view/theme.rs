use anyhow::Context;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Binary display mode. `Light` is the initial value at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Toggling twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a mode name, case-insensitively. Returns None for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Label for the control that switches to the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }
}

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                // Default/Reset uses the terminal's default color
                "Default" | "Reset" => Color::Reset,
                _ => Color::White, // Default fallback
            },
        }
    }
}

/// Serializable palette definition (matches JSON structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    app: AppColors,
    panel: PanelColors,
    #[serde(default)]
    ui: UiColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppColors {
    bg: ColorDef,
    fg: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanelColors {
    bg: ColorDef,
    fg: ColorDef,
    border: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UiColors {
    #[serde(default = "default_accent")]
    accent: ColorDef,
    #[serde(default = "default_hint")]
    hint: ColorDef,
    #[serde(default = "default_status_bar_bg")]
    status_bar_bg: ColorDef,
    #[serde(default = "default_status_bar_fg")]
    status_bar_fg: ColorDef,
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            hint: default_hint(),
            status_bar_bg: default_status_bar_bg(),
            status_bar_fg: default_status_bar_fg(),
        }
    }
}

fn default_accent() -> ColorDef {
    ColorDef::Rgb(70, 130, 180) // Steel blue
}
fn default_hint() -> ColorDef {
    ColorDef::Named("DarkGray".to_string())
}
fn default_status_bar_bg() -> ColorDef {
    ColorDef::Named("DarkGray".to_string())
}
fn default_status_bar_fg() -> ColorDef {
    ColorDef::Named("White".to_string())
}

/// Palette with all UI colors for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Palette name ("light" or "dark" for the builtins)
    pub name: String,

    // Root panel colors
    pub app_bg: Color,
    pub app_fg: Color,

    // Nested panel colors
    pub panel_bg: Color,
    pub panel_fg: Color,
    pub panel_border_fg: Color,

    // UI element colors
    pub accent_fg: Color,
    pub hint_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            name: file.name,
            app_bg: file.app.bg.into(),
            app_fg: file.app.fg.into(),
            panel_bg: file.panel.bg.into(),
            panel_fg: file.panel.fg.into(),
            panel_border_fg: file.panel.border.into(),
            accent_fg: file.ui.accent.into(),
            hint_fg: file.ui.hint.into(),
            status_bar_bg: file.ui.status_bar_bg.into(),
            status_bar_fg: file.ui.status_bar_fg.into(),
        }
    }
}

impl Theme {
    /// Light palette: pale root background, white nested panel, black text
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            app_bg: Color::Rgb(238, 238, 238),
            app_fg: Color::Rgb(0, 0, 0),

            panel_bg: Color::Rgb(255, 255, 255),
            panel_fg: Color::Rgb(0, 0, 0),
            panel_border_fg: Color::Rgb(0, 0, 0),

            accent_fg: Color::Rgb(70, 130, 180), // Steel blue
            hint_fg: Color::Rgb(120, 120, 120),
            status_bar_bg: Color::Rgb(220, 220, 220),
            status_bar_fg: Color::Rgb(0, 0, 0),
        }
    }

    /// Dark palette: near-black root background, dark gray nested panel, white text
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            app_bg: Color::Rgb(34, 34, 34),
            app_fg: Color::Rgb(255, 255, 255),

            panel_bg: Color::Rgb(51, 51, 51),
            panel_fg: Color::Rgb(255, 255, 255),
            panel_border_fg: Color::Rgb(255, 255, 255),

            accent_fg: Color::Rgb(100, 149, 237), // Cornflower blue
            hint_fg: Color::Rgb(150, 150, 150),
            status_bar_bg: Color::Rgb(30, 30, 30),
            status_bar_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Builtin palette for a mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Parse a palette from JSON content
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: ThemeFile = serde_json::from_str(json).context("Failed to parse theme JSON")?;
        Ok(file.into())
    }

    /// Load a palette from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// The two palettes the application can display, resolved once at startup.
///
/// Palette files named `light.json` / `dark.json` in the themes directory
/// override the builtins; a missing or malformed file falls back to the
/// builtin palette with a logged warning.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    light: Theme,
    dark: Theme,
}

impl ThemeSet {
    /// Builtin palettes only, no filesystem access
    pub fn builtin() -> Self {
        Self {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }

    /// Resolve palettes, preferring JSON overrides from `themes_dir`
    /// (or the user themes directory when no explicit dir is given).
    pub fn load(themes_dir: Option<&Path>) -> Self {
        let dir = themes_dir.map(PathBuf::from).or_else(user_themes_dir);
        let Some(dir) = dir else {
            return Self::builtin();
        };

        Self {
            light: Self::load_mode(&dir, ThemeMode::Light),
            dark: Self::load_mode(&dir, ThemeMode::Dark),
        }
    }

    fn load_mode(dir: &Path, mode: ThemeMode) -> Theme {
        let path = dir.join(format!("{}.json", mode.name()));
        if !path.exists() {
            return Theme::for_mode(mode);
        }
        match Theme::from_file(&path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Ignoring palette override {}: {:#}", path.display(), e);
                Theme::for_mode(mode)
            }
        }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// User palette override directory (~/.config/duotone/themes/)
fn user_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("duotone").join("themes"))
}
