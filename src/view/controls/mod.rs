//! Interactive controls

pub mod button;

pub use button::{render_button, ButtonColors, ButtonEvent, ButtonLayout, ButtonState};

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Not focused, not hovered
    #[default]
    Normal,
    /// Has keyboard focus
    Focused,
    /// Mouse is hovering over the control
    Hovered,
    /// Control cannot be activated
    Disabled,
}
