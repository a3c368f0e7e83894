//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod controls;
pub mod panels;
pub mod theme;
