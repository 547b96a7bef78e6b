//! UI components: the ember canvas and its debug control panel.

pub mod ambient;
pub mod control_panel;
