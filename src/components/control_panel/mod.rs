//! Debug control panel: live edits of particle count, page background and
//! texture values, plus a play/pause toggle.

mod component;
pub mod settings;

pub use component::ControlPanel;
pub use settings::PanelSettings;
