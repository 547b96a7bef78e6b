//! Ambient ember particle effect.
//!
//! A fixed pool of small rotated squares drifts up and to the right across a
//! full-window canvas:
//! - Half the pool enters from below, half from off-screen left
//! - Velocities drift by one unit on staggered 11/13-frame periods
//! - Particles that leave the canvas restart from their own spawn point
//! - Play/pause, live resize and full reinitialization
//!
//! # Example
//!
//! ```ignore
//! use ember_ambient::components::ambient::{AmbientCanvas, AmbientConfig, AmbientHandle};
//!
//! let config = RwSignal::new(AmbientConfig { particle_number: 30, ..Default::default() });
//! let handle = AmbientHandle::default();
//!
//! view! { <AmbientCanvas config=config handle=handle.clone() /> }
//! ```

mod component;
mod config;
mod debounce;
mod engine;
mod particles;
mod random;
mod scheduler;
mod surface;
#[cfg(test)]
mod testing;
pub mod theme;

pub use component::{AmbientCanvas, AmbientHandle};
pub use config::{AmbientConfig, SimulationLimits};
pub use debounce::{Clock, Debouncer};
pub use engine::AmbientEngine;
pub use particles::{Particle, ParticleSystem};
pub use random::{RandomSource, SeededRandom};
pub use scheduler::{AnimationLoop, FrameScheduler};
pub use surface::{CanvasSize, Stage, Surface};
pub use theme::EmberStyle;
