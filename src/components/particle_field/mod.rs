//! Particle network canvas effect.
//!
//! Renders a field of drifting points on an HTML canvas, joining nearby
//! points with faint lines:
//! - Fixed-size generations, recreated wholesale on (debounced) resize
//! - Edge reflection with per-frame damping
//! - Optional pointer repulsion
//! - Twinkling opacity with a soft glow
//! - Paused while the tab is hidden
//!
//! The page uses two configurations of the same component:
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! view! {
//!     <div class="hero"><ParticleFieldCanvas config=FieldConfig::hero() /></div>
//!     <div class="backdrop"><ParticleFieldCanvas config=FieldConfig::backdrop() /></div>
//! }
//! ```

mod component;
pub mod config;
mod driver;
mod particles;
mod render;
mod state;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use driver::FieldDriver;
pub use particles::Particle;
pub use render::{Surface, render};
pub use state::{Connection, FieldState, link_alpha, repulsion};
