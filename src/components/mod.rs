//! Page effects and the plumbing they share.

pub mod counter;
pub mod cursor;
pub mod frames;
mod listener;
pub mod particle_field;
