//! Page data shaped for rendering.

pub mod appointments;
pub mod dashboard;
