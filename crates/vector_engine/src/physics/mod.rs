//! Physics and collision detection

pub mod collision;
