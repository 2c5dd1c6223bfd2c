//! Useful functions and structs for fallingsand calculations.

pub mod functions;
pub mod grid;
pub mod image;
pub mod vectors;
