//! Falling sand physics engine.
//! A single grid of cells, sand falls and piles up, rock stays where it is put.

pub mod data;
pub mod elements;
pub mod util;
