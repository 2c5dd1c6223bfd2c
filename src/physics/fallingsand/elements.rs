//! This module contains all the elements that are used in the sandbox.

pub mod element;
pub mod movement;
