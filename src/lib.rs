pub mod config;
pub mod entities;
pub mod gui;
pub mod physics;
