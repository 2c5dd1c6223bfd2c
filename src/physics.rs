//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   No systems, components or resources live here, only plain types.
//!   Colors and images are the exception since they are needed to render.
//! * Physics should be highly unit tested.

pub mod fallingsand;
