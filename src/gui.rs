//! This module contains all the GUI related code.
//! Things that are driven by screen coordinates rather than grid coordinates.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod brush;
pub mod fps_window;

pub struct GuiPluginGroup;

impl PluginGroup for GuiPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(brush::BrushPlugin)
            .add(fps_window::FpsWindowPlugin)
    }
}
