use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use falling_sand::config::{SandboxConfigBuilder, SandboxConfigError};
use falling_sand::entities::EntitiesPluginGroup;
use falling_sand::gui::GuiPluginGroup;
use falling_sand::physics::fallingsand::elements::element::BACKGROUND;

fn main() -> Result<(), SandboxConfigError> {
    let config = SandboxConfigBuilder::new().build()?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sand".to_string(),
                        resolution: WindowResolution::new(
                            config.get_window_width() as f32,
                            config.get_window_height() as f32,
                        ),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(config)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPluginGroup)
        .run();

    Ok(())
}
