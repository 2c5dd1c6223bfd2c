use bevy::app::{App, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::core_2d::Camera2dBundle;
use bevy::ecs::component::Component;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Commands, Query, Res, ResMut};
use bevy::log::info;
use bevy::math::Vec2;
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};

use crate::config::SandboxConfig;
use crate::gui::brush::BrushRadius;
use crate::physics::fallingsand::data::element_grid::ElementGrid;

/// Owns the simulation, lives next to the sprite that displays it
#[derive(Component)]
pub struct Sandbox {
    pub element_grid: ElementGrid,
}

impl Sandbox {
    /// An empty sandbox sized from the config
    pub fn new(config: &SandboxConfig) -> Self {
        let element_grid = match config.get_seed() {
            Some(seed) => ElementGrid::new_seeded(config.cols(), config.rows(), seed),
            None => ElementGrid::new(config.cols(), config.rows()),
        };
        Self { element_grid }
    }

    pub fn get_element_grid(&self) -> &ElementGrid {
        &self.element_grid
    }

    pub fn get_element_grid_mut(&mut self) -> &mut ElementGrid {
        &mut self.element_grid
    }
}

/// A plugin that spawns the sandbox and steps it once per frame
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(
            Update,
            (Self::process_system, Self::texture_system)
                .chain()
                .after(BrushRadius::apply_brush_system),
        );
    }
}

/// Bevy Systems
impl SandboxPlugin {
    /// Creates the camera and a sprite stretched over the whole window
    /// One texel per cell, nearest sampling turns each texel into a cell_size square
    pub fn setup(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        config: Res<SandboxConfig>,
    ) {
        let sandbox = Sandbox::new(&config);
        info!(
            "Sandbox is {} cols x {} rows, {}px cells",
            config.cols(),
            config.rows(),
            config.get_cell_size()
        );

        let texture = images.add(sandbox.get_element_grid().get_texture().to_bevy_image());
        commands.spawn(Camera2dBundle::default());
        commands.spawn((
            sandbox,
            SpriteBundle {
                sprite: Sprite {
                    custom_size: Some(Vec2::new(
                        config.get_window_width() as f32,
                        config.get_window_height() as f32,
                    )),
                    ..Default::default()
                },
                texture,
                ..Default::default()
            },
        ));
    }

    /// Run this system every frame to advance the simulation
    pub fn process_system(mut sandbox: Query<&mut Sandbox>) {
        for mut sandbox in sandbox.iter_mut() {
            sandbox.get_element_grid_mut().evolve();
        }
    }

    /// Copies the grid into the sprite's texture
    pub fn texture_system(
        sandbox: Query<(&Sandbox, &Handle<Image>)>,
        mut images: ResMut<Assets<Image>>,
    ) {
        for (sandbox, handle) in sandbox.iter() {
            if let Some(image) = images.get_mut(handle) {
                *image = sandbox.get_element_grid().get_texture().to_bevy_image();
            }
        }
    }
}
