use bevy::app::{App, Plugin, Update};
use bevy::ecs::query::With;
use bevy::ecs::system::{Query, Res, ResMut, Resource};
use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::{debug, warn};
use bevy::math::Vec2;
use bevy::window::{PrimaryWindow, Window};
use bevy_egui::EguiContexts;

use crate::config::SandboxConfig;
use crate::entities::sandbox::Sandbox;
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::elements::element::ElementType;
use crate::physics::fallingsand::util::vectors::RowColVector;

/// Left paints sand, right paints rock. Right goes last so it wins when both are held.
const BUTTON_ELEMENTS: [(MouseButton, ElementType); 2] = [
    (MouseButton::Left, ElementType::Sand),
    (MouseButton::Right, ElementType::Rock),
];

/// The brush paints every cell within this many cells of the cursor
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BrushRadius>();
        app.add_systems(
            Update,
            (
                BrushRadius::resize_brush_system,
                BrushRadius::apply_brush_system,
            ),
        );
    }
}

/// Radius in cells, 0 paints just the cell under the cursor
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushRadius(pub usize);

impl BrushRadius {
    pub const MAX: usize = 16;

    /// Every in-grid cell the brush covers when centered on `center`
    pub fn cells(self, center: RowColVector, rows: usize, cols: usize) -> Vec<RowColVector> {
        let r = self.0;
        let mut out = Vec::new();
        if rows == 0 || cols == 0 {
            return out;
        }
        for row in center.row.saturating_sub(r)..=(center.row + r).min(rows - 1) {
            for col in center.col.saturating_sub(r)..=(center.col + r).min(cols - 1) {
                let drow = row.abs_diff(center.row);
                let dcol = col.abs_diff(center.col);
                if drow * drow + dcol * dcol <= r * r {
                    out.push(RowColVector { row, col });
                }
            }
        }
        out
    }

    /// Paint the covered cells, returns how many were written
    pub fn paint(
        self,
        element_grid: &mut ElementGrid,
        center: RowColVector,
        element_type: ElementType,
    ) -> usize {
        let mut painted = 0;
        for cell in self.cells(center, element_grid.height(), element_grid.width()) {
            match element_grid.set(cell, element_type) {
                Ok(()) => painted += 1,
                Err(err) => warn!("Brush could not paint: {}", err),
            }
        }
        painted
    }

    /// Paint for every held button in `BUTTON_ELEMENTS` order, returns how many cells were written
    pub fn paint_pressed(
        self,
        mouse: &Input<MouseButton>,
        element_grid: &mut ElementGrid,
        center: RowColVector,
    ) -> usize {
        let mut painted = 0;
        for (button, element_type) in BUTTON_ELEMENTS {
            if mouse.pressed(button) {
                let n = self.paint(element_grid, center, element_type);
                debug!("Painted {} {} cells at {}", n, element_type, center);
                painted += n;
            }
        }
        painted
    }

    pub fn grow(&mut self) {
        self.0 = (self.0 + 1).min(Self::MAX);
    }

    pub fn shrink(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// The cell under the cursor, or None when the pointer is over the overlay or off the grid
pub fn brush_target(
    over_overlay: bool,
    cursor: Option<Vec2>,
    config: &SandboxConfig,
) -> Option<RowColVector> {
    if over_overlay {
        return None;
    }
    cursor.and_then(|cursor| config.cursor_to_cell(cursor.x, cursor.y))
}

/// Bevy Systems
impl BrushRadius {
    pub fn resize_brush_system(keys: Res<Input<KeyCode>>, mut brush_radius: ResMut<BrushRadius>) {
        if keys.just_pressed(KeyCode::Equals) {
            brush_radius.grow();
        }
        if keys.just_pressed(KeyCode::Minus) {
            brush_radius.shrink();
        }
    }

    /// Paints under the cursor while a mouse button is held
    pub fn apply_brush_system(
        mouse: Res<Input<MouseButton>>,
        windows: Query<&Window, With<PrimaryWindow>>,
        mut contexts: EguiContexts,
        config: Res<SandboxConfig>,
        brush_radius: Res<BrushRadius>,
        mut sandbox: Query<&mut Sandbox>,
    ) {
        if !BUTTON_ELEMENTS
            .iter()
            .any(|(button, _)| mouse.pressed(*button))
        {
            return;
        }
        let over_overlay = contexts.ctx_mut().is_pointer_over_area();
        let cursor = windows.get_single().ok().and_then(Window::cursor_position);
        let Some(center) = brush_target(over_overlay, cursor, &config) else {
            return;
        };

        for mut sandbox in sandbox.iter_mut() {
            brush_radius.paint_pressed(&mouse, sandbox.get_element_grid_mut(), center);
        }
    }
}
