use bevy::{
    app::{App, Plugin, Update},
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::{Query, Res},
    log::info,
};
use bevy_egui::{
    egui::{self},
    EguiContexts,
};
use strum::IntoEnumIterator;

use crate::entities::sandbox::Sandbox;
use crate::physics::fallingsand::elements::element::ElementType;

use super::brush::BrushRadius;

/// Small overlay in the corner, FPS plus a few stats about the grid
pub struct FpsWindowPlugin;

impl Plugin for FpsWindowPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin);
        }
        app.add_systems(Update, fps_window_system);
    }
}

/// Formats the fps line, 0 until the diagnostic has enough samples
pub fn fps_label(fps: Option<f64>) -> String {
    format!("FPS: {:.0}", fps.unwrap_or(0.0))
}

pub fn fps_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    brush_radius: Option<Res<BrushRadius>>,
    mut sandbox: Query<&mut Sandbox>,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    egui::Window::new("Sandbox")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(5.0, -5.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(fps_label(fps));
            if let Some(brush_radius) = &brush_radius {
                ui.label(format!("Brush: {}", brush_radius.0));
            }
            for mut sandbox in sandbox.iter_mut() {
                ui.separator();
                let element_grid = sandbox.get_element_grid();
                for element_type in ElementType::iter().filter(|t| !t.is_empty()) {
                    ui.label(format!(
                        "{}: {}",
                        element_type,
                        element_grid.count(element_type)
                    ));
                }
                if ui.button("Clear").clicked() {
                    info!("Clearing sandbox");
                    sandbox.get_element_grid_mut().clear();
                }
            }
        });
}
