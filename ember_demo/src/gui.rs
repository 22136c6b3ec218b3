//! Control panel for the camera and scene parameters.

use ember_renderer::glam::Vec3;
use ember_renderer::Renderer;

/// GUI-owned state that outlives a single frame
pub struct GuiState {
    pub sensitivity: f32,
    pub move_speed: f32,
    pub look_at_target: Vec3,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            move_speed: 0.1,
            look_at_target: Vec3::ZERO,
        }
    }
}

fn vec3_row(ui: &mut egui::Ui, label: &str, value: &mut Vec3) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui.add(egui::DragValue::new(&mut value.x).speed(0.1)).changed();
        changed |= ui.add(egui::DragValue::new(&mut value.y).speed(0.1)).changed();
        changed |= ui.add(egui::DragValue::new(&mut value.z).speed(0.1)).changed();
        ui.label(label);
    });
    changed
}

/// Draw the control panel and apply edits to the renderer
pub fn draw(ctx: &egui::Context, renderer: &mut Renderer, state: &mut GuiState) {
    egui::Window::new("Renderer").show(ctx, |ui| {
        ui.collapsing("Camera Control", |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut state.sensitivity).speed(0.01));
                ui.label("Camera Sensitivity");
            });
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut state.move_speed).speed(0.01));
                ui.label("Camera Speed");
            });
            ui.separator();

            let camera = renderer.camera_mut();

            let mut position = camera.position();
            if vec3_row(ui, "Camera Position", &mut position) {
                camera.set_position(position);
            }

            let mut angles_deg =
                camera.orientation_angles() * (180.0 / std::f32::consts::PI);
            let mut angles_changed = false;
            ui.horizontal(|ui| {
                angles_changed |= ui
                    .add(egui::DragValue::new(&mut angles_deg.y).speed(1.0))
                    .changed();
                ui.label("Yaw");
            });
            ui.horizontal(|ui| {
                angles_changed |= ui
                    .add(egui::DragValue::new(&mut angles_deg.x).speed(1.0))
                    .changed();
                ui.label("Pitch");
            });
            ui.horizontal(|ui| {
                angles_changed |= ui
                    .add(egui::DragValue::new(&mut angles_deg.z).speed(1.0))
                    .changed();
                ui.label("Roll");
            });
            if angles_changed {
                camera.set_orientation_euler(angles_deg * (std::f32::consts::PI / 180.0));
            }
            ui.separator();

            vec3_row(ui, "LookAt Position", &mut state.look_at_target);
            if ui.button("Look").clicked() {
                camera.look_at(state.look_at_target);
            }
        });

        ui.collapsing("Scene", |ui| {
            let mut light_position = renderer.light().position;
            if vec3_row(ui, "Light Position", &mut light_position) {
                renderer.light_mut().position = light_position;
            }

            let mut rgb = renderer.light().color.to_array();
            ui.horizontal(|ui| {
                if ui.color_edit_button_rgb(&mut rgb).changed() {
                    renderer.light_mut().color = Vec3::from_array(rgb);
                }
                ui.label("Light Color");
            });

            let mut power = renderer.light().power;
            ui.horizontal(|ui| {
                if ui.add(egui::DragValue::new(&mut power).speed(0.05)).changed() {
                    renderer.light_mut().power = power;
                }
                ui.label("Light Power");
            });

            let mut alpha = renderer.model_alpha();
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Slider::new(&mut alpha, 0.0..=1.0))
                    .changed()
                {
                    renderer.set_model_alpha(alpha);
                }
                ui.label("Model Alpha");
            });
        });
    });
}
