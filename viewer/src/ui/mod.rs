//! Live tweak panel for the ocean knobs.
//!
//! Every slider writes straight into [`OceanSettings`]; the next uniform
//! push picks the change up, so edits are visible on the following frame.

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiContexts;

use crate::ocean::OceanSettings;

pub struct TweakPanelPlugin;

impl Plugin for TweakPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tweak_panel);
    }
}

fn tweak_panel(mut contexts: EguiContexts, mut settings: ResMut<OceanSettings>) {
    let ctx = contexts.ctx_mut();

    egui::Window::new("Ocean")
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.collapsing("Big Waves", |ui| {
                ui.add(
                    egui::Slider::new(&mut settings.big_wave.amplitude, 0.0..=1.0)
                        .text("elevation"),
                );
                ui.add(
                    egui::Slider::new(&mut settings.big_wave.frequency.x, 0.0..=10.0)
                        .text("frequency x"),
                );
                ui.add(
                    egui::Slider::new(&mut settings.big_wave.frequency.y, 0.0..=10.0)
                        .text("frequency z"),
                );
                ui.add(egui::Slider::new(&mut settings.big_wave.speed, 0.0..=10.0).text("speed"));
            });

            ui.collapsing("Small Waves", |ui| {
                ui.add(
                    egui::Slider::new(&mut settings.small_elevation, 0.0..=1.0).text("elevation"),
                );
                ui.add(
                    egui::Slider::new(&mut settings.small_frequency, 0.0..=10.0).text("frequency"),
                );
                ui.add(egui::Slider::new(&mut settings.small_speed, 0.0..=10.0).text("speed"));
                ui.add(
                    egui::Slider::new(&mut settings.small_iterations, 0..=10).text("iterations"),
                );
            });

            ui.collapsing("Color", |ui| {
                color_knob(ui, "depth color", &mut settings.depth_color);
                color_knob(ui, "surface color", &mut settings.surface_color);
                ui.add(egui::Slider::new(&mut settings.color_offset, 0.0..=1.0).text("offset"));
                ui.add(
                    egui::Slider::new(&mut settings.color_multiplier, 0.0..=10.0)
                        .text("multiplier"),
                );
            });
        });
}

/// RGB picker bound to a Bevy color, editing in sRGB like the rest of the
/// panel ranges.
fn color_knob(ui: &mut egui::Ui, label: &str, color: &mut Color) {
    let srgba = color.to_srgba();
    let mut rgb = [srgba.red, srgba.green, srgba.blue];
    ui.horizontal(|ui| {
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Color::srgb(rgb[0], rgb[1], rgb[2]);
        }
        ui.label(label);
    });
}
