//! Water material backed by the embedded ocean shader.
//!
//! This extends Bevy's `StandardMaterial` with the wave and color uniforms
//! the WGSL shader consumes, so the ocean still receives PBR lighting and
//! fog while its vertices are displaced procedurally.

use bevy::{
    asset::embedded_asset,
    pbr::{ExtendedMaterial, MaterialExtension, StandardMaterial},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};

/// Plugin that registers the water material and its embedded shader.
pub struct WaterShaderPlugin;

impl Plugin for WaterShaderPlugin {
    fn build(&self, app: &mut App) {
        // Embed the shader at compile time
        embedded_asset!(app, "../../../data/shaders/ocean.wgsl");

        app.add_plugins(MaterialPlugin::<StandardWaterMaterial>::default());
    }
}

/// Uniform data for the ocean shader (matches the WGSL `OceanUniforms`
/// struct; field order is the layout contract).
#[derive(Clone, Copy, Debug, PartialEq, Reflect, ShaderType)]
pub struct WaterUniforms {
    /// Color of deep troughs (linear RGBA)
    pub depth_color: Vec4,
    /// Color of wave crests (linear RGBA)
    pub surface_color: Vec4,
    /// Elapsed scene time, updated each frame
    pub time: f32,
    /// Big-wave band elevation
    pub big_elevation: f32,
    /// Big-wave spatial frequency per axis (x, z)
    pub big_frequency: Vec2,
    /// Big-wave phase speed
    pub big_speed: f32,
    /// Bias added to elevation before the color mix
    pub color_offset: f32,
    /// Gain applied to elevation in the color mix
    pub color_multiplier: f32,
    /// Perlin chop elevation
    pub small_elevation: f32,
    /// Perlin chop spatial frequency
    pub small_frequency: f32,
    /// Perlin chop animation speed
    pub small_speed: f32,
    /// Number of chop octaves evaluated per vertex
    pub small_iterations: u32,
}

/// Water material extension carrying [`WaterUniforms`] at binding 100.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone)]
pub struct WaterExtension {
    #[uniform(100)]
    pub uniform: WaterUniforms,
}

impl MaterialExtension for WaterExtension {
    fn vertex_shader() -> ShaderRef {
        "embedded://viewer/data/shaders/ocean.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "embedded://viewer/data/shaders/ocean.wgsl".into()
    }
}

/// Type alias for the complete water material.
pub type StandardWaterMaterial = ExtendedMaterial<StandardMaterial, WaterExtension>;

/// Creates the water material with the given starting uniforms.
pub fn create_water_material(uniform: WaterUniforms) -> StandardWaterMaterial {
    ExtendedMaterial {
        base: StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 0.3,
            reflectance: 0.5,
            cull_mode: None, // Render both sides so troughs stay visible from low angles
            double_sided: true,
            ..default()
        },
        extension: WaterExtension { uniform },
    }
}
