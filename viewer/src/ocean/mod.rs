//! Ocean surface: settings, mesh, and the per-frame uniform push.

pub mod buoyancy;

use bevy::prelude::*;

use waves::WaveBand;

use crate::shaders::water::{
    create_water_material, StandardWaterMaterial, WaterShaderPlugin, WaterUniforms,
};

/// Side length of the square ocean patch, world units.
const SURFACE_SIZE: f32 = 2.0;
/// Subdivisions along each side of the patch. The waves are vertex
/// displacement, so this sets how smooth they look.
const SURFACE_SEGMENTS: u32 = 128;

pub struct OceanPlugin;

impl Plugin for OceanPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WaterShaderPlugin)
            .init_resource::<OceanSettings>()
            .init_resource::<WaterTime>()
            .add_systems(Startup, setup_ocean_surface)
            .add_systems(
                Update,
                (
                    update_water_time,
                    push_water_uniforms,
                    buoyancy::ship_buoyancy_system,
                )
                    .chain(),
            );
    }
}

/// All live-tweakable knobs of the ocean, in one injectable resource.
///
/// The debug panel is one writer among several; tests and presets mutate
/// this the same way. Colors are authored in sRGB and converted to linear
/// when the uniform block is built.
#[derive(Resource, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OceanSettings {
    /// The big travelling wave, shared with the CPU-side buoyancy sampling.
    pub big_wave: WaveBand,
    pub small_elevation: f32,
    pub small_frequency: f32,
    pub small_speed: f32,
    pub small_iterations: u32,
    pub depth_color: Color,
    pub surface_color: Color,
    pub color_offset: f32,
    pub color_multiplier: f32,
}

impl Default for OceanSettings {
    fn default() -> Self {
        Self {
            big_wave: WaveBand::default(),
            small_elevation: 0.15,
            small_frequency: 3.0,
            small_speed: 0.2,
            small_iterations: 4,
            depth_color: Color::srgb_u8(0x11, 0x41, 0x78),
            surface_color: Color::srgb_u8(0x2c, 0x76, 0xaf),
            color_offset: 0.08,
            color_multiplier: 5.0,
        }
    }
}

impl OceanSettings {
    /// Build the shader uniform block for the given scene time. Every knob
    /// is passed through unchanged; only the colors change representation.
    pub fn material_uniforms(&self, time: f32) -> WaterUniforms {
        WaterUniforms {
            depth_color: Vec4::from_array(self.depth_color.to_linear().to_f32_array()),
            surface_color: Vec4::from_array(self.surface_color.to_linear().to_f32_array()),
            time,
            big_elevation: self.big_wave.amplitude,
            big_frequency: self.big_wave.frequency,
            big_speed: self.big_wave.speed,
            color_offset: self.color_offset,
            color_multiplier: self.color_multiplier,
            small_elevation: self.small_elevation,
            small_frequency: self.small_frequency,
            small_speed: self.small_speed,
            small_iterations: self.small_iterations,
        }
    }
}

/// Resource tracking elapsed scene time for water animation and buoyancy.
#[derive(Resource, Default)]
pub struct WaterTime {
    pub elapsed: f32,
}

/// Resource holding the shared water material handle.
///
/// The surface is a single mesh, so one material instance carries all the
/// uniforms and is rewritten in place each frame.
#[derive(Resource)]
pub struct OceanMaterialResource {
    pub handle: Handle<StandardWaterMaterial>,
}

/// System to spawn the tessellated ocean patch with the water material.
fn setup_ocean_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardWaterMaterial>>,
    settings: Res<OceanSettings>,
) {
    let mesh = Plane3d::default()
        .mesh()
        .size(SURFACE_SIZE, SURFACE_SIZE)
        .subdivisions(SURFACE_SEGMENTS);

    let handle = materials.add(create_water_material(settings.material_uniforms(0.0)));

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(handle.clone()),
        Transform::default(),
    ));

    commands.insert_resource(OceanMaterialResource { handle });

    info!("Ocean surface initialized ({SURFACE_SEGMENTS}x{SURFACE_SEGMENTS} segments)");
}

/// System to advance the water clock each frame.
fn update_water_time(time: Res<Time>, mut water_time: ResMut<WaterTime>) {
    water_time.elapsed = time.elapsed_secs();
}

/// System to copy time and settings into the material uniforms.
fn push_water_uniforms(
    water_time: Res<WaterTime>,
    settings: Res<OceanSettings>,
    ocean_material: Option<Res<OceanMaterialResource>>,
    mut materials: ResMut<Assets<StandardWaterMaterial>>,
) {
    let Some(ocean_material) = ocean_material else {
        return;
    };
    let Some(material) = materials.get_mut(&ocean_material.handle) else {
        return;
    };

    material.extension.uniform = settings.material_uniforms(water_time.elapsed);
}
