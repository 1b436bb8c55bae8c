mod camera;
mod ocean;
mod scene;
mod shaders;
mod ui;

use bevy::{prelude::*, window::PresentMode};
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        help = "Allows overriding of the asset folder path, defaults to ../data"
    )]
    assets_folder_path: Option<String>,
}

fn main() {
    let args = Args::parse();

    let assets_folder_path = args
        .assets_folder_path
        .unwrap_or_else(|| "../data".to_string());

    println!("Starting viewer with asset folder: {assets_folder_path}");

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(AssetPlugin {
                file_path: assets_folder_path,
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Open Sea".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
    );

    app.add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: false,
    });

    app.add_plugins((
        camera::OrbitCameraPlugin,
        scene::ScenePlugin,
        ocean::OceanPlugin,
        ui::TweakPanelPlugin,
    ));

    app.run();
}
