use avian3d::prelude::{Collider, PhysicsPlugins, RigidBody};
use bevy::log::LogPlugin;
use bevy::prelude::{
    Add, App, Assets, ButtonInput, Camera3d, Color, Commands, Cuboid, DefaultPlugins,
    DirectionalLight, IntoScheduleConfigs, KeyCode, Mesh, Mesh3d, MeshMaterial3d, MessageWriter,
    MinimalPlugins, Name, On, PluginGroup, Res, ResMut, StandardMaterial, Startup, Transform,
    Update, Vec3, Window, WindowPlugin, default, info,
};
use bevy::window::PresentMode;

use client::entities::{PlayerCamera, spawn_player};
use client::inputs::CursorPlugin;
use client::{GameplayReset, GameplayStarted, PlayerControlPlugin};

use crate::config::LaunchConfig;
use crate::native::Cli;

pub const FLOOR_SIZE: f32 = 40.0;
pub const FLOOR_THICKNESS: f32 = 0.5;
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.5, 0.0);

pub fn create_app(cli: &Cli) -> App {
    let mut app = App::new();

    if cli.headless {
        app.add_plugins(MinimalPlugins);
        app.add_plugins(LogPlugin {
            filter: "wgpu=error,naga=warn".to_string(),
            ..default()
        });
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.add_plugins(bevy::diagnostic::DiagnosticsPlugin);
        app.add_plugins(bevy::asset::AssetPlugin::default());
        app.add_plugins(bevy::mesh::MeshPlugin);
        app.add_plugins(bevy::transform::TransformPlugin);
        app.add_plugins(bevy::input::InputPlugin);
    } else {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "First-person player".to_string(),
                resolution: (1280, 720).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }));
        app.add_plugins(CursorPlugin);
        app.add_observer(attach_camera);
    }

    app.add_plugins(PhysicsPlugins::default());
    app.add_plugins(PlayerControlPlugin);

    // Resolved after LogPlugin so config warnings are visible
    app.insert_resource(cli.launch_config());
    app.add_systems(Startup, (setup_world, start_gameplay).chain());
    app.add_systems(Update, reset_on_key);
    app
}

fn setup_world(
    mut commands: Commands,
    config: Res<LaunchConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let floor = commands
        .spawn((
            Name::new("Floor"),
            Transform::from_xyz(0.0, -FLOOR_THICKNESS / 2.0, 0.0),
            RigidBody::Static,
            Collider::cuboid(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE),
        ))
        .id();

    if let (Some(mut meshes), Some(mut materials)) = (meshes, materials) {
        commands.entity(floor).insert((
            Mesh3d(meshes.add(Cuboid::new(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE))),
            MeshMaterial3d(materials.add(Color::srgb(0.3, 0.32, 0.35))),
        ));
        commands.spawn((
            Name::new("Sun"),
            DirectionalLight::default(),
            Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }

    let player = spawn_player(
        &mut commands,
        config.movement.clone(),
        config.gun.clone(),
        PLAYER_SPAWN,
    );
    info!("🌍 World ready, player {:?} spawned", player);
}

fn start_gameplay(mut started: MessageWriter<GameplayStarted>) {
    started.write(GameplayStarted);
}

fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut resets: MessageWriter<GameplayReset>) {
    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(GameplayReset);
    }
}

fn attach_camera(trigger: On<Add, PlayerCamera>, mut commands: Commands) {
    commands.entity(trigger.entity).insert(Camera3d::default());
}
