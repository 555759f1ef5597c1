use bevy::prelude::*;
use interaction::{
    ViewerContext,
    constants::{BUTTON_SIZE, GROUND_HEIGHT, GROUND_PLANE_SIZE},
};

use crate::{
    constants::*,
    markers::{ContentHolderMarker, MainCameraMarker, TeleportRingMarker},
    resources::ButtonAssets,
    systems::content::SceneHostParam,
};

// ============================================================================
// Scene Setup Systems
// ============================================================================

pub fn setup_scene_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Add main camera (transform is driven by camera_sync_system)
    commands.spawn((
        IsDefaultUiCamera,
        MainCameraMarker,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::default(),
    ));

    // Add directional light for shape definition
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_DIRECTIONAL_BRIGHTNESS,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(
            LIGHT_DIRECTIONAL_POSITION[0],
            LIGHT_DIRECTIONAL_POSITION[1],
            LIGHT_DIRECTIONAL_POSITION[2],
        )
        .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Add ambient light for diffuse fill lighting
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: LIGHT_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });

    // Create the ground plane teleport rays land on outside loaded content
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_PLANE_SIZE, GROUND_PLANE_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.2))),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
    ));

    // Group every loaded model is parented to
    commands.spawn((ContentHolderMarker, Transform::default(), Visibility::default()));

    // Teleport landing ring, lying flat and hidden until a controller aims at the floor
    commands.spawn((
        TeleportRingMarker,
        Mesh3d(meshes.add(Annulus::new(MARKER_INNER_RADIUS, MARKER_OUTER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(MARKER_COLOR[0], MARKER_COLOR[1], MARKER_COLOR[2]),
            unlit: true,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        Visibility::Hidden,
    ));

    // Shared assets for the in-world buttons
    let button_material = |rgba: [f32; 4]| StandardMaterial {
        base_color: Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3]),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    };
    commands.insert_resource(ButtonAssets {
        mesh: meshes.add(Rectangle::new(BUTTON_SIZE.x, BUTTON_SIZE.y)),
        material: materials.add(button_material(BUTTON_COLOR)),
        hover_material: materials.add(button_material(BUTTON_HOVER_COLOR)),
    });
}

// Load the initial mode once the content holder exists
pub fn start_viewer_system(mut ctx: ResMut<ViewerContext>, mut host: SceneHostParam) {
    ctx.start(&mut host);
}
