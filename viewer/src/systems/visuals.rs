use std::collections::HashSet;

use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
    window::WindowResized,
};
use interaction::{
    ViewerContext,
    buttons::InteractableButton,
    constants::REST_SCALE,
    orbit::{OrbitCamera, aspect_ratio},
};

use crate::{
    components::{ButtonLabel, ButtonVisual},
    constants::*,
    markers::{MainCameraMarker, TeleportRingMarker},
    resources::{ButtonAssets, EmulatedSession},
};

const fn layer_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

// ============================================================================
// In-World Buttons
// ============================================================================

fn button_transform(ctx: &ViewerContext, button: &InteractableButton, head: &Transform) -> Transform {
    let frame = ctx.buttons().frame(head);
    Transform::from_translation(ctx.buttons().world_position(button, head))
        .with_rotation(frame.rotation)
        .with_scale(Vec3::splat(button.hover_scale))
}

// Keep one quad per built button; stale quads go away on rebuild
pub fn button_visuals_system(
    mut commands: Commands,
    ctx: Res<ViewerContext>,
    session: Res<EmulatedSession>,
    assets: Res<ButtonAssets>,
    mut visuals: Query<(
        Entity,
        &ButtonVisual,
        &mut Transform,
        &mut Visibility,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let head = ctx.head_world(&*session);
    let visibility = layer_visibility(ctx.ui().immersive_visible);
    let mut shown = HashSet::new();

    for (entity, visual, mut transform, mut button_visibility, mut material) in &mut visuals {
        let Some(button) = ctx.buttons().get(visual.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        shown.insert(button.id);

        *transform = button_transform(&ctx, button, &head);
        *button_visibility = visibility;
        material.0 = if button.hover_scale > REST_SCALE {
            assets.hover_material.clone()
        } else {
            assets.material.clone()
        };
    }

    for button in ctx.buttons().iter().filter(|button| !shown.contains(&button.id)) {
        commands.spawn((
            ButtonVisual { id: button.id },
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            button_transform(&ctx, button, &head),
            visibility,
        ));
    }
}

// Project button captions onto the screen above their quads
pub fn button_labels_system(
    mut commands: Commands,
    ctx: Res<ViewerContext>,
    session: Res<EmulatedSession>,
    camera: Single<(&Camera, &GlobalTransform), With<MainCameraMarker>>,
    mut labels: Query<(Entity, &ButtonLabel, &mut Node, &mut Visibility)>,
) {
    let (camera, camera_transform) = *camera;
    let head = ctx.head_world(&*session);
    let immersive = ctx.ui().immersive_visible;
    let mut shown = HashSet::new();

    for (entity, label, mut node, mut visibility) in &mut labels {
        let Some(button) = ctx.buttons().get(label.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        shown.insert(button.id);

        let screen = camera.world_to_viewport(camera_transform, ctx.buttons().world_position(button, &head));
        match screen {
            Ok(screen) if immersive => {
                node.left = Val::Px(screen.x - BUTTON_LABEL_WIDTH / 2.0);
                node.top = Val::Px(screen.y - BUTTON_LABEL_FONT_SIZE / 2.0);
                *visibility = Visibility::Visible;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }

    for button in ctx.buttons().iter().filter(|button| !shown.contains(&button.id)) {
        commands.spawn((
            ButtonLabel { id: button.id },
            Text::new(button.label.clone()),
            TextFont {
                font_size: BUTTON_LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(Justify::Center),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(BUTTON_LABEL_WIDTH),
                ..default()
            },
            // Placed on the next frame once the camera has a projection
            Visibility::Hidden,
        ));
    }
}

// ============================================================================
// Teleport Marker
// ============================================================================

pub fn teleport_ring_system(
    ctx: Res<ViewerContext>,
    ring: Single<(&mut Transform, &mut Visibility), With<TeleportRingMarker>>,
) {
    let marker = ctx.teleport().marker();
    let (mut transform, mut visibility) = ring.into_inner();

    if marker.visible {
        transform.translation = marker.position + Vec3::Y * MARKER_LIFT;
    }
    *visibility = layer_visibility(marker.visible);
}

// ============================================================================
// Camera
// ============================================================================

// Follow the head while immersed, the orbit camera otherwise
pub fn camera_sync_system(
    ctx: Res<ViewerContext>,
    session: Res<EmulatedSession>,
    orbit: Res<OrbitCamera>,
    mut camera: Single<&mut Transform, With<MainCameraMarker>>,
) {
    **camera = if ctx.is_presenting() {
        ctx.head_world(&*session)
    } else {
        orbit.transform()
    };
}

// Drag with the left mouse button to orbit, scroll to zoom
pub fn orbit_input_system(
    ctx: Res<ViewerContext>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let steps: f32 = mouse_wheel
        .read()
        .map(|wheel| match wheel.unit {
            MouseScrollUnit::Line => wheel.y * SCROLL_LINE_STEPS,
            MouseScrollUnit::Pixel => wheel.y * SCROLL_PIXEL_STEPS,
        })
        .sum();

    if ctx.is_presenting() {
        return;
    }
    if mouse.pressed(MouseButton::Left) && drag != Vec2::ZERO {
        orbit.rotate(drag * MOUSE_SENSITIVITY);
    }
    if steps != 0.0 {
        orbit.zoom(steps);
    }
}

// Keep the projection's aspect ratio in step with the window
pub fn window_resize_system(
    mut resized: MessageReader<WindowResized>,
    mut projection: Single<&mut Projection, With<MainCameraMarker>>,
) {
    for event in resized.read() {
        if let Some(aspect) = aspect_ratio(event.width, event.height)
            && let Projection::Perspective(perspective) = &mut **projection
        {
            perspective.aspect_ratio = aspect;
        }
    }
}
