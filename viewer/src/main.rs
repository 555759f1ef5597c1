use anyhow::Result;
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use clap::Parser;

use interaction::{
    SessionEvent, ViewerContext,
    orbit::OrbitCamera,
    session::SelectEvent,
    systems::session_lifecycle_system,
};
use viewer::{
    config::Args,
    constants::{BACKGROUND_COLOR, WINDOW_TITLE},
    resources::{ContentAnimation, EmulatedSession, PendingLoads},
    systems::{
        content::{content_animation_system, content_load_system},
        controls::{interaction_frame_system, select_system},
        session::{
            session_cursor_system, session_look_system, session_select_system, session_thumbstick_system,
            session_toggle_system,
        },
        setup::{setup_scene_system, start_viewer_system},
        ui::{setup_ui_system, ui_dwell_bar_system, ui_flat_buttons_system, ui_flat_click_system, ui_layers_system},
        visuals::{
            button_labels_system, button_visuals_system, camera_sync_system, orbit_input_system,
            teleport_ring_system, window_resize_system,
        },
    },
};

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.viewer_config()?;

    // Start Bevy app
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            resolution: (args.window_width, args.window_height).into(),
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(
        BACKGROUND_COLOR[0],
        BACKGROUND_COLOR[1],
        BACKGROUND_COLOR[2],
    )))
    .add_message::<SessionEvent>()
    .add_message::<SelectEvent>()
    .insert_resource(ViewerContext::new(&config))
    .insert_resource(EmulatedSession::default())
    .insert_resource(OrbitCamera::default())
    .insert_resource(PendingLoads::default())
    .insert_resource(ContentAnimation::default())
    .add_systems(Startup, (setup_scene_system, setup_ui_system, start_viewer_system).chain())
    .add_systems(
        Update,
        (
            (
                // Enter or leave the session with V
                session_toggle_system,
                // Announce session start/end and switch UI layers
                session_lifecycle_system::<EmulatedSession>,
                // Lock the cursor while immersed
                session_cursor_system,
                // Head and controller input
                session_look_system,
                session_thumbstick_system,
                session_select_system,
            )
                .chain(),
            (
                // Flat-screen clicks
                ui_flat_click_system,
                // Controller triggers
                select_system,
                // Gaze dwell, teleport marker and locomotion
                interaction_frame_system,
                // Attach finished loads, drop stale ones
                content_load_system,
                content_animation_system,
            )
                .chain(),
            (
                orbit_input_system,
                camera_sync_system,
                window_resize_system,
                button_visuals_system,
                button_labels_system,
                teleport_ring_system,
                ui_layers_system,
                ui_dwell_bar_system,
                ui_flat_buttons_system,
            )
                .chain(),
        )
            .chain(),
    )
    .run();

    Ok(())
}
