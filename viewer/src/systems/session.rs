use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};
use interaction::{
    ControllerId, SessionEvent, SessionProvider,
    session::{Handedness, SelectEvent, SelectPhase},
};

use crate::{constants::MOUSE_SENSITIVITY, resources::EmulatedSession};

// ============================================================================
// Emulated Session Input Systems
// ============================================================================

// Enter or leave the immersive session with V
pub fn session_toggle_system(keyboard: Res<ButtonInput<KeyCode>>, mut session: ResMut<EmulatedSession>) {
    if keyboard.just_pressed(KeyCode::KeyV) {
        session.toggle();
    }
}

// Lock the cursor for mouse look while immersed, free it for the flat UI otherwise
pub fn session_cursor_system(
    mut events: MessageReader<SessionEvent>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    for event in events.read() {
        let immersed = *event == SessionEvent::Started;
        cursor_options.visible = !immersed;
        cursor_options.grab_mode = if immersed {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
    }
}

// Mouse motion steers the head
pub fn session_look_system(mut mouse_motion: MessageReader<MouseMotion>, mut session: ResMut<EmulatedSession>) {
    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if !session.is_presenting() || delta == Vec2::ZERO {
        return;
    }
    session.look(delta * MOUSE_SENSITIVITY);
}

// Left/right mouse buttons or gamepad triggers act as the two controller triggers
pub fn session_select_system(
    mouse: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    session: Res<EmulatedSession>,
    mut selects: MessageWriter<SelectEvent>,
) {
    if !session.is_presenting() {
        return;
    }

    let bindings = [
        (ControllerId::ALL[0], MouseButton::Left, GamepadButton::LeftTrigger2),
        (ControllerId::ALL[1], MouseButton::Right, GamepadButton::RightTrigger2),
    ];
    for (controller, mouse_button, trigger) in bindings {
        let pressed = mouse.just_pressed(mouse_button) || gamepads.iter().any(|pad| pad.just_pressed(trigger));
        let released = mouse.just_released(mouse_button) || gamepads.iter().any(|pad| pad.just_released(trigger));

        if pressed {
            selects.write(SelectEvent {
                controller,
                phase: SelectPhase::Start,
            });
        }
        if released {
            selects.write(SelectEvent {
                controller,
                phase: SelectPhase::End,
            });
        }
    }
}

// WASD or the left stick drive the left thumbstick, the right stick drives the right one
pub fn session_thumbstick_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut session: ResMut<EmulatedSession>,
) {
    if !session.is_presenting() {
        return;
    }

    let mut left = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        left.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        left.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        left.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        left.x += 1.0;
    }
    let mut right = Vec2::ZERO;

    for gamepad in &gamepads {
        if left == Vec2::ZERO {
            left = gamepad.left_stick();
        }
        if right == Vec2::ZERO {
            right = gamepad.right_stick();
        }
    }

    session.set_thumbstick(Handedness::Left, left.clamp_length_max(1.0));
    session.set_thumbstick(Handedness::Right, right.clamp_length_max(1.0));
}
