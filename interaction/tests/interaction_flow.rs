use std::{collections::BTreeSet, time::Duration};

use bevy_math::{Quat, Vec3};
use bevy_transform::components::Transform;
use interaction::{
    ContentRequest, ControllerId, FlatButton, Mode, SceneHost, SelectOutcome, SessionProvider, ViewerConfig,
    ViewerContext,
    buttons::ButtonAnchor,
    constants::*,
    session::{Handedness, InputSource},
    surfaces::WalkableSet,
};

const FRAME: Duration = Duration::from_nanos(16_666_667); // 60 fps

// ============================================================================
// Test Doubles
// ============================================================================

#[derive(Default)]
struct RecordingHost {
    clears: usize,
    requests: Vec<ContentRequest>,
}

impl SceneHost for RecordingHost {
    fn clear_content(&mut self) {
        self.clears += 1;
    }

    fn request_content(&mut self, request: ContentRequest) {
        self.requests.push(request);
    }
}

struct ScriptedSession {
    presenting: bool,
    head: Transform,
    controllers: [Option<Transform>; CONTROLLER_COUNT],
    sources: Vec<InputSource>,
}

impl ScriptedSession {
    fn presenting() -> Self {
        Self {
            presenting: true,
            head: Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
            controllers: [None; CONTROLLER_COUNT],
            sources: Vec::new(),
        }
    }

    // Turn the head towards a rig-relative point
    fn look_at(&mut self, local_target: Vec3) {
        self.head = Transform::from_translation(self.head.translation).looking_at(local_target, Vec3::Y);
    }
}

impl SessionProvider for ScriptedSession {
    fn is_presenting(&self) -> bool {
        self.presenting
    }

    fn head_pose(&self) -> Transform {
        self.head
    }

    fn controller_pose(&self, controller: ControllerId) -> Option<Transform> {
        self.controllers[controller.index()]
    }

    fn input_sources(&self) -> &[InputSource] {
        &self.sources
    }
}

fn started(config: &ViewerConfig) -> (ViewerContext, RecordingHost) {
    let mut ctx = ViewerContext::new(config);
    let mut host = RecordingHost::default();
    ctx.start(&mut host);
    (ctx, host)
}

fn names(ctx: &ViewerContext) -> BTreeSet<&'static str> {
    ctx.buttons().names()
}

// ============================================================================
// Mode Transitions
// ============================================================================

#[test]
fn every_switch_leaves_only_the_new_modes_buttons() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    let script = [
        Mode::EnvironmentA,
        Mode::EnvironmentB,
        Mode::EnvironmentB,
        Mode::Menu,
        Mode::EnvironmentB,
        Mode::Menu,
    ];

    for target in script {
        let previous: BTreeSet<_> = ctx.buttons().iter().map(|button| button.id).collect();
        ctx.switch_mode(target, &mut host);

        assert_eq!(ctx.mode(), target);
        let expected: BTreeSet<_> = FlatButton::offered_in(target).map(FlatButton::key).collect();
        assert_eq!(names(&ctx), expected);
        assert!(ctx.buttons().iter().all(|button| !previous.contains(&button.id)));
    }
    assert_eq!(host.clears, script.len() + 1);
}

#[test]
fn menu_round_trip_restores_button_names() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    let at_menu = names(&ctx);

    ctx.switch_mode(Mode::EnvironmentA, &mut host);
    assert_ne!(names(&ctx), at_menu);
    ctx.switch_mode(Mode::Menu, &mut host);
    assert_eq!(names(&ctx), at_menu);
}

#[test]
fn superseded_load_is_discarded() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.flat_click(FlatButton::ToEnvironmentB, &mut host);
    ctx.flat_click(FlatButton::ToMenu, &mut host);

    // The character finishes loading after the user already went back
    let late = host.requests.last().unwrap().generation;
    assert!(!ctx.accept_loaded(late));
    assert_eq!(ctx.mode(), Mode::Menu);
}

// ============================================================================
// Gaze Dwell
// ============================================================================

#[test]
fn steady_gaze_for_ten_seconds_fires_six_times() {
    let config = ViewerConfig::default();
    let (mut ctx, mut host) = started(&config);
    ctx.set_presenting(true);

    // The left slot holds "to env1" in the menu and "to menu" in an environment
    let mut session = ScriptedSession::presenting();
    let head = ctx.head_world(&session);
    let left = ctx.buttons().iter().next().unwrap().clone();
    session.look_at(ctx.buttons().world_position(&left, &head) - ctx.rig().position());

    let mut surfaces = WalkableSet::default();
    let mut fired = Vec::new();
    for _ in 0..600 {
        ctx.frame(&session, &mut surfaces, &mut host, FRAME);
        // Every fire is a full reload, even without a visible change
        if host.clears > fired.len() + 1 {
            fired.push(ctx.mode());
        }
    }

    assert_eq!(fired.len(), 6);
    assert_eq!(
        fired,
        vec![
            Mode::EnvironmentA,
            Mode::Menu,
            Mode::EnvironmentA,
            Mode::Menu,
            Mode::EnvironmentA,
            Mode::Menu
        ]
    );
}

#[test]
fn glancing_between_buttons_never_fires() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.set_presenting(true);

    let mut session = ScriptedSession::presenting();
    let head = ctx.head_world(&session);
    let targets: Vec<Vec3> = ctx
        .buttons()
        .iter()
        .map(|button| ctx.buttons().world_position(button, &head) - ctx.rig().position())
        .collect();

    let mut surfaces = WalkableSet::default();
    for target in targets {
        session.look_at(target);
        for _ in 0..60 {
            ctx.frame(&session, &mut surfaces, &mut host, FRAME);
        }
    }

    assert_eq!(ctx.mode(), Mode::Menu);
    assert_eq!(host.clears, 1);
}

#[test]
fn head_locked_buttons_are_out_of_gaze_reach() {
    let config = ViewerConfig {
        anchor: ButtonAnchor::HeadLocked,
        ..ViewerConfig::default()
    };
    let (mut ctx, mut host) = started(&config);
    ctx.set_presenting(true);

    // Wherever the head turns, the row turns with it and stays off-center
    let mut session = ScriptedSession::presenting();
    let mut surfaces = WalkableSet::default();
    for step in 0..300 {
        session.head.rotation = Quat::from_rotation_y(step as f32 * 0.05);
        ctx.frame(&session, &mut surfaces, &mut host, FRAME);
    }
    assert_eq!(ctx.mode(), Mode::Menu);
    assert!(ctx.gaze().current_target().is_none());
}

// ============================================================================
// Teleport and Locomotion
// ============================================================================

#[test]
fn marker_only_visible_while_requesting() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.set_presenting(true);

    let mut session = ScriptedSession::presenting();
    let down = Transform::from_xyz(0.2, 1.2, -0.2).with_rotation(Quat::from_rotation_x(-0.6));
    session.controllers = [Some(down); CONTROLLER_COUNT];
    let mut surfaces = WalkableSet::default();
    let [first, second] = ControllerId::ALL;

    for frame in 0..120 {
        match frame {
            10 => ctx.select_start(first),
            40 => ctx.select_start(second),
            60 => {
                ctx.select_end(first, &session, &mut host);
            }
            90 => {
                ctx.select_end(second, &session, &mut host);
            }
            _ => {}
        }
        ctx.frame(&session, &mut surfaces, &mut host, FRAME);
        if !ctx.teleport().any_requesting() {
            assert!(!ctx.teleport().marker().visible, "marker visible at idle frame {frame}");
        }
    }
}

#[test]
fn release_relocates_rig_to_marker() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.set_presenting(true);

    let mut session = ScriptedSession::presenting();
    let controller = ControllerId::ALL[0];
    session.controllers[0] = Some(Transform::from_xyz(-0.2, 1.2, 0.0).with_rotation(Quat::from_rotation_x(-0.4)));
    let mut surfaces = WalkableSet::default();

    ctx.select_start(controller);
    ctx.frame(&session, &mut surfaces, &mut host, FRAME);
    let marker = ctx.teleport().marker();
    assert!(marker.visible);

    let outcome = ctx.select_end(controller, &session, &mut host);
    let rig = ctx.rig().position();
    assert_eq!(outcome, SelectOutcome::Teleported(rig));
    assert_eq!((rig.x, rig.y, rig.z), (marker.position.x, GROUND_HEIGHT, marker.position.z));
    assert!(!ctx.teleport().marker().visible);
}

#[test]
fn release_without_marker_does_nothing() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.set_presenting(true);
    let session = ScriptedSession::presenting();
    let controller = ControllerId::ALL[1];

    ctx.select_start(controller);
    assert_eq!(ctx.select_end(controller, &session, &mut host), SelectOutcome::Nothing);
    assert_eq!(ctx.rig().position(), RIG_START);
}

#[test]
fn thumbstick_respects_dead_zone_and_hand() {
    let (mut ctx, mut host) = started(&ViewerConfig::default());
    ctx.set_presenting(true);
    let mut surfaces = WalkableSet::default();

    let mut session = ScriptedSession::presenting();
    session.sources = vec![
        InputSource {
            handedness: Handedness::Right,
            axes: vec![0.0, 0.0, 1.0, -1.0],
        },
        InputSource {
            handedness: Handedness::Left,
            axes: vec![0.0, 0.0, 0.1, -0.1],
        },
    ];
    ctx.frame(&session, &mut surfaces, &mut host, Duration::from_secs(1));
    assert_eq!(ctx.rig().position(), RIG_START);

    session.sources[1].axes = vec![0.0, 0.0, 0.0, -0.11];
    ctx.frame(&session, &mut surfaces, &mut host, Duration::from_secs(1));
    let moved = ctx.rig().position() - RIG_START;
    assert!(moved.z < 0.0);
    assert!((moved.z + 0.22).abs() < 1e-5);
    assert_eq!(moved.y, 0.0);
}
