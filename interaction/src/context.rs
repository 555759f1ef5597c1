use std::time::Duration;

#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::{Ray3d, Vec3};
use bevy_transform::components::Transform;
use tracing::{debug, error, info};

use crate::{
    buttons::{ButtonGroup, ButtonId},
    config::ViewerConfig,
    gaze::GazeSelection,
    host::{ContentCatalog, LoadGeneration, SceneHost},
    locomotion,
    mode::{FlatButton, Mode},
    rig::PlayerRig,
    session::{ControllerId, HandFilter, SessionProvider},
    surfaces::WalkableSurfaces,
    teleport::{TeleportState, controller_ray},
};

// ============================================================================
// UI Layers
// ============================================================================

/// Which input surface is shown. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayers {
    /// Screen-space buttons.
    pub flat_visible: bool,
    /// In-world buttons and the gaze reticle.
    pub immersive_visible: bool,
}

impl UiLayers {
    #[must_use]
    pub const fn for_session(presenting: bool) -> Self {
        Self {
            flat_visible: !presenting,
            immersive_visible: presenting,
        }
    }
}

/// What a trigger release did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome {
    Activated(Mode),
    Teleported(Vec3),
    Nothing,
}

// ============================================================================
// Viewer Context
// ============================================================================

/// The whole interaction state of the viewer.
#[derive(Resource, Debug)]
pub struct ViewerContext {
    mode: Mode,
    generation: LoadGeneration,
    presenting: bool,
    ui: UiLayers,
    buttons: ButtonGroup,
    gaze: GazeSelection,
    teleport: TeleportState,
    rig: PlayerRig,
    catalog: ContentCatalog,
    hand_filter: HandFilter,
    initial_mode: Mode,
}

impl ViewerContext {
    /// Nothing is loaded until `start` is called.
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            mode: config.initial_mode,
            generation: LoadGeneration::default(),
            presenting: false,
            ui: UiLayers::for_session(false),
            buttons: ButtonGroup::new(config.anchor),
            gaze: GazeSelection::new(config.dwell_threshold_secs),
            teleport: TeleportState::default(),
            rig: PlayerRig::default(),
            catalog: config.content.clone(),
            hand_filter: config.hand_filter,
            initial_mode: config.initial_mode,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn generation(&self) -> LoadGeneration {
        self.generation
    }

    #[must_use]
    pub const fn is_presenting(&self) -> bool {
        self.presenting
    }

    #[must_use]
    pub const fn ui(&self) -> UiLayers {
        self.ui
    }

    #[must_use]
    pub const fn buttons(&self) -> &ButtonGroup {
        &self.buttons
    }

    #[must_use]
    pub const fn gaze(&self) -> &GazeSelection {
        &self.gaze
    }

    #[must_use]
    pub const fn teleport(&self) -> &TeleportState {
        &self.teleport
    }

    #[must_use]
    pub const fn rig(&self) -> &PlayerRig {
        &self.rig
    }

    // ========================================================================
    // Mode Controller
    // ========================================================================

    /// Load the configured initial mode.
    pub fn start(&mut self, host: &mut impl SceneHost) {
        self.switch_mode(self.initial_mode, host);
    }

    /// Full clear-and-reload, even when `target` is the current mode.
    pub fn switch_mode(&mut self, target: Mode, host: &mut impl SceneHost) {
        info!(from = ?self.mode, to = ?target, "switching mode");

        host.clear_content();
        self.buttons.clear();
        self.gaze.reset();
        self.teleport.hide_marker();

        self.mode = target;
        self.generation = self.generation.next();
        if let Some(request) = self.catalog.request_for(target, self.generation) {
            debug!(generation = %request.generation, path = %request.model.path, "requesting content");
            host.request_content(request);
        }

        self.buttons.rebuild(target);
        self.update_ui_visibility();
    }

    /// A flat-screen button was clicked.
    pub fn flat_click(&mut self, button: FlatButton, host: &mut impl SceneHost) {
        if !button.is_offered_in(self.mode) {
            debug!(key = button.key(), mode = ?self.mode, "ignoring button not offered in this mode");
            return;
        }
        if let Some(target) = button.target(self.mode) {
            self.switch_mode(target, host);
        }
    }

    /// Fire an in-world button. Unknown ids (e.g. from a previous build) are ignored.
    pub fn activate_button(&mut self, id: ButtonId, host: &mut impl SceneHost) -> Option<Mode> {
        let Some(target) = self.buttons.get(id).map(|button| button.target) else {
            debug!(?id, "ignoring activation of a button that no longer exists");
            return None;
        };
        self.switch_mode(target, host);
        Some(target)
    }

    // ========================================================================
    // Content Completion
    // ========================================================================

    /// Whether a finished load should be attached to the scene.
    pub fn accept_loaded(&self, generation: LoadGeneration) -> bool {
        if generation == self.generation {
            info!(%generation, mode = ?self.mode, "content loaded");
            true
        } else {
            debug!(%generation, current = %self.generation, "discarding stale content");
            false
        }
    }

    pub fn report_load_failure(&self, generation: LoadGeneration, path: &str, err: &anyhow::Error) {
        if generation == self.generation {
            error!(%generation, path, "failed to load content: {err:#}");
        } else {
            debug!(%generation, path, "stale load failed: {err:#}");
        }
    }

    // ========================================================================
    // Session Lifecycle
    // ========================================================================

    pub fn set_presenting(&mut self, presenting: bool) {
        if self.presenting == presenting {
            return;
        }
        info!(presenting, "immersive session changed");
        self.presenting = presenting;
        if !presenting {
            self.gaze.reset();
            self.teleport.reset();
            self.buttons.apply_hover(None);
        }
        self.update_ui_visibility();
    }

    pub const fn update_ui_visibility(&mut self) {
        self.ui = UiLayers::for_session(self.presenting);
    }

    // ========================================================================
    // Per-Frame Update
    // ========================================================================

    /// Gaze, teleport marker and locomotion, in that order. No-op unless presenting.
    pub fn frame<S, W, H>(&mut self, session: &S, surfaces: &mut W, host: &mut H, delta: Duration)
    where
        S: SessionProvider + ?Sized,
        W: WalkableSurfaces + ?Sized,
        H: SceneHost,
    {
        if !session.is_presenting() {
            return;
        }
        self.update_gaze(session, delta, host);
        self.update_teleport(session, surfaces);
        self.update_locomotion(session, delta.as_secs_f32());
    }

    #[must_use]
    pub fn head_world<S: SessionProvider + ?Sized>(&self, session: &S) -> Transform {
        self.rig.to_world(&session.head_pose())
    }

    pub fn update_gaze<S, H>(&mut self, session: &S, delta: Duration, host: &mut H) -> Option<Mode>
    where
        S: SessionProvider + ?Sized,
        H: SceneHost,
    {
        if !session.is_presenting() {
            return None;
        }
        let head = self.head_world(session);
        let ray = Ray3d {
            origin: head.translation,
            direction: head.forward(),
        };
        let hit = self.buttons.raycast(ray, &head).map(|(id, _)| id);

        let fired = self.gaze.update(hit, delta);
        self.buttons.apply_hover(self.gaze.current_target());

        let id = fired?;
        debug!(?id, "gaze dwell fired");
        self.activate_button(id, host)
    }

    pub fn update_teleport<S, W>(&mut self, session: &S, surfaces: &mut W)
    where
        S: SessionProvider + ?Sized,
        W: WalkableSurfaces + ?Sized,
    {
        if !session.is_presenting() {
            return;
        }
        let rig = self.rig;
        let poses = ControllerId::ALL
            .map(|controller| (controller, session.controller_pose(controller).map(|pose| rig.to_world(&pose))));
        self.teleport.update_marker(poses, surfaces);
    }

    pub fn update_locomotion<S: SessionProvider + ?Sized>(&mut self, session: &S, delta_secs: f32) {
        if !session.is_presenting() {
            return;
        }
        let stick = locomotion::thumbstick_input(session.input_sources(), self.hand_filter);
        let forward = self.head_world(session).forward();
        if let Some(delta) = locomotion::displacement(stick, *forward, delta_secs) {
            self.rig.translate(delta);
        }
    }

    // ========================================================================
    // Controller Select
    // ========================================================================

    pub fn select_start(&mut self, controller: ControllerId) {
        debug!(controller = controller.index(), "select start");
        self.teleport.begin_request(controller);
    }

    /// Trigger released: press a pointed-at button, else teleport to a visible marker.
    pub fn select_end<S, H>(&mut self, controller: ControllerId, session: &S, host: &mut H) -> SelectOutcome
    where
        S: SessionProvider + ?Sized,
        H: SceneHost,
    {
        debug!(controller = controller.index(), "select end");
        self.teleport.end_request(controller);

        if session.is_presenting()
            && let Some(pose) = session.controller_pose(controller)
        {
            let head = self.head_world(session);
            let ray = controller_ray(&self.rig.to_world(&pose));
            if let Some((id, _)) = self.buttons.raycast(ray, &head)
                && let Some(target) = self.activate_button(id, host)
            {
                return SelectOutcome::Activated(target);
            }
        }

        match self.teleport.take_destination() {
            Some(destination) => {
                self.rig.teleport_to(destination);
                info!(x = destination.x, z = destination.z, "teleported");
                SelectOutcome::Teleported(self.rig.position())
            }
            None => SelectOutcome::Nothing,
        }
    }
}
