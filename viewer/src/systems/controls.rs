use bevy::{
    picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings},
    prelude::*,
};
use interaction::{
    SelectOutcome, SessionProvider, ViewerContext,
    session::{SelectEvent, SelectPhase},
    surfaces::{GroundPlane, WalkableSurfaces},
};

use crate::{markers::ContentHolderMarker, resources::EmulatedSession, systems::content::SceneHostParam};

// ============================================================================
// Walkable Scene Geometry
// ============================================================================

// Ground plane plus every mesh below the content holder
struct SceneWalkables<'a, 'w, 's, F: Fn(Entity) -> bool> {
    ground: GroundPlane,
    meshes: &'a mut MeshRayCast<'w, 's>,
    is_content: F,
}

impl<F: Fn(Entity) -> bool> WalkableSurfaces for SceneWalkables<'_, '_, '_, F> {
    fn cast_walkable(&mut self, ray: Ray3d) -> Option<Vec3> {
        let settings = MeshRayCastSettings::default().with_filter(&self.is_content);
        let mesh_hit = self
            .meshes
            .cast_ray(ray, &settings)
            .first()
            .map(|(_, hit)| (hit.distance, hit.point));
        let ground_hit = self.ground.cast(ray).map(|distance| (distance, ray.get_point(distance)));

        mesh_hit
            .into_iter()
            .chain(ground_hit)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, point)| point)
    }
}

// ============================================================================
// Interaction Systems
// ============================================================================

// Route controller trigger presses and releases into the viewer context
pub fn select_system(
    mut selects: MessageReader<SelectEvent>,
    session: Res<EmulatedSession>,
    mut ctx: ResMut<ViewerContext>,
    mut host: SceneHostParam,
) {
    for select in selects.read() {
        match select.phase {
            SelectPhase::Start => ctx.select_start(select.controller),
            SelectPhase::End => {
                let outcome = ctx.select_end(select.controller, &*session, &mut host);
                if outcome != SelectOutcome::Nothing {
                    trace!(controller = select.controller.index(), ?outcome, "select handled");
                }
            }
        }
    }
}

// Gaze dwell, teleport marker and thumbstick locomotion for this frame
pub fn interaction_frame_system(
    time: Res<Time>,
    session: Res<EmulatedSession>,
    mut ctx: ResMut<ViewerContext>,
    mut host: SceneHostParam,
    mut meshes: MeshRayCast,
    parents: Query<&ChildOf>,
    holder: Single<Entity, With<ContentHolderMarker>>,
) {
    if !session.is_presenting() {
        return;
    }

    let holder = *holder;
    let mut surfaces = SceneWalkables {
        ground: GroundPlane::default(),
        meshes: &mut meshes,
        is_content: |mut entity: Entity| {
            while let Ok(child_of) = parents.get(entity) {
                if child_of.parent() == holder {
                    return true;
                }
                entity = child_of.parent();
            }
            false
        },
    };
    ctx.frame(&*session, &mut surfaces, &mut host, time.delta());
}
