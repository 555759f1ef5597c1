use anyhow::anyhow;
use bevy::{
    asset::LoadState,
    ecs::system::SystemParam,
    gltf::GltfAssetLabel,
    prelude::*,
    scene::SceneRoot,
};
use interaction::{ContentRequest, SceneHost, ViewerContext};

use crate::{
    markers::ContentHolderMarker,
    resources::{ContentAnimation, ContentClip, PendingLoad, PendingLoads},
};

// ============================================================================
// Scene Host
// ============================================================================

/// The content side of the ECS world, handed to `ViewerContext` whenever it
/// needs to clear or request content.
#[derive(SystemParam)]
pub struct SceneHostParam<'w, 's> {
    commands: Commands<'w, 's>,
    asset_server: Res<'w, AssetServer>,
    pending: ResMut<'w, PendingLoads>,
    animation: ResMut<'w, ContentAnimation>,
    holder: Query<'w, 's, Entity, With<ContentHolderMarker>>,
}

impl SceneHost for SceneHostParam<'_, '_> {
    fn clear_content(&mut self) {
        for holder in &self.holder {
            self.commands.entity(holder).despawn_related::<Children>();
        }
        self.animation.0 = None;
    }

    fn request_content(&mut self, request: ContentRequest) {
        let scene = self
            .asset_server
            .load(GltfAssetLabel::Scene(0).from_asset(request.model.path.clone()));
        let clip = request
            .animation
            .map(|path| self.asset_server.load(GltfAssetLabel::Animation(0).from_asset(path)));

        self.pending.0.push(PendingLoad {
            generation: request.generation,
            mode: request.mode,
            path: request.model.path.clone(),
            scene,
            clip,
            transform: request.model.transform(),
        });
    }
}

// ============================================================================
// Load Completion
// ============================================================================

enum LoadProgress {
    Waiting,
    Loaded,
    Failed(anyhow::Error),
}

// Model and clip count as one load: it is done only when both are
fn load_progress(asset_server: &AssetServer, load: &PendingLoad) -> LoadProgress {
    let ids = std::iter::once(load.scene.id().untyped()).chain(load.clip.iter().map(|clip| clip.id().untyped()));

    let mut waiting = false;
    for id in ids {
        match asset_server.load_state(id) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => return LoadProgress::Failed(anyhow!("{err}")),
            LoadState::NotLoaded | LoadState::Loading => waiting = true,
        }
    }

    if waiting { LoadProgress::Waiting } else { LoadProgress::Loaded }
}

// Attach finished loads that still belong to the current mode
pub fn content_load_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    ctx: Res<ViewerContext>,
    mut pending: ResMut<PendingLoads>,
    mut animation: ResMut<ContentAnimation>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    holder: Single<Entity, With<ContentHolderMarker>>,
) {
    if pending.0.is_empty() {
        return;
    }

    for load in std::mem::take(&mut pending.0) {
        match load_progress(&asset_server, &load) {
            LoadProgress::Waiting => pending.0.push(load),
            LoadProgress::Failed(err) => ctx.report_load_failure(load.generation, &load.path, &err),
            LoadProgress::Loaded => {
                if !ctx.accept_loaded(load.generation) {
                    continue;
                }
                if let Some(clip) = load.clip {
                    let (graph, node) = AnimationGraph::from_clip(clip);
                    animation.0 = Some(ContentClip {
                        graph: graphs.add(graph),
                        node,
                    });
                }
                commands.spawn((SceneRoot(load.scene), load.transform, ChildOf(*holder)));
                debug!(mode = ?load.mode, path = %load.path, "content attached");
            }
        }
    }
}

// Start the looping clip on animation players as the scene spawns them
pub fn content_animation_system(
    mut commands: Commands,
    animation: Res<ContentAnimation>,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    let Some(clip) = &animation.0 else {
        return;
    };

    for (entity, mut player) in &mut players {
        commands.entity(entity).insert(AnimationGraphHandle(clip.graph.clone()));
        player.play(clip.node).repeat();
    }
}
