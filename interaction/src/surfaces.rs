use bevy_math::{
    Dir3, Ray3d, Vec3,
    bounding::{Aabb3d, RayCast3d},
    primitives::InfinitePlane3d,
};

use crate::constants::{GROUND_HEIGHT, GROUND_PLANE_SIZE};

// ============================================================================
// Walkable Surfaces
// ============================================================================

/// Anything a teleport ray can land on.
pub trait WalkableSurfaces {
    /// Nearest point where `ray` meets walkable geometry.
    fn cast_walkable(&mut self, ray: Ray3d) -> Option<Vec3>;
}

/// Square horizontal plane centered on the world origin.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    pub height: f32,
    pub half_extent: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            height: GROUND_HEIGHT,
            half_extent: GROUND_PLANE_SIZE / 2.0,
        }
    }
}

impl GroundPlane {
    #[must_use]
    pub fn cast(&self, ray: Ray3d) -> Option<f32> {
        let distance = ray.intersect_plane(Vec3::Y * self.height, InfinitePlane3d { normal: Dir3::Y })?;
        let point = ray.get_point(distance);
        (point.x.abs() <= self.half_extent && point.z.abs() <= self.half_extent).then_some(distance)
    }
}

/// Ground plane plus axis-aligned boxes standing in for environment geometry.
#[derive(Debug, Clone, Default)]
pub struct WalkableSet {
    pub ground: GroundPlane,
    pub boxes: Vec<Aabb3d>,
}

impl WalkableSet {
    #[must_use]
    pub fn with_box(mut self, center: Vec3, half_size: Vec3) -> Self {
        self.boxes.push(Aabb3d::new(center, half_size));
        self
    }
}

impl WalkableSurfaces for WalkableSet {
    fn cast_walkable(&mut self, ray: Ray3d) -> Option<Vec3> {
        let max = GROUND_PLANE_SIZE * 2.0;
        let caster = RayCast3d::from_ray(ray, max);
        self.ground
            .cast(ray)
            .into_iter()
            .chain(self.boxes.iter().filter_map(|aabb| caster.aabb_intersection_at(aabb)))
            .min_by(f32::total_cmp)
            .map(|distance| ray.get_point(distance))
    }
}
