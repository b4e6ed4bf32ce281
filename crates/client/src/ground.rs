use avian3d::prelude::*;
use bevy::prelude::*;

pub const TRACTION_NORMAL_CUTOFF: f32 = 0.7;
pub const GROUNDED_DISTANCE: f32 = 0.3;

/// Ground detection state - separated for testability
#[derive(Component, Reflect, Clone, Debug, PartialEq, Default)]
pub struct GroundState {
    pub is_grounded: bool,
    pub ground_normal: Vec3,
    pub ground_distance: f32,
}

impl GroundState {
    /// Classify a downward hit at `distance` with surface `normal`.
    pub fn from_hit(distance: f32, normal: Vec3) -> Self {
        let has_traction = Vec3::dot(normal, Vec3::Y) > TRACTION_NORMAL_CUTOFF;
        Self {
            is_grounded: has_traction && distance <= GROUNDED_DISTANCE,
            ground_normal: normal,
            ground_distance: distance,
        }
    }
}

pub fn detect_ground(
    entity: Entity,
    collider: &Collider,
    position: Vec3,
    rotation: Quat,
    spatial_query: &SpatialQueryPipeline,
) -> GroundState {
    let filter = SpatialQueryFilter::default().with_excluded_entities([entity]);
    let detection_distance = GROUNDED_DISTANCE.max(2.0);

    spatial_query
        .cast_shape(
            collider,
            position,
            rotation,
            -Dir3::Y,
            &ShapeCastConfig::from_max_distance(detection_distance),
            &filter,
        )
        .map(|hit| GroundState::from_hit(hit.distance, hit.normal1))
        .unwrap_or_default()
}

pub fn update_ground_detection(
    spatial_query: Res<SpatialQueryPipeline>,
    mut query: Query<(Entity, &Position, &Rotation, &Collider, &mut GroundState)>,
) {
    for (entity, position, rotation, collider, mut ground_state) in query.iter_mut() {
        let detected = detect_ground(entity, collider, position.0, rotation.0, &spatial_query);
        if detected.is_grounded != ground_state.is_grounded {
            debug!("Ground contact changed for {:?}: {}", entity, detected.is_grounded);
        }
        *ground_state = detected;
    }
}
