use rapier3d::{na::UnitQuaternion, prelude::*};

/// Canonical, engine-facing definition of an immutable world collider.
///
/// Conventions
/// - Units are meters.
/// - Rotation is a unit quaternion.
/// - The pose lives on the fixed rigid-body; the collider is attached with an identity
///   (or, for planes, a normal-aligned) local transform.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable identifier, used to keep insertion order deterministic.
    pub id: u32,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space).
    ///
    /// The plane normal is derived from the pose as `rotation * +Y`. The surface sits
    /// `offset_along_normal` meters from the pose translation along that normal.
    Plane {
        /// Offset along the plane normal (meters).
        offset_along_normal: f32,
    },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vector<f32> },
}

impl WorldStaticDef {
    /// Whether every scalar in the definition is finite.
    ///
    /// Rapier does not reject NaN poses; they poison the broad phase instead.
    pub fn is_finite(&self) -> bool {
        let pose_ok = self.translation.iter().all(|v| v.is_finite())
            && self.rotation.coords.iter().all(|v| v.is_finite());
        let shape_ok = match &self.shape {
            ColliderShapeDef::Plane {
                offset_along_normal,
            } => offset_along_normal.is_finite(),
            ColliderShapeDef::Cuboid { half_extents } => {
                half_extents.iter().all(|v| v.is_finite() && *v > 0.0)
            }
        };
        pose_ok && shape_ok
    }

    /// Rigid-body pose for this definition.
    pub fn pose(&self) -> Isometry<f32> {
        Isometry::from_parts(self.translation.into(), self.rotation)
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The collider is meant to be attached to a fixed rigid-body carrying `def.pose()`, so
/// its local transform is expressed in the body frame.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // Body frame +Y is the world normal once the parent pose is applied.
            ColliderBuilder::halfspace(Vector::y_axis())
                .translation(vector![0.0, *offset_along_normal, 0.0])
                .build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuboid_def(half_extents: Vector<f32>) -> WorldStaticDef {
        WorldStaticDef {
            id: 1,
            translation: vector![1.0, 2.0, 3.0],
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
        }
    }

    #[test]
    fn cuboid_def_builds_matching_box() {
        let collider = collider_from_def(&cuboid_def(vector![4.0, 15.0, 0.5]));
        let cuboid = collider.shape().as_cuboid().expect("cuboid shape");
        assert_eq!(cuboid.half_extents, vector![4.0, 15.0, 0.5]);
    }

    #[test]
    fn plane_def_builds_half_space() {
        let def = WorldStaticDef {
            id: 0,
            translation: Vector::zeros(),
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        };
        let collider = collider_from_def(&def);
        let halfspace = collider.shape().as_halfspace().expect("half-space shape");
        assert_eq!(halfspace.normal.into_inner(), Vector::y());
    }

    #[test]
    fn non_finite_or_degenerate_defs_are_rejected() {
        assert!(cuboid_def(vector![1.0, 1.0, 1.0]).is_finite());
        assert!(!cuboid_def(vector![1.0, f32::NAN, 1.0]).is_finite());
        assert!(!cuboid_def(vector![1.0, 0.0, 1.0]).is_finite());

        let mut def = cuboid_def(vector![1.0, 1.0, 1.0]);
        def.translation.x = f32::INFINITY;
        assert!(!def.is_finite());
    }

    #[test]
    fn pose_carries_translation() {
        let def = cuboid_def(vector![1.0, 1.0, 1.0]);
        assert_eq!(def.pose().translation.vector, vector![1.0, 2.0, 3.0]);
    }
}
