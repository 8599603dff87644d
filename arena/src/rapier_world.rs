//! Rapier-backed physics world the arena boundary is registered with.
//!
//! This module owns the full Rapier 3D pipeline and exposes just enough of it for the
//! containment use case:
//! - fixed-body registration through [`PhysicsWorldHandle`] (walls, ground);
//! - dynamic probe bodies;
//! - fixed-timestep stepping, refused until the boundary is in place.
//!
//! Design notes
//! - Single-threaded. All mutation goes through `&mut self`, so no locking is needed.
//! - Static geometry is inserted as a fixed rigid-body with the collider attached,
//!   matching typical Rapier usage.
//! - A static-body capacity can be configured to model engine resource limits.

// Re-export Rapier so downstream crates can name handles and builders
// without depending on `rapier3d` directly.
pub use rapier3d;

use rapier3d::prelude::*;

use crate::{
    RegistrationError, Vec3, WorldError, WorldStaticDef,
    boundary::{BoundsState, PhysicsWorldHandle},
    collider_from_def,
    constants::{FIXED_TIMESTEP_SECS, GRAVITY_MPS2},
};

/// Simulation parameters for a [`RapierWorld`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSettings {
    /// Gravity acceleration (m/s²).
    pub gravity: Vec3,
    /// Fixed step length (seconds).
    pub timestep: f32,
    /// Continuous collision detection on dynamic probes.
    pub ccd: bool,
    /// Restitution of dynamic probes. 1.0 bounces without losing speed.
    pub restitution: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY_MPS2, 0.0),
            timestep: FIXED_TIMESTEP_SECS,
            ccd: true,
            restitution: 0.5,
        }
    }
}

/// In-memory Rapier simulation.
pub struct RapierWorld {
    settings: WorldSettings,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    /// Maximum number of fixed bodies, if limited.
    static_capacity: Option<usize>,
    static_count: usize,
    state: BoundsState,
}

impl RapierWorld {
    pub fn new(settings: WorldSettings) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: settings.timestep,
            ..IntegrationParameters::default()
        };

        Self {
            settings,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            static_capacity: None,
            static_count: 0,
            state: BoundsState::Unbounded,
        }
    }

    /// Limit the number of fixed bodies this world accepts.
    pub fn with_static_capacity(mut self, capacity: usize) -> Self {
        self.static_capacity = Some(capacity);
        self
    }

    #[inline]
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    #[inline]
    pub fn bounds_state(&self) -> BoundsState {
        self.state
    }

    /// Number of fixed bodies currently registered.
    #[inline]
    pub fn static_body_count(&self) -> usize {
        self.static_count
    }

    /// Number of colliders of any kind.
    #[inline]
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// World-space `(center, half_extents)` of every box attached to a fixed body.
    pub fn fixed_boxes(&self) -> Vec<(Vec3, Vec3)> {
        self.colliders
            .iter()
            .filter_map(|(_, collider)| {
                let body = self.bodies.get(collider.parent()?)?;
                if !body.is_fixed() {
                    return None;
                }
                let cuboid = collider.shape().as_cuboid()?;
                Some((*body.translation(), cuboid.half_extents))
            })
            .collect()
    }

    /// Insert a dynamic ball, e.g. to probe the boundary.
    pub fn spawn_dynamic_ball(
        &mut self,
        position: Vec3,
        radius: f32,
        linvel: Vec3,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(position)
            .linvel(linvel)
            .ccd_enabled(self.settings.ccd)
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::ball(radius)
            .restitution(self.settings.restitution)
            .friction(0.0)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Current center of a body.
    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|body| *body.translation())
    }

    /// Current linear velocity of a body.
    pub fn body_linvel(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|body| *body.linvel())
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Refused while the world is `Unbounded`: bodies could leave before the walls exist.
    pub fn step(&mut self) -> Result<(), WorldError> {
        if self.state == BoundsState::Unbounded {
            log::warn!("Refusing to step a world without its boundary");
            return Err(WorldError::Unbounded);
        }

        // Using default hooks/events (none).
        let hooks = ();
        let events = ();

        self.physics_pipeline.step(
            &self.settings.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &hooks,
            &events,
        );

        Ok(())
    }

    /// Step `count` times, stopping at the first error.
    pub fn step_n(&mut self, count: usize) -> Result<(), WorldError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }
}

impl Default for RapierWorld {
    fn default() -> Self {
        Self::new(WorldSettings::default())
    }
}

impl PhysicsWorldHandle for RapierWorld {
    type Handle = RigidBodyHandle;

    fn register_fixed(
        &mut self,
        def: &WorldStaticDef,
    ) -> Result<RigidBodyHandle, RegistrationError> {
        if !def.is_finite() {
            return Err(RegistrationError::InvalidDefinition { id: def.id });
        }
        if let Some(capacity) = self.static_capacity
            && self.static_count >= capacity
        {
            return Err(RegistrationError::CapacityExhausted { capacity });
        }

        let body = RigidBodyBuilder::fixed().pose(def.pose()).build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider_from_def(def), handle, &mut self.bodies);
        self.static_count += 1;

        Ok(handle)
    }

    fn unregister(&mut self, handle: RigidBodyHandle) {
        let removed = self.bodies.remove(
            handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true, // remove attached colliders
        );
        if removed.is_some() {
            self.static_count -= 1;
        }
    }

    fn mark_bounded(&mut self) {
        self.state = BoundsState::Bounded;
    }
}
