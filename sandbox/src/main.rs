//! Headless containment sandbox.
//!
//! Builds a Rapier world around an arena, fires probe balls at every wall and corner,
//! and fails if any of them ends up outside the interior.
//!
//! Usage: `sandbox [arena.json]`. Without a path the default arena is used.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::{collections::BTreeSet, env, fs, path::Path};

use anyhow::{Context, Result, bail};
use arena::{
    Arena, ColliderShapeDef, PhysicsWorldHandle, RapierWorld, ValidArena, Vec3, WallSide,
    WorldSettings, WorldStaticDef, build, rapier_world::rapier3d::prelude::RigidBodyHandle,
};
use log::{info, warn};
use nalgebra::UnitQuaternion;

/// Radius of each probe ball (meters).
const PROBE_RADIUS: f32 = 0.5;

/// Launch speed of each probe (m/s).
const PROBE_SPEED_MPS: f32 = 60.0;

/// Simulated duration (seconds).
const SIMULATED_SECONDS: f32 = 10.0;

/// Collider id of the ground plane, clear of the wall ordinals.
const GROUND_ID: u32 = 1_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arena = match env::args().nth(1) {
        Some(path) => load_arena(Path::new(&path))?,
        None => Arena::default(),
    };
    let arena = arena.validate().context("invalid arena configuration")?;

    let mut world = RapierWorld::new(WorldSettings::default());
    world
        .register_fixed(&ground(&arena))
        .context("failed to register the ground plane")?;
    build(&arena, &mut world).context("failed to enclose the world")?;

    let probes = spawn_probes(&mut world, &arena);
    info!("Spawned {} probes at {} m/s", probes.len(), PROBE_SPEED_MPS);

    let frames = (SIMULATED_SECONDS / world.settings().timestep).ceil() as usize;
    let mut escaped = BTreeSet::new();
    for frame in 0..frames {
        world.step()?;

        for (i, (label, handle)) in probes.iter().enumerate() {
            let Some(p) = world.body_position(*handle) else {
                continue;
            };
            if !arena.contains(p) && escaped.insert(i) {
                warn!("Probe {label} left the arena at frame {frame}: {p:?}");
            }
        }
    }

    if !escaped.is_empty() {
        bail!(
            "{} of {} probes left the arena within {SIMULATED_SECONDS} s",
            escaped.len(),
            probes.len()
        );
    }

    info!("All {} probes contained after {frames} frames", probes.len());
    Ok(())
}

fn load_arena(path: &Path) -> Result<Arena> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let arena = Arena::from_json_str(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!("Loaded arena from {}", path.display());
    Ok(arena)
}

/// Ground plane under the arena, at `y = 0` where the walls stand.
fn ground(arena: &ValidArena) -> WorldStaticDef {
    let c = arena.center();
    WorldStaticDef {
        id: GROUND_ID,
        translation: Vec3::new(c.x, 0.0, c.z),
        rotation: UnitQuaternion::identity(),
        shape: ColliderShapeDef::Plane {
            offset_along_normal: 0.0,
        },
    }
}

/// One probe toward each wall and one toward each corner, fanned out around the center.
fn spawn_probes(world: &mut RapierWorld, arena: &ValidArena) -> Vec<(String, RigidBodyHandle)> {
    let c = arena.center();
    let origin = Vec3::new(c.x, PROBE_RADIUS * 2.0, c.z);
    let spread = (0.5 * arena.half_extent_x().min(arena.half_extent_z())).min(2.0);

    let mut probes = Vec::with_capacity(2 * WallSide::ALL.len());
    let mut launch = |label: String, dir: Vec3| {
        let start = origin + dir * spread;
        let handle = world.spawn_dynamic_ball(start, PROBE_RADIUS, dir * PROBE_SPEED_MPS);
        probes.push((label, handle));
    };

    for side in WallSide::ALL {
        launch(format!("{side:?}"), side.outward_normal());

        let corner = side.next();
        let diagonal = (side.outward_normal() + corner.outward_normal()).normalize();
        launch(format!("{side:?}-{corner:?}"), diagonal);
    }
    probes
}
