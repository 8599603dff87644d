//! Geometric checks that a set of walls actually closes the arena.
//!
//! The boundary builder runs [`verify_closure`] on freshly derived walls before
//! registering anything, so a regression in the placement formulas surfaces as a build
//! error instead of a leaky world.

use thiserror::Error;

use crate::{
    Vec3,
    constants::WALL_COUNT,
    definition::ValidArena,
    wall::{BoundaryWall, WallSide},
};

/// Ways in which a wall set can fail to enclose the interior.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClosureGap {
    #[error("slot {slot} holds the {found:?} wall")]
    Misordered { slot: usize, found: WallSide },

    #[error("{side:?} wall does not span its interior edge")]
    EdgeUncovered { side: WallSide },

    #[error("{side:?} wall does not cover heights 0..={wall_height}")]
    TooShort { side: WallSide, wall_height: f32 },

    #[error("{a:?}/{b:?} corner overlaps by {overlap}, need at least {required}")]
    CornerSeam {
        a: WallSide,
        b: WallSide,
        overlap: f32,
        required: f32,
    },
}

/// Planar (X, Z) overlap lengths of two wall footprints.
///
/// Negative values are the width of the gap between them on that axis.
pub fn corner_overlap(a: &BoundaryWall, b: &BoundaryWall) -> (f32, f32) {
    let (a_min, a_max) = (a.mins(), a.maxs());
    let (b_min, b_max) = (b.mins(), b.maxs());
    (
        a_max.x.min(b_max.x) - a_min.x.max(b_min.x),
        a_max.z.min(b_max.z) - a_min.z.max(b_min.z),
    )
}

/// Whether `point` lies inside at least one wall box (faces inclusive).
pub fn is_blocked(walls: &[BoundaryWall], point: Vec3) -> bool {
    walls.iter().any(|w| {
        let (lo, hi) = (w.mins(), w.maxs());
        (lo.x..=hi.x).contains(&point.x)
            && (lo.y..=hi.y).contains(&point.y)
            && (lo.z..=hi.z).contains(&point.z)
    })
}

/// Float slack for comparisons at the arena's coordinate scale.
fn tolerance(arena: &ValidArena) -> f32 {
    let c = arena.center();
    let t = arena.wall_thickness();
    let scale = (c.x.abs() + arena.half_extent_x() + t)
        .max(c.z.abs() + arena.half_extent_z() + t)
        .max(arena.wall_height())
        .max(1.0);
    scale * f32::EPSILON * 4.0
}

/// Check that `walls` enclose the interior of `arena`:
///
/// - walls sit in [`WallSide::ALL`] order;
/// - every wall spans its whole interior edge, corners included;
/// - every wall covers the vertical range `[0, wall_height]`;
/// - adjacent walls overlap at their shared corner by at least `wall_thickness / 2` on
///   both planar axes. When the interior is narrower than that, the overlap must cover
///   the whole interior width instead.
pub fn verify_closure(
    arena: &ValidArena,
    walls: &[BoundaryWall; WALL_COUNT],
) -> Result<(), ClosureGap> {
    let eps = tolerance(arena);
    let c = arena.center();
    let (hx, hz) = (arena.half_extent_x(), arena.half_extent_z());
    let h = arena.wall_height();
    let t = arena.wall_thickness();

    for (slot, (wall, expected)) in walls.iter().zip(WallSide::ALL).enumerate() {
        if wall.side != expected {
            return Err(ClosureGap::Misordered {
                slot,
                found: wall.side,
            });
        }
    }

    for wall in walls {
        let (lo, hi) = (wall.mins(), wall.maxs());

        if lo.y > eps || hi.y < h - eps {
            return Err(ClosureGap::TooShort {
                side: wall.side,
                wall_height: h,
            });
        }

        // Tangent span must cover the edge; the edge line must sit inside the normal span.
        let covered = match wall.side {
            WallSide::North | WallSide::South => {
                let edge_z = if wall.side == WallSide::North {
                    c.z - hz
                } else {
                    c.z + hz
                };
                lo.x <= c.x - hx + eps
                    && hi.x >= c.x + hx - eps
                    && lo.z <= edge_z + eps
                    && hi.z >= edge_z - eps
            }
            WallSide::East | WallSide::West => {
                let edge_x = if wall.side == WallSide::West {
                    c.x - hx
                } else {
                    c.x + hx
                };
                lo.z <= c.z - hz + eps
                    && hi.z >= c.z + hz - eps
                    && lo.x <= edge_x + eps
                    && hi.x >= edge_x - eps
            }
        };
        if !covered {
            return Err(ClosureGap::EdgeUncovered { side: wall.side });
        }
    }

    let half_t = t * 0.5;
    let required = (half_t.min(2.0 * hx), half_t.min(2.0 * hz));
    for wall in walls {
        let neighbor = &walls[wall.side.next().ordinal() as usize];
        let (ox, oz) = corner_overlap(wall, neighbor);
        for (overlap, need) in [(ox, required.0), (oz, required.1)] {
            // Slack never exceeds half the requirement, so a touching seam always fails.
            let slack = eps.min(need * 0.5);
            if overlap <= 0.0 || overlap + slack < need {
                return Err(ClosureGap::CornerSeam {
                    a: wall.side,
                    b: neighbor.side,
                    overlap,
                    required: need,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definition::{Arena, validate},
        wall::derive_walls,
    };
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn arena(hx: f32, hz: f32, h: f32, t: f32) -> ValidArena {
        validate(Arena {
            center: Vec3::zeros(),
            half_extent_x: hx,
            half_extent_z: hz,
            wall_height: h,
            wall_thickness: t,
        })
        .unwrap()
    }

    #[test]
    fn reference_arena_is_closed() {
        let a = arena(400.0, 400.0, 15.0, 0.5);
        assert_eq!(verify_closure(&a, &derive_walls(&a)), Ok(()));
    }

    #[test]
    fn reference_corner_overlap_is_a_full_thickness_square() {
        let a = arena(400.0, 400.0, 15.0, 0.5);
        let walls = derive_walls(&a);
        let (ox, oz) = corner_overlap(&walls[0], &walls[1]);
        assert_relative_eq!(ox, 0.5);
        assert_relative_eq!(oz, 0.5);
    }

    #[test]
    fn trimmed_wall_leaves_its_edge_uncovered() {
        let a = arena(10.0, 10.0, 3.0, 0.5);
        let mut walls = derive_walls(&a);
        // North wall trimmed so it stops short of the east wall's box.
        walls[0].half_extents.x = 10.0 - 0.5;

        let err = verify_closure(&a, &walls).unwrap_err();
        assert!(
            matches!(
                err,
                ClosureGap::EdgeUncovered {
                    side: WallSide::North
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn zero_corner_overlap_is_flagged() {
        let a = arena(10.0, 10.0, 3.0, 0.5);
        let mut walls = derive_walls(&a);
        // East wall pushed out so it only touches the north wall's end face.
        walls[1].position.x += 0.5;

        match verify_closure(&a, &walls).unwrap_err() {
            ClosureGap::CornerSeam { a, b, overlap, required } => {
                assert_eq!((a, b), (WallSide::North, WallSide::East));
                assert!(overlap <= 0.0, "overlap {overlap}");
                assert_relative_eq!(required, 0.25);
            }
            other => panic!("expected a corner seam, got {other:?}"),
        }
    }

    #[test]
    fn thin_walls_on_a_large_arena_still_flag_a_touching_corner() {
        // Half the thickness is below the float slack at this coordinate scale.
        let t = 1e-4;
        let a = arena(400.0, 400.0, 15.0, t);
        let walls = derive_walls(&a);
        assert_eq!(verify_closure(&a, &walls), Ok(()));

        let mut pushed = walls;
        pushed[1].position.x += t;
        match verify_closure(&a, &pushed).unwrap_err() {
            ClosureGap::CornerSeam { a, b, overlap, .. } => {
                assert_eq!((a, b), (WallSide::North, WallSide::East));
                assert!(overlap <= 0.0, "overlap {overlap}");
            }
            other => panic!("expected a corner seam, got {other:?}"),
        }
    }

    #[test]
    fn thin_overlap_is_a_corner_seam() {
        let a = arena(10.0, 10.0, 3.0, 0.5);
        let mut walls = derive_walls(&a);
        // Still covers the edge line, but the box is now only 0.1 thick toward the corner.
        walls[1].position.x += 0.4;
        walls[1].half_extents.x = 0.45;

        let err = verify_closure(&a, &walls).unwrap_err();
        match err {
            ClosureGap::CornerSeam { overlap, required, .. } => {
                assert!(overlap < required);
                assert_relative_eq!(required, 0.25);
            }
            other => panic!("expected a corner seam, got {other:?}"),
        }
    }

    #[test]
    fn low_wall_is_too_short() {
        let a = arena(10.0, 10.0, 3.0, 0.5);
        let mut walls = derive_walls(&a);
        walls[2].position.y = 3.0;
        walls[2].half_extents.y = 1.0;

        assert_eq!(
            verify_closure(&a, &walls),
            Err(ClosureGap::TooShort {
                side: WallSide::South,
                wall_height: 3.0
            })
        );
    }

    #[test]
    fn swapped_walls_are_misordered() {
        let a = arena(10.0, 10.0, 3.0, 0.5);
        let mut walls = derive_walls(&a);
        walls.swap(0, 2);
        assert_eq!(
            verify_closure(&a, &walls),
            Err(ClosureGap::Misordered {
                slot: 0,
                found: WallSide::South
            })
        );
    }

    #[test]
    fn narrow_interior_with_thick_walls_still_closes() {
        let a = arena(0.05, 20.0, 2.0, 1.0);
        assert_eq!(verify_closure(&a, &derive_walls(&a)), Ok(()));
    }

    proptest! {
        #[test]
        fn derived_walls_always_close(
            cx in -1_000.0f32..1_000.0,
            cz in -1_000.0f32..1_000.0,
            hx in 0.01f32..5_000.0,
            hz in 0.01f32..5_000.0,
            h in 0.01f32..500.0,
            t in 0.001f32..20.0,
        ) {
            let a = validate(Arena {
                center: Vec3::new(cx, 0.0, cz),
                half_extent_x: hx,
                half_extent_z: hz,
                wall_height: h,
                wall_thickness: t,
            }).unwrap();
            let walls = derive_walls(&a);
            prop_assert_eq!(verify_closure(&a, &walls), Ok(()));
        }

        #[test]
        fn interior_boundary_is_blocked_at_mid_height(
            hx in 0.5f32..1_000.0,
            hz in 0.5f32..1_000.0,
            h in 0.1f32..100.0,
            t in 0.01f32..5.0,
            s in 0.0f32..=1.0,
        ) {
            let a = arena(hx, hz, h, t);
            let walls = derive_walls(&a);
            let y = h * 0.5;
            let x = -hx + 2.0 * hx * s;
            let z = -hz + 2.0 * hz * s;

            // Points on all four interior edges, corners included at s = 0 and 1.
            for p in [
                Vec3::new(x, y, -hz),
                Vec3::new(x, y, hz),
                Vec3::new(-hx, y, z),
                Vec3::new(hx, y, z),
            ] {
                prop_assert!(is_blocked(&walls, p), "gap at {:?}", p);
            }
        }

        #[test]
        fn corner_overlap_is_at_least_half_thickness(
            hx in 0.5f32..1_000.0,
            hz in 0.5f32..1_000.0,
            t in 0.01f32..1.0,
        ) {
            let a = arena(hx, hz, 1.0, t);
            let walls = derive_walls(&a);
            for side in WallSide::ALL {
                let (ox, oz) = corner_overlap(
                    &walls[side.ordinal() as usize],
                    &walls[side.next().ordinal() as usize],
                );
                prop_assert!(ox >= t * 0.5 && oz >= t * 0.5, "{:?}: ({}, {})", side, ox, oz);
            }
        }
    }
}
