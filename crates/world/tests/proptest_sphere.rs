//! Property-based tests for sphere rasterization
//!
//! Validates the geometric invariants over random radii and seeds:
//! - Every emitted voxel lies strictly inside the radius, and every voxel
//!   strictly inside is emitted (exhaustive over the bounding cube)
//! - Octant symmetry: all 8 sign-combinations of a qualifying offset are
//!   present with equal material
//! - FilledSphere partitions its voxels into fill (inside radius - 1) and
//!   shell (the outermost unit layer), with the marker overriding the center

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spheregen_core::{Point3D, BLOCK_AIR};
use spheregen_world::{FilledSphere, RawMaterialSphere, CENTER_MARKER};
use std::collections::HashMap;

const MATERIAL: u8 = 1;
const FILL: u8 = 11;

fn emit(structure_radius: i32, seed: u64) -> HashMap<Point3D, u8> {
    let sphere =
        RawMaterialSphere::new(MATERIAL, structure_radius, structure_radius, 1.0, false).unwrap();
    let mut cells = HashMap::new();
    sphere.generate_at(&mut StdRng::seed_from_u64(seed), Point3D::ORIGIN, |p, id| {
        cells.insert(p, id);
    });
    cells
}

proptest! {
    /// Property: the emitted voxel set is exactly the strict interior of the
    /// sphere, checked exhaustively over the bounding cube.
    #[test]
    fn emission_matches_strict_distance_test(radius in 1i32..9, seed in any::<u64>()) {
        let cells = emit(radius, seed);
        let limit = (radius as i64) * (radius as i64);

        for x in -radius..=radius {
            for y in -radius..=radius {
                for z in -radius..=radius {
                    let p = Point3D::new(x, y, z);
                    let inside = p.distance_squared(Point3D::ORIGIN) < limit;
                    prop_assert_eq!(
                        cells.contains_key(&p),
                        inside,
                        "voxel {} disagrees with the distance test for radius {}",
                        p,
                        radius
                    );
                }
            }
        }
    }

    /// Property: every qualifying offset appears with all 8 sign-combinations
    /// carrying the same material.
    #[test]
    fn octant_symmetry(radius in 1i32..9, seed in any::<u64>()) {
        let cells = emit(radius, seed);
        for (&p, &id) in &cells {
            for sx in [1, -1] {
                for sy in [1, -1] {
                    for sz in [1, -1] {
                        let mirror = Point3D::new(sx * p.x, sy * p.y, sz * p.z);
                        prop_assert_eq!(cells.get(&mirror), Some(&id), "missing mirror of {}", p);
                    }
                }
            }
        }
    }

    /// Property: the fill material is exactly the strict interior of
    /// radius - 1; everything else emitted is shell; the marker wins at the
    /// exact center.
    #[test]
    fn filled_sphere_partition(radius in 2i32..9, seed in any::<u64>(), marker in any::<bool>()) {
        let sphere = FilledSphere::new(MATERIAL, FILL, radius, radius, 1.0, marker).unwrap();
        let mut cells = HashMap::new();
        sphere.generate_at(&mut StdRng::seed_from_u64(seed), Point3D::ORIGIN, |p, id| {
            cells.insert(p, id);
        });

        let inner = ((radius - 1) as i64) * ((radius - 1) as i64);
        for (&p, &id) in &cells {
            let expected = if marker && p == Point3D::ORIGIN {
                CENTER_MARKER
            } else if p.distance_squared(Point3D::ORIGIN) < inner {
                FILL
            } else {
                MATERIAL
            };
            prop_assert_eq!(id, expected, "wrong material at {}", p);
        }
    }

    /// Property: the template agrees with direct emission cell for cell once
    /// re-centered, for any fixed radius.
    #[test]
    fn template_matches_direct_emission(radius in 1i32..8, seed in any::<u64>()) {
        let sphere = RawMaterialSphere::new(MATERIAL, radius, radius, 1.0, false).unwrap();
        let template = sphere.generate_template(&mut StdRng::seed_from_u64(seed));
        let cells = emit(radius, seed);

        prop_assert_eq!(template.radius(), radius);
        for y in 0..template.size() {
            for z in 0..template.size() {
                for x in 0..template.size() {
                    let offset = Point3D::new(
                        x as i32 - radius,
                        y as i32 - radius,
                        z as i32 - radius,
                    );
                    let from_template = template.get(x, y, z);
                    let from_emission = cells.get(&offset).copied().unwrap_or(BLOCK_AIR);
                    prop_assert_eq!(from_template, from_emission);
                }
            }
        }
    }

    /// Property: a half-open radius range never draws its maximum.
    #[test]
    fn radius_draw_excludes_maximum(min in 1i32..6, span in 1i32..4, seed in any::<u64>()) {
        let sphere = RawMaterialSphere::new(MATERIAL, min, min + span, 1.0, false).unwrap();
        let template = sphere.generate_template(&mut StdRng::seed_from_u64(seed));
        prop_assert!(template.radius() >= min);
        prop_assert!(template.radius() < min + span);
    }
}
