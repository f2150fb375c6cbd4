//! The polymorphic structure contract.
//!
//! Catalogs store the [`Structure`] abstraction, never concrete sphere types;
//! kind filtering is a match on the variant tag.

use crate::sphere::{FilledSphere, RawMaterialSphere, SphereTemplate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use spheregen_core::{BlockId, Point3D};
use thiserror::Error;

/// Errors raised by structure constructors.
///
/// Constructors are the sole validation gate: once a structure exists, every
/// generation call on it is infallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructureError {
    /// Spawn chance outside `[0, 1]`.
    #[error("spawn chance {0} is outside [0, 1]")]
    InvalidChance(f64),
    /// Radius below 1.
    #[error("radius {0} must be >= 1")]
    InvalidRadius(i32),
    /// Maximum radius below the minimum.
    #[error("radius range {min}..{max} is inverted")]
    InvertedRadiusRange {
        /// Declared minimum radius.
        min: i32,
        /// Declared maximum radius.
        max: i32,
    },
    /// Air was supplied where a solid material is required.
    #[error("a structure material must not be air")]
    AirMaterial,
}

/// Variant tag used for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Solid sphere of a single raw material.
    RawSphere,
    /// Sphere with a shell around a different filling material.
    FilledSphere,
}

/// A procedurally placeable voxel formation with an associated spawn chance.
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    /// See [`RawMaterialSphere`].
    Raw(RawMaterialSphere),
    /// See [`FilledSphere`].
    Filled(FilledSphere),
}

impl Structure {
    /// The variant tag for filtering.
    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::Raw(_) => StructureKind::RawSphere,
            Structure::Filled(_) => StructureKind::FilledSphere,
        }
    }

    /// Spawn chance in `[0, 1]`, clamped at construction time.
    pub fn spawn_chance(&self) -> f64 {
        match self {
            Structure::Raw(sphere) => sphere.spawn_chance(),
            Structure::Filled(sphere) => sphere.spawn_chance(),
        }
    }

    /// Rasterize into a fresh caller-owned [`SphereTemplate`].
    pub fn generate_template<R: Rng + ?Sized>(&self, rng: &mut R) -> SphereTemplate {
        match self {
            Structure::Raw(sphere) => sphere.generate_template(rng),
            Structure::Filled(sphere) => sphere.generate_template(rng),
        }
    }

    /// Emit voxel assignments directly in world coordinates around `center`.
    ///
    /// Returns the bounding cube size (`2 * radius` on every axis).
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        center: Point3D,
        visit: impl FnMut(Point3D, BlockId),
    ) -> Point3D {
        match self {
            Structure::Raw(sphere) => sphere.generate_at(rng, center, visit),
            Structure::Filled(sphere) => sphere.generate_at(rng, center, visit),
        }
    }
}

impl From<RawMaterialSphere> for Structure {
    fn from(sphere: RawMaterialSphere) -> Self {
        Structure::Raw(sphere)
    }
}

impl From<FilledSphere> for Structure {
    fn from(sphere: FilledSphere) -> Self {
        Structure::Filled(sphere)
    }
}
