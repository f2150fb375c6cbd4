//! Procedural structure generation: weighted catalogs of sphere deposits,
//! octant-symmetric rasterization, and chunk-section packing for the host
//! world engine.

mod catalog;
mod decorate;
mod packer;
mod schematic;
mod section;
mod sphere;
mod structure;

pub use catalog::*;
pub use decorate::*;
pub use packer::*;
pub use schematic::*;
pub use section::*;
pub use sphere::*;
pub use structure::*;
