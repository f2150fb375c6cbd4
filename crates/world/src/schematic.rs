//! Opaque schematic blobs.
//!
//! The binary schematic file format is loaded elsewhere; this module only
//! models the provider boundary: three dimensions plus two parallel byte
//! arrays (block ids and host metadata), and a weighted catalog of named
//! blobs mirroring the structure catalog's selection algorithm.

use rand::Rng;
use spheregen_core::{BlockId, BLOCK_AIR};
use thiserror::Error;

/// Errors raised when wrapping provider data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchematicError {
    /// One or more dimensions are zero.
    #[error("schematic dimensions {width}x{height}x{length} must all be positive")]
    InvalidDimensions {
        /// Declared width (X).
        width: usize,
        /// Declared height (Y).
        height: usize,
        /// Declared length (Z).
        length: usize,
    },
    /// A block array does not match `width * height * length`.
    #[error("block array holds {actual} bytes, expected {expected}")]
    ArrayLength {
        /// `width * height * length`.
        expected: usize,
        /// Supplied array length.
        actual: usize,
    },
    /// Spawn chance outside `[0, 1]`.
    #[error("spawn chance {0} is outside [0, 1]")]
    InvalidChance(f64),
}

/// A rectangular voxel blob supplied by an external schematic loader.
///
/// The two byte arrays are parallel and share the provider's addressing
/// convention `height * y + length * z + width * x`; the data array carries
/// host block metadata this engine passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    width: usize,
    height: usize,
    length: usize,
    block_ids: Vec<u8>,
    block_data: Vec<u8>,
}

impl Schematic {
    /// Wrap provider data, validating dimensions and array lengths.
    pub fn new(
        width: usize,
        height: usize,
        length: usize,
        block_ids: Vec<u8>,
        block_data: Vec<u8>,
    ) -> Result<Self, SchematicError> {
        if width == 0 || height == 0 || length == 0 {
            return Err(SchematicError::InvalidDimensions {
                width,
                height,
                length,
            });
        }
        let expected = width * height * length;
        for array in [&block_ids, &block_data] {
            if array.len() != expected {
                return Err(SchematicError::ArrayLength {
                    expected,
                    actual: array.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            length,
            block_ids,
            block_data,
        })
    }

    /// Width (X) in voxels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height (Y) in voxels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Length (Z) in voxels.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The provider's array index for a local coordinate.
    ///
    /// `height * y + length * z + width * x` is the loader's convention,
    /// reproduced as-is; this engine does not reinterpret the layout.
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        self.height * y + self.length * z + self.width * x
    }

    /// Block id at a local coordinate; air when the provider index falls
    /// outside the arrays.
    pub fn id_at(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.block_ids.get(self.index(x, y, z)).copied().unwrap_or(BLOCK_AIR)
    }

    /// Metadata byte at a local coordinate; zero when the provider index
    /// falls outside the arrays.
    pub fn data_at(&self, x: usize, y: usize, z: usize) -> u8 {
        self.block_data.get(self.index(x, y, z)).copied().unwrap_or(0)
    }

    /// Raw block id array.
    pub fn block_ids(&self) -> &[u8] {
        &self.block_ids
    }

    /// Raw metadata array.
    pub fn block_data(&self) -> &[u8] {
        &self.block_data
    }
}

/// A weighted catalog of schematic blobs.
///
/// Selection uses the same independent threshold draw as
/// [`StructureCatalog::select`](crate::StructureCatalog::select).
#[derive(Debug, Clone, Default)]
pub struct SchematicCatalog {
    entries: Vec<(Schematic, f64)>,
}

impl SchematicCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schematic with its spawn chance.
    ///
    /// Duplicate registrations are allowed and simply weight the schematic
    /// more heavily in the tie-break.
    pub fn register(&mut self, schematic: Schematic, chance: f64) -> Result<(), SchematicError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(SchematicError::InvalidChance(chance));
        }
        self.entries.push((schematic, chance));
        Ok(())
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a schematic for one decoration round, or `None` when nothing
    /// qualifies.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Schematic> {
        let choice: f64 = rng.gen();

        let candidates: Vec<&Schematic> = self
            .entries
            .iter()
            .filter(|(_, chance)| choice <= *chance)
            .map(|(schematic, _)| schematic)
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.gen_range(0..candidates.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn cube(side: usize, id: u8) -> Schematic {
        let volume = side * side * side;
        Schematic::new(side, side, side, vec![id; volume], vec![0; volume]).unwrap()
    }

    #[test]
    fn construction_rejects_zero_dimensions() {
        let err = Schematic::new(0, 2, 2, vec![], vec![]).unwrap_err();
        assert!(matches!(err, SchematicError::InvalidDimensions { .. }));
    }

    #[test]
    fn construction_rejects_mismatched_arrays() {
        let err = Schematic::new(2, 2, 2, vec![1; 7], vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            SchematicError::ArrayLength {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn index_uses_provider_convention() {
        let schematic = cube(4, 1);
        // height*y + length*z + width*x with all dims 4.
        assert_eq!(schematic.index(1, 2, 3), 4 * 2 + 4 * 3 + 4 * 1);
    }

    #[test]
    fn accessors_read_parallel_arrays() {
        let mut ids = vec![0u8; 8];
        let mut data = vec![0u8; 8];
        let schematic = Schematic::new(2, 2, 2, ids.clone(), data.clone()).unwrap();
        let idx = schematic.index(1, 0, 1);
        ids[idx] = 42;
        data[idx] = 7;
        let schematic = Schematic::new(2, 2, 2, ids, data).unwrap();
        assert_eq!(schematic.id_at(1, 0, 1), 42);
        assert_eq!(schematic.data_at(1, 0, 1), 7);
    }

    #[test]
    fn register_rejects_bad_chance() {
        let mut catalog = SchematicCatalog::new();
        assert_eq!(
            catalog.register(cube(2, 1), 1.5),
            Err(SchematicError::InvalidChance(1.5))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn select_applies_threshold_draw() {
        let mut catalog = SchematicCatalog::new();
        catalog.register(cube(2, 1), 0.0).unwrap();
        // Draw just below 1.0: the zero-chance entry never qualifies. The
        // increment must be nonzero so gen_range's rejection sampling can
        // terminate on the tie-break draw.
        assert!(catalog.select(&mut StepRng::new(u64::MAX, 1)).is_none());

        catalog.register(cube(2, 9), 1.0).unwrap();
        let chosen = catalog.select(&mut StepRng::new(u64::MAX, 1)).unwrap();
        assert_eq!(chosen.id_at(0, 0, 0), 9);
    }
}
