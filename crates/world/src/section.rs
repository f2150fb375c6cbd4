//! Fixed-size chunk section storage.
//!
//! The host engine consumes a 16x16 column as a stack of 16-block vertical
//! sections, each a flat 4096-byte array. The index formula and the lazy
//! "absent section" representation are host interop invariants.

use spheregen_core::{BlockId, BLOCK_AIR};

/// Section edge length in voxels.
pub const SECTION_SIZE: usize = 16;
/// Voxels per section.
pub const SECTION_VOLUME: usize = SECTION_SIZE * SECTION_SIZE * SECTION_SIZE;

/// One 16x16x16 section's flat storage.
pub type SectionArray = [BlockId; SECTION_VOLUME];

/// Index of a cell within its section's flat array.
///
/// `((y & 0xF) << 8) | (z << 4) | x` is the host's packing and must be
/// reproduced exactly. `y` may be a full column coordinate; only its low
/// nibble participates.
pub fn section_index(x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < SECTION_SIZE);
    debug_assert!(z < SECTION_SIZE);
    ((y & 0xF) << 8) | (z << 4) | x
}

/// A 16x16 column of lazily allocated chunk sections.
///
/// A section stays `None` until the first non-air write lands in it, so
/// columns that are mostly empty sky cost almost nothing. Writes outside the
/// horizontal 16x16 footprint or the column height are dropped: structures
/// crossing a column boundary are clipped, by design, rather than wrapped or
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkColumn {
    height: usize,
    sections: Vec<Option<Box<SectionArray>>>,
}

impl ChunkColumn {
    /// Create an all-air column of the given height.
    ///
    /// `height` must be a positive multiple of [`SECTION_SIZE`]; the host's
    /// section stack cannot represent partial sections.
    pub fn new(height: usize) -> Self {
        assert!(
            height > 0 && height % SECTION_SIZE == 0,
            "column height {height} is not a positive multiple of {SECTION_SIZE}"
        );
        Self {
            height,
            sections: (0..height / SECTION_SIZE).map(|_| None).collect(),
        }
    }

    /// Column height in voxels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of sections in the stack (allocated or not).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of sections that have been allocated so far.
    pub fn allocated_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.is_some()).count()
    }

    fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        (0..SECTION_SIZE as i32).contains(&x)
            && (0..SECTION_SIZE as i32).contains(&z)
            && (0..self.height as i32).contains(&y)
    }

    /// Write one voxel, allocating the covering section on first use.
    ///
    /// Out-of-bounds writes are silently dropped (the clipping policy).
    /// Writing air into a still-absent section is a no-op: air is the
    /// default, and allocating for it would defeat the lazy representation.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let slot = &mut self.sections[y as usize / SECTION_SIZE];
        if slot.is_none() && id == BLOCK_AIR {
            return;
        }
        let section = slot.get_or_insert_with(|| Box::new([BLOCK_AIR; SECTION_VOLUME]));
        section[section_index(x as usize, y as usize, z as usize)] = id;
    }

    /// Read one voxel. Absent sections and out-of-bounds reads are air.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_bounds(x, y, z) {
            return BLOCK_AIR;
        }
        match &self.sections[y as usize / SECTION_SIZE] {
            Some(section) => section[section_index(x as usize, y as usize, z as usize)],
            None => BLOCK_AIR,
        }
    }

    /// Fill the half-open box `[start, end)` with `id`, clipped like
    /// [`ChunkColumn::set_block`].
    pub fn fill_range(
        &mut self,
        start: (i32, i32, i32),
        end: (i32, i32, i32),
        id: BlockId,
    ) {
        for x in start.0..end.0 {
            for y in start.1..end.1 {
                for z in start.2..end.2 {
                    self.set_block(x, y, z, id);
                }
            }
        }
    }

    /// Borrow one section's raw array, if allocated.
    pub fn section(&self, index: usize) -> Option<&SectionArray> {
        self.sections.get(index).and_then(|s| s.as_deref())
    }

    /// Hand the section stack to the host, consuming the column.
    pub fn into_sections(self) -> Vec<Option<Box<SectionArray>>> {
        self.sections
    }
}
