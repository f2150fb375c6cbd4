//! Ordered catalog of weighted structures.

use crate::sphere::{FilledSphere, RawMaterialSphere};
use crate::structure::{Structure, StructureError, StructureKind};
use rand::Rng;
use spheregen_core::{
    BLOCK_DIAMOND_BLOCK, BLOCK_DIRT, BLOCK_GRASS, BLOCK_IRON_BLOCK, BLOCK_LAVA, BLOCK_LOG,
    BLOCK_STONE, BLOCK_WATER, BLOCK_WOOD,
};

/// An ordered, read-only collection of weighted structure definitions.
///
/// Built once at startup and threaded explicitly through every call site:
/// there is no hidden global catalog, and nothing mutates entries after
/// registration.
#[derive(Debug, Clone, Default)]
pub struct StructureCatalog {
    entries: Vec<Structure>,
}

impl StructureCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a weighted entry. Registration order is preserved.
    pub fn register(&mut self, structure: impl Into<Structure>) {
        self.entries.push(structure.into());
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> &[Structure] {
        &self.entries
    }

    /// The standard deployment catalog: resource spheres with center markers
    /// plus shell spheres around lava and water pockets.
    pub fn standard() -> Result<Self, StructureError> {
        let mut catalog = Self::new();

        // Regular resource spheres
        catalog.register(RawMaterialSphere::new(BLOCK_DIRT, 6, 6, 0.15, true)?);
        catalog.register(RawMaterialSphere::new(BLOCK_GRASS, 6, 6, 0.15, true)?);
        catalog.register(RawMaterialSphere::new(BLOCK_WOOD, 6, 6, 0.05, true)?);
        catalog.register(RawMaterialSphere::new(BLOCK_LOG, 6, 6, 0.05, true)?);
        catalog.register(RawMaterialSphere::with_default_radius(BLOCK_IRON_BLOCK, 0.05, true)?);
        catalog.register(RawMaterialSphere::with_default_radius(BLOCK_DIAMOND_BLOCK, 0.02, true)?);
        catalog.register(RawMaterialSphere::new(BLOCK_STONE, 6, 6, 0.10, true)?);

        // Filled spheres
        catalog.register(FilledSphere::new(BLOCK_STONE, BLOCK_LAVA, 6, 6, 0.10, true)?);
        catalog.register(FilledSphere::new(BLOCK_STONE, BLOCK_WATER, 6, 6, 0.10, true)?);
        catalog.register(FilledSphere::new(BLOCK_DIRT, BLOCK_LAVA, 6, 6, 0.10, true)?);
        catalog.register(FilledSphere::new(BLOCK_DIRT, BLOCK_WATER, 6, 6, 0.10, true)?);
        catalog.register(FilledSphere::new(BLOCK_DIAMOND_BLOCK, BLOCK_LAVA, 6, 6, 0.10, true)?);
        catalog.register(FilledSphere::new(BLOCK_DIAMOND_BLOCK, BLOCK_WATER, 6, 6, 0.10, true)?);

        Ok(catalog)
    }

    /// Pick a structure for one decoration round, or `None` when nothing
    /// qualifies. `None` is an ordinary outcome; the caller skips the round.
    ///
    /// This is a threshold test, not a cumulative-weight roulette: a single
    /// uniform draw `choice` is compared against every entry's spawn chance
    /// independently, and a second draw breaks ties uniformly among the
    /// entries that passed. An entry's effective spawn rate is therefore its
    /// own chance alone, not a share renormalized against the catalog.
    ///
    /// An empty `filter` means every kind is eligible.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        filter: &[StructureKind],
    ) -> Option<&Structure> {
        let choice: f64 = rng.gen();

        let candidates: Vec<&Structure> = self
            .entries
            .iter()
            .filter(|entry| {
                let chance = entry.spawn_chance();
                (0.0..=1.0).contains(&chance)
                    && choice <= chance
                    && (filter.is_empty() || filter.contains(&entry.kind()))
            })
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn raw(chance: f64) -> Structure {
        RawMaterialSphere::new(BLOCK_STONE, 3, 3, chance, false)
            .unwrap()
            .into()
    }

    fn filled(chance: f64) -> Structure {
        FilledSphere::new(BLOCK_STONE, BLOCK_LAVA, 3, 3, chance, false)
            .unwrap()
            .into()
    }

    // StepRng starting at u64::MAX yields a uniform draw just below 1.0.
    // The increment must be nonzero: gen_range rejection-samples, and a
    // constant u64::MAX is rejected forever for small ranges.
    fn high_rng() -> StepRng {
        StepRng::new(u64::MAX, 1)
    }

    #[test]
    fn zero_chance_entries_never_selected_on_positive_draw() {
        let mut catalog = StructureCatalog::new();
        catalog.register(raw(0.0));
        catalog.register(filled(0.0));
        assert!(catalog.select(&mut high_rng(), &[]).is_none());
    }

    #[test]
    fn certain_entry_selected_regardless_of_draw() {
        let mut catalog = StructureCatalog::new();
        catalog.register(raw(1.0));
        let chosen = catalog.select(&mut high_rng(), &[]).unwrap();
        assert_eq!(chosen.kind(), StructureKind::RawSphere);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let catalog = StructureCatalog::new();
        assert!(catalog.select(&mut high_rng(), &[]).is_none());
    }

    #[test]
    fn filter_restricts_candidates() {
        let mut catalog = StructureCatalog::new();
        catalog.register(raw(1.0));
        catalog.register(filled(1.0));

        let chosen = catalog
            .select(&mut high_rng(), &[StructureKind::FilledSphere])
            .unwrap();
        assert_eq!(chosen.kind(), StructureKind::FilledSphere);

        let chosen = catalog
            .select(&mut high_rng(), &[StructureKind::RawSphere])
            .unwrap();
        assert_eq!(chosen.kind(), StructureKind::RawSphere);
    }

    #[test]
    fn filter_with_no_matches_selects_nothing() {
        let mut catalog = StructureCatalog::new();
        catalog.register(raw(1.0));
        assert!(catalog
            .select(&mut high_rng(), &[StructureKind::FilledSphere])
            .is_none());
    }

    #[test]
    fn selection_rate_tracks_entry_chance() {
        // One entry with chance 0.5: over many rounds roughly half should hit.
        let mut catalog = StructureCatalog::new();
        catalog.register(raw(0.5));

        let mut rng = StdRng::seed_from_u64(99);
        let hits = (0..2000)
            .filter(|_| catalog.select(&mut rng, &[]).is_some())
            .count();
        assert!((800..1200).contains(&hits), "got {hits} hits out of 2000");
    }

    #[test]
    fn standard_catalog_builds() {
        let catalog = StructureCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 13);
        assert!(catalog
            .entries()
            .iter()
            .any(|s| s.kind() == StructureKind::FilledSphere));
    }
}
