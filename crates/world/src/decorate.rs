//! Column decoration pipeline.
//!
//! Ties the pieces together the way the host generator consumes them: fill a
//! fresh [`ChunkColumn`] with scattered block packs, ask the catalog for a
//! sphere structure, and pack the winning template into the column. Every
//! call owns its RNG; nothing here holds state between columns.

use crate::catalog::StructureCatalog;
use crate::packer::place_template;
use crate::section::{ChunkColumn, SECTION_SIZE};
use crate::structure::StructureKind;
use rand::Rng;
use spheregen_core::{
    BlockId, Point3D, BLOCK_BEDROCK, BLOCK_BOOKSHELF, BLOCK_COAL_BLOCK, BLOCK_COAL_ORE,
    BLOCK_DIAMOND_BLOCK, BLOCK_DIRT, BLOCK_GLASS, BLOCK_GOLD_BLOCK, BLOCK_ICE, BLOCK_IRON_BLOCK,
    BLOCK_IRON_ORE, BLOCK_LAPIS_BLOCK, BLOCK_LAPIS_ORE, BLOCK_LOG, BLOCK_NETHERRACK,
    BLOCK_OBSIDIAN, BLOCK_REDSTONE_BLOCK, BLOCK_REDSTONE_ORE, BLOCK_SPONGE, BLOCK_STONE,
    BLOCK_WOOD, BLOCK_WOOL,
};

/// Spheres keep this much clearance from the column floor and ceiling.
const SPHERE_MARGIN_Y: i32 = 32;

/// Settings for one decorator instance.
#[derive(Debug, Clone)]
pub struct DecorationConfig {
    /// Column height in voxels; must be a positive multiple of 16.
    pub world_height: usize,
    /// Height of the spawn platform's floor band.
    pub spawn_y: i32,
    /// Palette the scattered block packs draw from.
    pub scatter_palette: Vec<BlockId>,
    /// Build the spawn platform in chunk (0, 0).
    pub spawn_platform: bool,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            world_height: 256,
            spawn_y: 128,
            scatter_palette: vec![
                BLOCK_DIRT,
                BLOCK_STONE,
                BLOCK_WOOD,
                BLOCK_SPONGE,
                BLOCK_GLASS,
                BLOCK_LOG,
                BLOCK_WOOL,
                BLOCK_ICE,
                BLOCK_IRON_BLOCK,
                BLOCK_GOLD_BLOCK,
                BLOCK_COAL_ORE,
                BLOCK_IRON_ORE,
                BLOCK_LAPIS_ORE,
                BLOCK_REDSTONE_ORE,
                BLOCK_NETHERRACK,
                BLOCK_OBSIDIAN,
                BLOCK_DIAMOND_BLOCK,
                BLOCK_COAL_BLOCK,
                BLOCK_LAPIS_BLOCK,
                BLOCK_REDSTONE_BLOCK,
                BLOCK_BOOKSHELF,
            ],
            spawn_platform: true,
        }
    }
}

/// Decorates one 16x16 column per call.
#[derive(Debug, Clone)]
pub struct ColumnDecorator {
    config: DecorationConfig,
    catalog: StructureCatalog,
}

impl ColumnDecorator {
    /// Create a decorator over an explicit catalog.
    pub fn new(config: DecorationConfig, catalog: StructureCatalog) -> Self {
        Self { config, catalog }
    }

    /// The catalog this decorator selects from.
    pub fn catalog(&self) -> &StructureCatalog {
        &self.catalog
    }

    /// Generate the section storage for the column at `(chunk_x, chunk_z)`.
    ///
    /// The caller supplies the RNG, one per request; see
    /// [`spheregen_core::column_rng`] for a deterministic seeding helper.
    pub fn decorate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        chunk_x: i32,
        chunk_z: i32,
    ) -> ChunkColumn {
        let mut column = ChunkColumn::new(self.config.world_height);

        if self.config.spawn_platform && chunk_x == 0 && chunk_z == 0 {
            self.build_spawn_platform(&mut column);
            return column;
        }

        self.scatter_packs(rng, &mut column);
        self.place_sphere(rng, chunk_x, chunk_z, &mut column);
        column
    }

    /// Scatter 2x2x2 packs of random palette blocks through the column.
    fn scatter_packs<R: Rng + ?Sized>(&self, rng: &mut R, column: &mut ChunkColumn) {
        let palette = &self.config.scatter_palette;
        if palette.is_empty() {
            return;
        }

        let height = self.config.world_height as i32;
        let min_packs = self.config.world_height / 24;
        let packs = rng.gen_range(0..min_packs.max(1) * 3) + min_packs;

        for _ in 0..packs {
            let base_x = rng.gen_range(0..SECTION_SIZE as i32 - 1);
            let base_y = rng.gen_range(1..height - 3);
            let base_z = rng.gen_range(0..SECTION_SIZE as i32 - 1);

            for dy in 0..2 {
                for dz in 0..2 {
                    for dx in 0..2 {
                        let id = palette[rng.gen_range(0..palette.len())];
                        column.set_block(base_x + dx, base_y + dy, base_z + dz, id);
                    }
                }
            }
        }
    }

    /// One catalog draw per column; a `None` selection skips the round.
    fn place_sphere<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        chunk_x: i32,
        chunk_z: i32,
        column: &mut ChunkColumn,
    ) {
        let height = self.config.world_height as i32;
        // Columns too short to hold the sphere band carry no spheres.
        if height <= 2 * SPHERE_MARGIN_Y {
            return;
        }

        let Some(structure) = self.catalog.select(rng, &[StructureKind::RawSphere]) else {
            tracing::debug!(chunk_x, chunk_z, "no structure qualified this round");
            return;
        };

        let center_y = rng.gen_range(SPHERE_MARGIN_Y..height - SPHERE_MARGIN_Y);
        let template = structure.generate_template(rng);
        tracing::debug!(
            chunk_x,
            chunk_z,
            kind = ?structure.kind(),
            radius = template.radius(),
            center_y,
            "placing sphere structure"
        );
        place_template(column, &template, Point3D::new(0, center_y, 0));
    }

    /// Stone platform with a bedrock anchor, log pillars, and dirt walls.
    fn build_spawn_platform(&self, column: &mut ChunkColumn) {
        let y = self.config.spawn_y;

        // Floor with an unbreakable anchor under the spawn point.
        column.fill_range((8, y - 4, 8), (11, y - 3, 11), BLOCK_STONE);
        column.set_block(9, y - 4, 9, BLOCK_BEDROCK);

        // Corner pillars.
        column.fill_range((7, y - 4, 7), (8, y, 8), BLOCK_LOG);
        column.fill_range((7, y - 4, 11), (8, y, 12), BLOCK_LOG);
        column.fill_range((11, y - 4, 7), (12, y, 8), BLOCK_LOG);
        column.fill_range((11, y - 4, 11), (12, y, 12), BLOCK_LOG);

        // Walls between the pillars.
        column.fill_range((8, y - 4, 7), (11, y - 1, 8), BLOCK_DIRT);
        column.fill_range((7, y - 4, 8), (8, y - 1, 11), BLOCK_DIRT);
        column.fill_range((11, y - 4, 8), (12, y - 1, 11), BLOCK_DIRT);
        column.fill_range((8, y - 4, 11), (11, y - 1, 12), BLOCK_DIRT);
    }
}
