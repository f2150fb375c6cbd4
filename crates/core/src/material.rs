//! Block/material identifiers.
//!
//! Hosts consume chunk sections as raw byte arrays, so material ids are a
//! single byte with 0 reserved for air.

/// Block identifier as stored in host chunk sections.
pub type BlockId = u8;

/// Reserved ID for air (the empty cell).
pub const BLOCK_AIR: BlockId = 0;

/// ID for stone.
pub const BLOCK_STONE: BlockId = 1;

/// ID for dirt.
pub const BLOCK_DIRT: BlockId = 3;

/// ID for grass.
pub const BLOCK_GRASS: BlockId = 2;

/// ID for planks.
pub const BLOCK_WOOD: BlockId = 5;

/// ID for bedrock.
pub const BLOCK_BEDROCK: BlockId = 7;

/// ID for still water.
pub const BLOCK_WATER: BlockId = 9;

/// ID for still lava.
pub const BLOCK_LAVA: BlockId = 11;

/// ID for sand.
pub const BLOCK_SAND: BlockId = 12;

/// ID for gold ore.
pub const BLOCK_GOLD_ORE: BlockId = 14;

/// ID for iron ore.
pub const BLOCK_IRON_ORE: BlockId = 15;

/// ID for coal ore.
pub const BLOCK_COAL_ORE: BlockId = 16;

/// ID for logs.
pub const BLOCK_LOG: BlockId = 17;

/// ID for sponge.
pub const BLOCK_SPONGE: BlockId = 19;

/// ID for glass.
pub const BLOCK_GLASS: BlockId = 20;

/// ID for lapis ore.
pub const BLOCK_LAPIS_ORE: BlockId = 21;

/// ID for a lapis block.
pub const BLOCK_LAPIS_BLOCK: BlockId = 22;

/// ID for wool.
pub const BLOCK_WOOL: BlockId = 35;

/// ID for a gold block.
pub const BLOCK_GOLD_BLOCK: BlockId = 41;

/// ID for an iron block.
pub const BLOCK_IRON_BLOCK: BlockId = 42;

/// ID for a bookshelf.
pub const BLOCK_BOOKSHELF: BlockId = 47;

/// ID for a diamond block, also the default center marker.
pub const BLOCK_DIAMOND_BLOCK: BlockId = 57;

/// ID for redstone ore.
pub const BLOCK_REDSTONE_ORE: BlockId = 73;

/// ID for ice.
pub const BLOCK_ICE: BlockId = 79;

/// ID for netherrack.
pub const BLOCK_NETHERRACK: BlockId = 87;

/// ID for obsidian.
pub const BLOCK_OBSIDIAN: BlockId = 49;

/// ID for a redstone block.
pub const BLOCK_REDSTONE_BLOCK: BlockId = 152;

/// ID for a coal block.
pub const BLOCK_COAL_BLOCK: BlockId = 173;
