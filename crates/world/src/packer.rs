//! Placement of generated voxel data into chunk section storage.

use crate::schematic::Schematic;
use crate::section::ChunkColumn;
use crate::sphere::SphereTemplate;
use spheregen_core::{Point3D, BLOCK_AIR};

/// Copy every non-empty cell of `template` into `column`, with the
/// template's minimum corner at `origin`.
///
/// Cells falling outside the column's 16x16 footprint or height are clipped
/// by [`ChunkColumn::set_block`]; a sphere straddling the column edge loses
/// the part that sticks out. Empty template cells never overwrite existing
/// column contents.
pub fn place_template(column: &mut ChunkColumn, template: &SphereTemplate, origin: Point3D) {
    let size = template.size();
    for y in 0..size {
        for z in 0..size {
            for x in 0..size {
                let id = template.get(x, y, z);
                if id == BLOCK_AIR {
                    continue;
                }
                column.set_block(
                    origin.x + x as i32,
                    origin.y + y as i32,
                    origin.z + z as i32,
                    id,
                );
            }
        }
    }
}

/// Place an opaque schematic blob with its midpoint at `center`.
///
/// The whole rectangular blob is written, air cells included, because the
/// blob is host data this engine does not interpret. Out-of-bounds cells are
/// clipped like everything else.
pub fn place_schematic(column: &mut ChunkColumn, schematic: &Schematic, center: Point3D) {
    let half_x = (schematic.width() / 2) as i32;
    let half_y = (schematic.height() / 2) as i32;
    let half_z = (schematic.length() / 2) as i32;

    for y in 0..schematic.height() {
        for z in 0..schematic.length() {
            for x in 0..schematic.width() {
                let target = center.add(
                    x as i32 - half_x,
                    y as i32 - half_y,
                    z as i32 - half_z,
                );
                column.set_block(target.x, target.y, target.z, schematic.id_at(x, y, z));
            }
        }
    }
}
