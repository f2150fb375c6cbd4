//! Sphere geometry and the material compositions built on it.
//!
//! All sphere variants share one rasterizer: walk the positive octant of the
//! bounding cube, keep the points strictly inside the radius, and mirror each
//! hit across the seven remaining sign combinations. The distance test is
//! sign-symmetric, so the mirrors are known to qualify without re-testing.

use crate::structure::StructureError;
use rand::Rng;
use spheregen_core::{BlockId, Point3D, BLOCK_AIR, BLOCK_DIAMOND_BLOCK};

/// Default minimum radius for spheres built without an explicit range.
pub const DEFAULT_MIN_RADIUS: i32 = 3;
/// Default maximum radius for spheres built without an explicit range.
pub const DEFAULT_MAX_RADIUS: i32 = 7;

/// Material placed at the exact center when a sphere's marker flag is set.
pub const CENTER_MARKER: BlockId = BLOCK_DIAMOND_BLOCK;

/// True when `probe` lies strictly inside the sphere of `radius` around
/// `center`. The boundary itself (distance exactly `radius`) is outside.
pub(crate) fn in_radius(center: Point3D, probe: Point3D, radius: i32) -> bool {
    let r = radius as i64;
    probe.distance_squared(center) < r * r
}

/// Draw the working radius for one generation call.
///
/// A fixed range (`min == max`) uses that value. Otherwise the draw is
/// uniform over the half-open interval `[min, max)`; the maximum itself is
/// never produced. Downstream spawn tuning assumes this distribution, so it
/// stays half-open even though the constructors document an inclusive range.
fn draw_radius<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min == max {
        max
    } else {
        rng.gen_range(min..max)
    }
}

/// Rasterize the sphere of `radius` around `center`.
///
/// `visit` is invoked for every voxel strictly inside the sphere with the
/// voxel's position and whether it is the exact center. Only one octant is
/// distance-tested; the other seven are emitted by reflection. Mirrors of a
/// point with a zero component revisit the same cell, which is harmless
/// because every write for a given cell carries the same material.
pub(crate) fn rasterize_sphere(center: Point3D, radius: i32, mut visit: impl FnMut(Point3D, bool)) {
    debug_assert!(radius >= 1, "constructors reject non-positive radii");
    let limit = (radius as i64) * (radius as i64);

    for y in 0..radius {
        for z in 0..radius {
            for x in 0..radius {
                let d2 = (x as i64) * (x as i64) + (y as i64) * (y as i64) + (z as i64) * (z as i64);
                if d2 >= limit {
                    continue;
                }
                let is_center = x == 0 && y == 0 && z == 0;
                for sy in [1, -1] {
                    for sz in [1, -1] {
                        for sx in [1, -1] {
                            visit(center.add(sx * x, sy * y, sz * z), is_center);
                        }
                    }
                }
            }
        }
    }
}

/// Dense voxel template produced by one sphere generation call.
///
/// Cells are laid out `[y][z][x]` with side length `2 * radius`; `BLOCK_AIR`
/// marks an empty cell. The geometric center sits at index
/// `(radius, radius, radius)`. The template is owned by the caller and is
/// meant to be copied into destination storage, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphereTemplate {
    radius: i32,
    size: usize,
    cells: Vec<BlockId>,
}

impl SphereTemplate {
    fn new(radius: i32) -> Self {
        debug_assert!(radius >= 1);
        let size = 2 * radius as usize;
        Self {
            radius,
            size,
            cells: vec![BLOCK_AIR; size * size * size],
        }
    }

    /// Radius the template was rasterized with.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Side length of the bounding cube (`2 * radius` on every axis).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The template-local coordinates of the geometric center.
    pub fn center(&self) -> Point3D {
        Point3D::new(self.radius, self.radius, self.radius)
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size && y < self.size && z < self.size);
        (y * self.size + z) * self.size + x
    }

    /// Material at a template-local cell; `BLOCK_AIR` when empty.
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.cells[self.index(x, y, z)]
    }

    fn set(&mut self, x: usize, y: usize, z: usize, id: BlockId) {
        let idx = self.index(x, y, z);
        self.cells[idx] = id;
    }

    /// Count of non-empty cells.
    pub fn filled_len(&self) -> usize {
        self.cells.iter().filter(|&&id| id != BLOCK_AIR).count()
    }
}

/// Validation shared by every sphere constructor. Constructors are the sole
/// gate; generation assumes these invariants hold.
fn validate_sphere(
    min_radius: i32,
    max_radius: i32,
    spawn_chance: f64,
) -> Result<(), StructureError> {
    if min_radius < 1 {
        return Err(StructureError::InvalidRadius(min_radius));
    }
    if max_radius < min_radius {
        return Err(StructureError::InvertedRadiusRange {
            min: min_radius,
            max: max_radius,
        });
    }
    if !(0.0..=1.0).contains(&spawn_chance) {
        return Err(StructureError::InvalidChance(spawn_chance));
    }
    Ok(())
}

fn require_material(id: BlockId) -> Result<BlockId, StructureError> {
    if id == BLOCK_AIR {
        Err(StructureError::AirMaterial)
    } else {
        Ok(id)
    }
}

/// Shared generation driver: draw a radius, rasterize the template, and let
/// the composition hook pick each cell's material.
fn generate_template_with<R: Rng + ?Sized>(
    rng: &mut R,
    min_radius: i32,
    max_radius: i32,
    material_at: impl Fn(Point3D, Point3D, i32, bool) -> BlockId,
) -> SphereTemplate {
    let radius = draw_radius(rng, min_radius, max_radius);
    let mut template = SphereTemplate::new(radius);
    let center = template.center();
    rasterize_sphere(center, radius, |point, is_center| {
        let id = material_at(point, center, radius, is_center);
        template.set(point.x as usize, point.y as usize, point.z as usize, id);
    });
    template
}

/// Shared direct-emission driver. `visit` receives world coordinates and the
/// resolved material. Returns the bounding cube size (`2 * radius` per axis).
fn generate_at_with<R: Rng + ?Sized>(
    rng: &mut R,
    min_radius: i32,
    max_radius: i32,
    center: Point3D,
    material_at: impl Fn(Point3D, Point3D, i32, bool) -> BlockId,
    mut visit: impl FnMut(Point3D, BlockId),
) -> Point3D {
    let radius = draw_radius(rng, min_radius, max_radius);
    rasterize_sphere(center, radius, |point, is_center| {
        visit(point, material_at(point, center, radius, is_center));
    });
    Point3D::new(2 * radius, 2 * radius, 2 * radius)
}

/// A sphere deposit of a single raw material.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMaterialSphere {
    material: BlockId,
    min_radius: i32,
    max_radius: i32,
    spawn_chance: f64,
    with_marker: bool,
}

impl RawMaterialSphere {
    /// Create a raw material sphere.
    ///
    /// `material` must not be air, radii must satisfy
    /// `1 <= min_radius <= max_radius`, and `spawn_chance` must lie in
    /// `[0, 1]`. When `with_marker` is set, the exact center cell receives
    /// [`CENTER_MARKER`] instead of `material`.
    pub fn new(
        material: BlockId,
        min_radius: i32,
        max_radius: i32,
        spawn_chance: f64,
        with_marker: bool,
    ) -> Result<Self, StructureError> {
        validate_sphere(min_radius, max_radius, spawn_chance)?;
        Ok(Self {
            material: require_material(material)?,
            min_radius,
            max_radius,
            spawn_chance,
            with_marker,
        })
    }

    /// Create with the default radius range of 3..7.
    pub fn with_default_radius(
        material: BlockId,
        spawn_chance: f64,
        with_marker: bool,
    ) -> Result<Self, StructureError> {
        Self::new(
            material,
            DEFAULT_MIN_RADIUS,
            DEFAULT_MAX_RADIUS,
            spawn_chance,
            with_marker,
        )
    }

    /// Spawn chance in `[0, 1]`.
    pub fn spawn_chance(&self) -> f64 {
        self.spawn_chance
    }

    /// The sphere's material.
    pub fn material(&self) -> BlockId {
        self.material
    }

    fn material_at(
        &self,
        _point: Point3D,
        _center: Point3D,
        _radius: i32,
        is_center: bool,
    ) -> BlockId {
        if is_center && self.with_marker {
            CENTER_MARKER
        } else {
            self.material
        }
    }

    /// Rasterize into a fresh caller-owned template.
    pub fn generate_template<R: Rng + ?Sized>(&self, rng: &mut R) -> SphereTemplate {
        generate_template_with(rng, self.min_radius, self.max_radius, |p, c, r, is_center| {
            self.material_at(p, c, r, is_center)
        })
    }

    /// Emit directly in world coordinates around `center`; returns the
    /// bounding cube size.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        center: Point3D,
        visit: impl FnMut(Point3D, BlockId),
    ) -> Point3D {
        generate_at_with(
            rng,
            self.min_radius,
            self.max_radius,
            center,
            |p, c, r, is_center| self.material_at(p, c, r, is_center),
            visit,
        )
    }
}

/// A sphere with a one-voxel-thick shell around a different filling material.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledSphere {
    shell: BlockId,
    fill: BlockId,
    min_radius: i32,
    max_radius: i32,
    spawn_chance: f64,
    with_marker: bool,
}

impl FilledSphere {
    /// Create a filled sphere.
    ///
    /// Neither `shell` nor `fill` may be air; radii and `spawn_chance` follow
    /// the same rules as [`RawMaterialSphere::new`].
    pub fn new(
        shell: BlockId,
        fill: BlockId,
        min_radius: i32,
        max_radius: i32,
        spawn_chance: f64,
        with_marker: bool,
    ) -> Result<Self, StructureError> {
        validate_sphere(min_radius, max_radius, spawn_chance)?;
        Ok(Self {
            shell: require_material(shell)?,
            fill: require_material(fill)?,
            min_radius,
            max_radius,
            spawn_chance,
            with_marker,
        })
    }

    /// Create with the default radius range of 3..7.
    pub fn with_default_radius(
        shell: BlockId,
        fill: BlockId,
        spawn_chance: f64,
        with_marker: bool,
    ) -> Result<Self, StructureError> {
        Self::new(
            shell,
            fill,
            DEFAULT_MIN_RADIUS,
            DEFAULT_MAX_RADIUS,
            spawn_chance,
            with_marker,
        )
    }

    /// Spawn chance in `[0, 1]`.
    pub fn spawn_chance(&self) -> f64 {
        self.spawn_chance
    }

    /// The outer shell material.
    pub fn shell(&self) -> BlockId {
        self.shell
    }

    /// The inner filling material.
    pub fn fill(&self) -> BlockId {
        self.fill
    }

    fn material_at(
        &self,
        point: Point3D,
        center: Point3D,
        radius: i32,
        is_center: bool,
    ) -> BlockId {
        if is_center && self.with_marker {
            return CENTER_MARKER;
        }
        // Inside the next radius down means off the outermost unit shell.
        if in_radius(center, point, radius - 1) {
            self.fill
        } else {
            self.shell
        }
    }

    /// Rasterize into a fresh caller-owned template.
    pub fn generate_template<R: Rng + ?Sized>(&self, rng: &mut R) -> SphereTemplate {
        generate_template_with(rng, self.min_radius, self.max_radius, |p, c, r, is_center| {
            self.material_at(p, c, r, is_center)
        })
    }

    /// Emit directly in world coordinates around `center`; returns the
    /// bounding cube size.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        center: Point3D,
        visit: impl FnMut(Point3D, BlockId),
    ) -> Point3D {
        generate_at_with(
            rng,
            self.min_radius,
            self.max_radius,
            center,
            |p, c, r, is_center| self.material_at(p, c, r, is_center),
            visit,
        )
    }
}
