//! Footprint grids and their shared bounding box.

use image::{Rgba, RgbaImage};

use crate::config::RenderConfig;
use crate::model::{House, Tile};

/// Cells added to the tight bounding box in each dimension.
pub const FOOTPRINT_PADDING: u32 = 3;

/// Inclusive bounding box of a set of tiles, ignoring floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootprintBounds {
    pub min_x: u16,
    pub min_y: u16,
    pub max_x: u16,
    pub max_y: u16,
}

impl FootprintBounds {
    /// Bounds of `tiles`, or `None` if there are none.
    ///
    /// The box starts from the first tile, so a coordinate of 0 is an
    /// ordinary edge like any other.
    pub fn of_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Option<Self> {
        let mut tiles = tiles.into_iter();
        let first = tiles.next()?.position;
        let start = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(tiles.fold(start, |b, tile| Self {
            min_x: b.min_x.min(tile.position.x),
            min_y: b.min_y.min(tile.position.y),
            max_x: b.max_x.max(tile.position.x),
            max_y: b.max_y.max(tile.position.y),
        }))
    }

    /// Grid width: the box's extent plus [`FOOTPRINT_PADDING`].
    pub fn grid_width(&self) -> u32 {
        u32::from(self.max_x.saturating_sub(self.min_x)) + FOOTPRINT_PADDING
    }

    /// Grid height: the box's extent plus [`FOOTPRINT_PADDING`].
    pub fn grid_height(&self) -> u32 {
        u32::from(self.max_y.saturating_sub(self.min_y)) + FOOTPRINT_PADDING
    }
}

/// Occupancy raster of one floor of a house.
///
/// Cell `(0, 0)` corresponds to the house's `(min_x, min_y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintGrid {
    elevation: u8,
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl FootprintGrid {
    /// An empty grid.
    pub fn new(elevation: u8, width: u32, height: u32) -> Self {
        Self {
            elevation,
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Rasterise the tiles of `house` on floor `elevation` within `bounds`.
    ///
    /// Tiles outside `bounds` are left out.
    pub fn render(house: &House, bounds: &FootprintBounds, elevation: u8) -> Self {
        let mut grid = Self::new(elevation, bounds.grid_width(), bounds.grid_height());
        for tile in house.tiles.iter().filter(|t| t.position.z == elevation) {
            let (Some(x), Some(y)) = (
                tile.position.x.checked_sub(bounds.min_x),
                tile.position.y.checked_sub(bounds.min_y),
            ) else {
                continue;
            };
            grid.mark(u32::from(x), u32::from(y));
        }
        grid
    }

    pub fn elevation(&self) -> u8 {
        self.elevation
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mark a cell occupied. Cells outside the grid are ignored.
    pub fn mark(&mut self, x: u32, y: u32) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = true;
        }
    }

    /// Whether a cell is occupied. Cells outside the grid are not.
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|index| self.cells[index])
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Convert to an RGBA image using the configured colours.
    pub fn to_rgba(&self, config: &RenderConfig) -> RgbaImage {
        let occupied = Rgba(config.occupied_color);
        let unoccupied = Rgba(config.unoccupied_color);
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            if self.is_occupied(x, y) {
                occupied
            } else {
                unoccupied
            }
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

/// Render one grid per floor of `house`, in first-seen floor order.
pub fn render_house(house: &House) -> Vec<FootprintGrid> {
    let Some(bounds) = FootprintBounds::of_tiles(&house.tiles) else {
        return Vec::new();
    };
    house
        .elevations()
        .into_iter()
        .map(|elevation| FootprintGrid::render(house, &bounds, elevation))
        .collect()
}
