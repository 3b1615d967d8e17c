//! Decoder and renderer configuration.
//!
//! Both configs are plain values with builder-style setters. `Default`
//! gives the behaviour most callers want: keep everything, render every
//! floor in parallel with the standard minimap colours.

/// Colour of occupied footprint cells (light grey, opaque).
pub const DEFAULT_OCCUPIED_COLOR: [u8; 4] = [192, 192, 192, 255];

/// Colour of unoccupied footprint cells (fully transparent).
pub const DEFAULT_UNOCCUPIED_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Which decoded collections a decode call retains.
///
/// Disabling a collection does not skip validation: the corresponding nodes
/// are still decoded field by field, so a malformed file fails the same way
/// whatever the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Keep the flat list of all tiles in [`crate::model::Map::tiles`].
    pub keep_tiles: bool,

    /// Aggregate house tiles into [`crate::model::Map::houses`].
    pub keep_houses: bool,

    /// Keep the items found on each tile.
    pub keep_items: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            keep_tiles: true,
            keep_houses: true,
            keep_items: true,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tiles(mut self, keep: bool) -> Self {
        self.keep_tiles = keep;
        self
    }

    pub fn with_houses(mut self, keep: bool) -> Self {
        self.keep_houses = keep;
        self
    }

    pub fn with_items(mut self, keep: bool) -> Self {
        self.keep_items = keep;
        self
    }
}

/// Settings for house footprint rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// RGBA colour of cells covered by a house tile.
    pub occupied_color: [u8; 4],

    /// RGBA colour of every other cell.
    pub unoccupied_color: [u8; 4],

    /// Render and write floors concurrently.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            occupied_color: DEFAULT_OCCUPIED_COLOR,
            unoccupied_color: DEFAULT_UNOCCUPIED_COLOR,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_occupied_color(mut self, rgba: [u8; 4]) -> Self {
        self.occupied_color = rgba;
        self
    }

    pub fn with_unoccupied_color(mut self, rgba: [u8; 4]) -> Self {
        self.unoccupied_color = rgba;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
