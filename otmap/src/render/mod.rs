//! House footprint rendering.
//!
//! A house's tiles are rasterised into one [`FootprintGrid`] per floor. All
//! floors of a house share one bounding box, so their grids line up when
//! viewed on top of each other.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   render_house    ┌────────────────┐   FootprintSink
//! │    House    │ ────────────────► │ FootprintGrid  │ ─────────────────► PNG / memory
//! │ (all floors)│  shared bounds,   │  (one per z)   │  one write per z
//! └─────────────┘  +3 padding       └────────────────┘
//! ```
//!
//! Grids are independent once the bounds are known, so
//! [`write_house_footprints`] renders and writes floors in parallel and
//! reports every floor's outcome separately.
//!
//! # Example
//!
//! ```
//! use otmap::model::{House, Position, Tile};
//! use otmap::render::{render_house, MemoryFootprintSink};
//!
//! let mut house = House::new(1);
//! house.tiles.push(Tile::new(Position::new(100, 200, 7)));
//! house.tiles.push(Tile::new(Position::new(101, 200, 7)));
//!
//! let grids = render_house(&house);
//! assert_eq!(grids.len(), 1);
//! assert_eq!((grids[0].width(), grids[0].height()), (4, 3));
//! assert!(grids[0].is_occupied(1, 0));
//! ```

mod error;
mod grid;
mod png;
mod sink;

pub use error::RenderError;
pub use grid::{render_house, FootprintBounds, FootprintGrid, FOOTPRINT_PADDING};
pub use png::{encode_png, PngFootprintSink};
pub use sink::{FootprintSink, MemoryFootprintSink};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::model::House;

/// Outcome of writing one floor's footprint.
#[derive(Debug)]
pub struct ElevationReport {
    pub elevation: u8,
    pub result: Result<(), RenderError>,
}

impl ElevationReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Render every floor of `house` and hand each grid to `sink`.
///
/// Returns one report per floor, in first-seen floor order. A failed write
/// does not stop the remaining floors. A house without tiles produces no
/// reports.
pub fn write_house_footprints(
    house: &House,
    sink: &dyn FootprintSink,
    config: &RenderConfig,
) -> Vec<ElevationReport> {
    let Some(bounds) = FootprintBounds::of_tiles(&house.tiles) else {
        debug!(house_id = house.id, "House has no tiles, nothing to render");
        return Vec::new();
    };
    let elevations = house.elevations();

    let write_level = |&elevation: &u8| {
        let grid = FootprintGrid::render(house, &bounds, elevation);
        let result = sink.write(house.id, &grid);
        if let Err(e) = &result {
            warn!(house_id = house.id, elevation, error = %e, "Failed to write footprint");
        }
        ElevationReport { elevation, result }
    };

    if config.parallel {
        elevations.par_iter().map(write_level).collect()
    } else {
        elevations.iter().map(write_level).collect()
    }
}
