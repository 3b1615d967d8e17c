//! Destinations for rendered footprints.

use parking_lot::Mutex;

use super::{FootprintGrid, RenderError};

/// Trait for persisting rendered footprints.
///
/// Implementations must be thread-safe (`Send + Sync`): floors of one house
/// may be written concurrently.
///
/// # Implementors
///
/// - [`super::PngFootprintSink`] - Writes one PNG file per floor
/// - [`MemoryFootprintSink`] - Keeps grids in memory
pub trait FootprintSink: Send + Sync {
    /// Persist the footprint of one floor of house `house_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SinkWriteFailure`] if the grid cannot be stored.
    fn write(&self, house_id: u32, grid: &FootprintGrid) -> Result<(), RenderError>;
}

/// Sink that collects grids in memory, in write order.
#[derive(Debug, Default)]
pub struct MemoryFootprintSink {
    grids: Mutex<Vec<(u32, FootprintGrid)>>,
}

impl MemoryFootprintSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far as `(house_id, grid)` pairs.
    pub fn grids(&self) -> Vec<(u32, FootprintGrid)> {
        self.grids.lock().clone()
    }

    /// The grid written for a given house and floor, if any.
    pub fn get(&self, house_id: u32, elevation: u8) -> Option<FootprintGrid> {
        self.grids
            .lock()
            .iter()
            .find(|(id, grid)| *id == house_id && grid.elevation() == elevation)
            .map(|(_, grid)| grid.clone())
    }

    pub fn len(&self) -> usize {
        self.grids.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.lock().is_empty()
    }
}

impl FootprintSink for MemoryFootprintSink {
    fn write(&self, house_id: u32, grid: &FootprintGrid) -> Result<(), RenderError> {
        self.grids.lock().push((house_id, grid.clone()));
        Ok(())
    }
}
