//! PNG footprint output.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::debug;

use super::{FootprintGrid, FootprintSink, RenderError};
use crate::config::RenderConfig;

/// Encode a grid as PNG bytes.
pub fn encode_png(grid: &FootprintGrid, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    grid.to_rgba(config).write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Writes each floor of a house as `house_<id>_<elevation>.png`.
///
/// # Example
///
/// ```no_run
/// use otmap::render::{write_house_footprints, PngFootprintSink};
/// use otmap::RenderConfig;
///
/// let map = otmap::otbm::decode_file("world.otbm")?;
/// let config = RenderConfig::default();
/// let sink = PngFootprintSink::new("minimaps").with_config(&config);
///
/// for house in map.houses() {
///     for report in write_house_footprints(house, &sink, &config) {
///         if let Err(e) = report.result {
///             eprintln!("{}", e);
///         }
///     }
/// }
/// # Ok::<(), otmap::OtbmError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PngFootprintSink {
    directory: PathBuf,
    config: RenderConfig,
}

impl PngFootprintSink {
    /// Create a sink writing into `directory` with the default colours.
    ///
    /// The directory must already exist.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            config: RenderConfig::default(),
        }
    }

    /// Use the colours from `config`.
    pub fn with_config(mut self, config: &RenderConfig) -> Self {
        self.config = config.clone();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path the footprint of one floor is written to.
    pub fn file_path(&self, house_id: u32, elevation: u8) -> PathBuf {
        self.directory.join(format!("house_{}_{}.png", house_id, elevation))
    }
}

impl FootprintSink for PngFootprintSink {
    fn write(&self, house_id: u32, grid: &FootprintGrid) -> Result<(), RenderError> {
        let path = self.file_path(house_id, grid.elevation());
        let failure = |reason: String| RenderError::SinkWriteFailure {
            house_id,
            elevation: grid.elevation(),
            reason,
        };

        let bytes = encode_png(grid, &self.config).map_err(|e| failure(e.to_string()))?;
        std::fs::write(&path, bytes)
            .map_err(|e| failure(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Wrote house footprint");
        Ok(())
    }
}
