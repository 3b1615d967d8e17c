//! Helpers shared across CLI commands.

use std::path::Path;

use otmap::model::Map;
use otmap::DecoderConfig;
use tracing::info;

use crate::error::CliError;

/// Decode the map at `path`, optionally discarding tile items.
pub fn load_map(path: &Path, keep_items: bool) -> Result<Map, CliError> {
    let config = DecoderConfig::new().with_items(keep_items);
    let map = otmap::decode_file_with(path, &config).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        tiles = map.tiles.len(),
        houses = map.houses.len(),
        "Loaded map"
    );
    Ok(map)
}

/// Format a list of elevations as `7,6,5`.
pub fn format_elevations(elevations: &[u8]) -> String {
    elevations
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
