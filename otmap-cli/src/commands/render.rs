//! `otmap render`: write house footprints as PNG files.

use std::path::Path;

use otmap::model::{House, Map};
use otmap::render::{write_house_footprints, PngFootprintSink};
use otmap::RenderConfig;
use tracing::info;

use crate::error::CliError;

/// Houses selected by `--house`, or every house when none are given.
fn select_houses<'a>(map: &'a Map, ids: &[u32]) -> Result<Vec<&'a House>, CliError> {
    if ids.is_empty() {
        return Ok(map.houses().collect());
    }
    ids.iter()
        .map(|&id| map.house(id).ok_or(CliError::UnknownHouse(id)))
        .collect()
}

/// Render the selected houses into `out_dir`, creating it if needed.
///
/// Every floor is attempted; failures are printed as they are reported and
/// turned into a single error at the end.
pub fn run(map: &Map, out_dir: &Path, ids: &[u32], config: &RenderConfig) -> Result<(), CliError> {
    let houses = select_houses(map, ids)?;

    std::fs::create_dir_all(out_dir).map_err(|source| CliError::OutputDirectory {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let sink = PngFootprintSink::new(out_dir).with_config(config);

    let mut total = 0;
    let mut failed = 0;
    for house in houses {
        for report in write_house_footprints(house, &sink, config) {
            total += 1;
            if let Err(e) = &report.result {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    info!(total, failed, out_dir = %out_dir.display(), "Rendered house footprints");
    println!(
        "Wrote {} footprint(s) to {}",
        total - failed,
        out_dir.display()
    );

    if failed > 0 {
        return Err(CliError::RenderFailures { failed, total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use tempfile::TempDir;

    fn map() -> Map {
        otmap::decode_bytes(&fixtures::house_map()).unwrap()
    }

    #[test]
    fn test_render_all_houses() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("minimaps");
        run(&map(), &out, &[], &RenderConfig::default()).unwrap();
        assert!(out.join("house_42_7.png").is_file());
    }

    #[test]
    fn test_render_selected_house() {
        let dir = TempDir::new().unwrap();
        run(&map(), dir.path(), &[42], &RenderConfig::default()).unwrap();
        assert!(dir.path().join("house_42_7.png").is_file());
    }

    #[test]
    fn test_render_unknown_house() {
        let dir = TempDir::new().unwrap();
        let err = run(&map(), dir.path(), &[7], &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::UnknownHouse(7)));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
