//! `otmap info`: map header and summary counts.

use otmap::model::Map;

use super::common::format_elevations;

/// Summary lines for `map`.
pub fn summary(map: &Map) -> Vec<String> {
    let house_tiles: usize = map.houses().map(|h| h.tiles.len()).sum();
    vec![
        format!("Size:          {}x{}", map.width, map.height),
        format!("Version:       {}", map.header_version),
        format!(
            "Items version: {}.{}",
            map.items_major_version, map.items_minor_version
        ),
        format!("Description:   {}", map.description),
        format!("Spawn file:    {}", map.spawn_file),
        format!("House file:    {}", map.house_file),
        format!("Tiles:         {}", map.tiles.len()),
        format!("Floors:        {}", format_elevations(&map.elevations())),
        format!("Towns:         {}", map.towns.len()),
        format!("Houses:        {} ({} tiles)", map.houses.len(), house_tiles),
    ]
}

pub fn run(map: &Map) {
    for line in summary(map) {
        println!("{}", line);
    }
}
