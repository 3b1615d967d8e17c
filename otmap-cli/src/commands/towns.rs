//! `otmap towns`: one line per town.

use otmap::model::Map;

pub fn lines(map: &Map) -> Vec<String> {
    map.towns
        .iter()
        .map(|town| format!("{:>4}  {:<20} temple {}", town.id, town.name, town.temple_position))
        .collect()
}

pub fn run(map: &Map) {
    if map.towns.is_empty() {
        println!("No towns");
        return;
    }
    for line in lines(map) {
        println!("{}", line);
    }
}
