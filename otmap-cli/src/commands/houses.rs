//! `otmap houses`: one line per house.

use otmap::model::Map;

use super::common::format_elevations;

pub fn lines(map: &Map) -> Vec<String> {
    map.houses()
        .map(|house| {
            format!(
                "{:>6}  {:>5} tiles  floors {}",
                house.id,
                house.tiles.len(),
                format_elevations(&house.elevations())
            )
        })
        .collect()
}

pub fn run(map: &Map) {
    if map.houses.is_empty() {
        println!("No houses");
        return;
    }
    for line in lines(map) {
        println!("{}", line);
    }
}
