use terrain_pathfinding::{GridMap, World};

// In this example a route is found on a 5x3 map with shape
//  _____
// |S~...|
// |.~T~.|
// |...~E|
//  _____
// where
// - . marks field
// - T marks forest
// - ~ marks water
// - S marks the traveler
// - E marks the destination
//
// Afterwards a random 40x20 map is generated and routed across.

fn main() {
    let mut world = World::with_seed(7);
    world.load(GridMap::from_rows(&[".~...", ".~T~.", "...~."]).unwrap()).unwrap();
    println!("{}", world.map());
    let start = world.cell_at(0, 0).unwrap();
    let end = world.cell_at(4, 2).unwrap();
    world.place_traveler(&start).unwrap();
    world.place_destination(&end).unwrap();
    match world.find_route().unwrap() {
        Some(route) => {
            println!("Route costing {}:", route.cost);
            for cell in &route.cells {
                println!("{}", cell);
            }
        }
        None => println!("No route"),
    }

    world.generate(40, 20).unwrap();
    println!("\n{}", world.map());
    let passable = world
        .map()
        .cells()
        .filter(|c| c.is_passable())
        .collect::<Vec<_>>();
    let (start, end) = (passable[0], passable[passable.len() - 1]);
    world.place_traveler(&start).unwrap();
    world.place_destination(&end).unwrap();
    match world.find_route().unwrap() {
        Some(route) => println!("{} -> {}: {} cells, cost {}", start, end, route.len(), route.cost),
        None => println!("{} cannot reach {}", start, end),
    }
}
