use terrain_pathfinding::{GridMap, MapError, TerrainKind, World};

fn world_with(rows: &[&str]) -> World {
    let mut world = World::with_seed(0);
    world.load(GridMap::from_rows(rows).unwrap()).unwrap();
    world
}

#[test]
fn single_field_cell() {
    let world = world_with(&["."]);
    let c = world.cell_at(0, 0).unwrap();
    let route = world.find_path(&c, &c).unwrap().unwrap();
    assert_eq!(route.cells, vec![c]);
    assert_eq!(route.cost, 0);
}

#[test]
fn water_cuts_the_row() {
    let world = world_with(&[".~."]);
    let start = world.cell_at(0, 0).unwrap();
    let end = world.cell_at(2, 0).unwrap();
    assert_eq!(world.find_path(&start, &end), Ok(None));
}

#[test]
fn forest_row_costs_more() {
    let cost = |rows: &[&str]| {
        let world = world_with(rows);
        let start = world.cell_at(0, 0).unwrap();
        let end = world.cell_at(2, 0).unwrap();
        let route = world.find_path(&start, &end).unwrap().unwrap();
        assert_eq!(route.len(), 3);
        route.cost
    };
    assert!(cost(&[".T."]) > cost(&["..."]));
}

#[test]
fn traveler_stays_put_on_failed_placement() {
    let mut world = world_with(&[".~"]);
    let field = world.cell_at(0, 0).unwrap();
    let water = world.cell_at(1, 0).unwrap();
    assert_eq!(water.terrain, TerrainKind::Water);
    world.place_traveler(&field).unwrap();
    assert_eq!(
        world.place_traveler(&water),
        Err(MapError::Impassable { x: 1, y: 0 })
    );
    assert_eq!(world.entities().traveler(), Some(field));
}

#[test]
fn routes_on_generated_maps() {
    let mut world = World::with_seed(9);
    world.generate(60, 40).unwrap();
    let passable = world
        .map()
        .cells()
        .filter(|c| c.is_passable())
        .collect::<Vec<_>>();
    let (start, end) = (passable[0], passable[passable.len() - 1]);
    world.place_traveler(&start).unwrap();
    world.place_destination(&end).unwrap();
    let route = world.find_route().unwrap();
    assert_eq!(route.is_some(), world.map().reachable(&start, &end));
    if let Some(route) = route {
        assert!(route.cost >= route.len() as i32 - 1);
        assert!(route.cells.iter().all(|c| c.is_passable()));
    }
}
