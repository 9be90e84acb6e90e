use chromalife::grid::{Grid, HueCycle};
use chromalife::patterns::{capture_region, LibraryError, PatternLibrary};
use chromalife::tools::{Tool, ToolController, ToolState};

fn place_blinker(grid: &mut Grid, hue: u16) {
    for col in 1..=3 {
        grid.set(col, 2, hue);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut grid = Grid::new(5, 5);
    place_blinker(&mut grid, 10);
    let start = grid.clone();

    grid = grid.step(20);
    // Vertical phase.
    for row in 1..=3 {
        assert_ne!(grid.get(2, row), 0);
    }
    assert_eq!(grid.live_count(), 3);

    grid = grid.step(30);
    // Back to horizontal, same occupancy as the start.
    for col in 1..=3 {
        assert_ne!(grid.get(col, 2), 0);
    }
    assert_eq!(grid.live_count(), start.live_count());
}

#[test]
fn hue_cycles_through_odd_values_and_wraps() {
    let mut grid = Grid::new(8, 8);
    // Keep a block alive so stepping is not trivially empty.
    for (col, row) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        grid.set(col, row, 1);
    }
    let mut hue = HueCycle::new(2);

    let mut seen = Vec::new();
    for _ in 0..180 {
        grid = grid.step(hue.current());
        hue.advance();
        let h = hue.current();
        assert!((1..=360).contains(&h), "hue {h} escaped the 1..=360 range");
        seen.push(h);
    }
    assert_eq!(seen[0], 3);
    // 180 increments of 2 complete the lap.
    assert_eq!(*seen.last().unwrap(), 1);
}

#[test]
fn brush_paints_a_centered_block_with_the_current_hue() {
    let mut grid = Grid::new(10, 10);
    let library = PatternLibrary::with_builtins();
    let mut tools = ToolController::new(ToolState::new(&library));
    tools.state.brush_size = 3;
    let hue = HueCycle::new(2).current();

    tools.pointer_pressed(&mut grid, Some((5, 5)), hue);

    assert_eq!(grid.live_count(), 9);
    for row in 4..=6 {
        for col in 4..=6 {
            assert_eq!(grid.get(col, row), hue);
        }
    }
}

#[test]
fn shape_stamp_lands_modulo_grid_dimensions() {
    let mut grid = Grid::new(12, 9);
    let library = PatternLibrary::with_builtins();
    let mut tools = ToolController::new(ToolState::new(&library));
    tools.state.tool = Tool::Shape;
    assert!(tools.state.select_pattern("glider", &library));

    // Anchor in the far corner: every pattern cell (dx,dy) must land at
    // ((10+dx) % 12, (7+dy) % 9).
    tools.pointer_pressed(&mut grid, Some((10, 7)), 99);

    let glider = library.get("glider").unwrap();
    let mut expected = 0;
    for (dx, dy) in glider.cells() {
        let col = (10 + dx) % 12;
        let row = (7 + dy) % 9;
        assert_eq!(grid.get(col, row), 99, "missing stamp at ({col},{row})");
        expected += 1;
    }
    assert_eq!(grid.live_count(), expected);
}

#[test]
fn captured_region_can_be_stamped_back() {
    let mut grid = Grid::new(20, 20);
    place_blinker(&mut grid, 50);

    let captured = capture_region(&grid).expect("live cells present");
    assert_eq!((captured.width(), captured.height()), (3, 1));

    let mut library = PatternLibrary::with_builtins();
    library.register("my blinker", captured).unwrap();
    assert_eq!(
        library.register("my blinker", library.get("blinker").unwrap().clone()),
        Err(LibraryError::DuplicateName("my blinker".to_owned()))
    );

    // Stamp the capture somewhere else through the shape tool.
    let mut tools = ToolController::new(ToolState::new(&library));
    tools.state.tool = Tool::Shape;
    assert!(tools.state.select_pattern("my blinker", &library));
    tools.pointer_pressed(&mut grid, Some((10, 10)), 80);
    for col in 10..=12 {
        assert_eq!(grid.get(col, 10), 80);
    }
}

#[test]
fn rotating_a_stamp_four_times_restores_it() {
    let library = PatternLibrary::with_builtins();
    let mut tools = ToolController::new(ToolState::new(&library));
    tools.state.tool = Tool::Shape;
    assert!(tools.state.select_pattern("toad", &library));

    let original = tools.state.active_pattern().clone();
    for _ in 0..4 {
        tools.state.rotate();
    }
    assert_eq!(tools.state.orientation(), 0);
    assert_eq!(*tools.state.active_pattern(), original);
}
