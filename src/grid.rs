// grid.rs - Toroidal cell grid and the generation-hue counter

use rand::Rng;

/// A cell is dead (0) or alive carrying the hue it was born with (1..=360).
/// The hue never changes while the cell stays alive; only a birth (or a
/// brush stroke) writes a new one.
pub type Cell = u16;

/// Dense toroidal cell grid, row-major. The left neighbour of column 0 is
/// the last column, and likewise for rows; every neighbour lookup and tool
/// write goes through [`Grid::wrap`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![0; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn idx(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[self.idx(col, row)]
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: Cell) {
        let i = self.idx(col, row);
        self.cells[i] = value;
    }

    /// Wrap signed coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, col: i64, row: i64) -> (usize, usize) {
        (
            col.rem_euclid(self.cols as i64) as usize,
            row.rem_euclid(self.rows as i64) as usize,
        )
    }

    /// All live cells as `(col, row, hue)`.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &c)| (c != 0).then(|| (i % self.cols, i / self.cols, c)))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (c, r) = self.wrap(col as i64 + dx, row as i64 + dy);
                if self.get(c, r) != 0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Compute the next generation. Pure: the current grid is only read, so
    /// the renderer can keep using it while the successor is built; the
    /// caller swaps the result in wholesale.
    ///
    /// Newly-born cells are stamped with `birth_hue`; survivors keep the hue
    /// they were born with.
    pub fn step(&self, birth_hue: Cell) -> Grid {
        let mut next = Grid::new(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let state = self.get(col, row);
                let neighbors = self.live_neighbors(col, row);
                let value = match (state, neighbors) {
                    (0, 3) => birth_hue,  // Birth
                    (s, 2) | (s, 3) => s, // Survival (dead cells stay 0)
                    _ => 0,               // Death or stays dead
                };
                next.set(col, row, value);
            }
        }
        next
    }

    /// Each cell independently becomes alive with `probability`, stamped
    /// with `hue`, else dead.
    pub fn randomize(&mut self, probability: f64, hue: Cell, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = if rng.random_bool(probability) { hue } else { 0 };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

/// Generation hue counter: 1-based in [1,360], advanced by a fixed
/// increment once per simulation step and stamped onto everything born (or
/// painted) during that generation.
#[derive(Clone, Copy, Debug)]
pub struct HueCycle {
    current: Cell,
    increment: u16,
}

impl HueCycle {
    pub fn new(increment: u16) -> Self {
        Self {
            current: 1,
            increment,
        }
    }

    pub fn current(&self) -> Cell {
        self.current
    }

    /// `(h - 1 + inc) % 360 + 1` keeps the counter in the 1-based range.
    pub fn advance(&mut self) {
        self.current = (self.current - 1 + self.increment) % 360 + 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn dead_grid_stays_dead() {
        let grid = Grid::new(8, 8);
        let next = grid.step(42);
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        // Horizontal blinker centered on a 5x5 grid, away from the seams.
        let mut grid = Grid::new(5, 5);
        for col in 1..=3 {
            grid.set(col, 2, 10);
        }

        let next = grid.step(20);
        for row in 1..=3 {
            assert_ne!(next.get(2, row), 0, "expected live cell at (2, {row})");
        }
        assert_eq!(next.live_count(), 3);
        // The pivot survived, the two arms were born with the new hue.
        assert_eq!(next.get(2, 2), 10);
        assert_eq!(next.get(2, 1), 20);
        assert_eq!(next.get(2, 3), 20);

        let back = next.step(30);
        for col in 1..=3 {
            assert_ne!(back.get(col, 2), 0);
        }
        assert_eq!(back.live_count(), 3);
    }

    #[test]
    fn corner_neighbors_wrap_both_axes() {
        // All eight wrapped neighbours of the (0,0) corner on a 4x4 torus.
        let mut grid = Grid::new(4, 4);
        for (col, row) in [(3, 3), (0, 3), (1, 3), (3, 0), (1, 0), (3, 1), (0, 1), (1, 1)] {
            grid.set(col, row, 5);
        }
        assert_eq!(grid.live_neighbors(0, 0), 8);

        // A single live cell at the opposite corner is still adjacent.
        let mut grid = Grid::new(4, 4);
        grid.set(3, 3, 5);
        assert_eq!(grid.live_neighbors(0, 0), 1);
    }

    #[test]
    fn randomize_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6, 6);

        grid.randomize(1.0, 77, &mut rng);
        assert_eq!(grid.live_count(), 36);
        assert!(grid.live_cells().all(|(_, _, hue)| hue == 77));

        grid.clear();
        grid.randomize(0.0, 77, &mut rng);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn hue_cycle_stays_in_range() {
        let mut hue = HueCycle::new(2);
        assert_eq!(hue.current(), 1);
        hue.advance();
        assert_eq!(hue.current(), 3);

        let mut hue = HueCycle::new(2);
        for _ in 0..180 {
            hue.advance();
            assert!((1..=360).contains(&hue.current()));
        }
        // 180 steps of +2 is a full lap.
        assert_eq!(hue.current(), 1);
    }

    #[test]
    fn survivor_keeps_birth_hue() {
        // A block is a still life: every cell must keep its original hue
        // across steps even as the generation hue moves on.
        let mut grid = Grid::new(6, 6);
        for (col, row) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            grid.set(col, row, 111);
        }
        let next = grid.step(222);
        for (col, row) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(next.get(col, row), 111);
        }
    }
}
