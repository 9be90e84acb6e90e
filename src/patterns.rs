// patterns.rs - Named stamp patterns: builtin table, rotation, capture

use crate::grid::Grid;

/// Rectangular boolean stamp. Rows all share the same width.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Occupied cells as `(dx, dy)` offsets from the top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &set)| set.then_some((x, y)))
        })
    }

    /// Rotate 90 degrees clockwise: an HxW matrix becomes WxH with
    /// `new[c][H-1-r] = old[r][c]`. Four rotations are the identity.
    pub fn rotated_clockwise(&self) -> Pattern {
        let h = self.height();
        let w = self.width();
        let mut rows = vec![vec![false; h]; w];
        for r in 0..h {
            for c in 0..w {
                rows[c][h - 1 - r] = self.rows[r][c];
            }
        }
        Pattern { rows }
    }

    /// The four 90-degree orientations, starting from this one. Computed
    /// once when a pattern becomes active; the rotate command then just
    /// cycles an index.
    pub fn orientations(&self) -> [Pattern; 4] {
        let r1 = self.rotated_clockwise();
        let r2 = r1.rotated_clockwise();
        let r3 = r2.rotated_clockwise();
        [self.clone(), r1, r2, r3]
    }
}

/// Extract the live cells of `grid` as a minimal pattern normalized to the
/// bounding box origin. The grid itself is left untouched.
pub fn capture_region(grid: &Grid) -> Result<Pattern, LibraryError> {
    let mut min_col = usize::MAX;
    let mut min_row = usize::MAX;
    let mut max_col = 0;
    let mut max_row = 0;
    let mut any = false;
    for (col, row, _) in grid.live_cells() {
        any = true;
        min_col = min_col.min(col);
        max_col = max_col.max(col);
        min_row = min_row.min(row);
        max_row = max_row.max(row);
    }
    if !any {
        return Err(LibraryError::EmptyGrid);
    }

    let mut rows = vec![vec![false; max_col - min_col + 1]; max_row - min_row + 1];
    for (col, row, _) in grid.live_cells() {
        rows[row - min_row][col - min_col] = true;
    }
    Ok(Pattern::from_rows(rows))
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    /// Capture found nothing alive to extract.
    #[error("no live cells to capture")]
    EmptyGrid,
    /// Registration would shadow an existing pattern.
    #[error("a pattern named {0:?} already exists")]
    DuplicateName(String),
}

/// Builtin stamp shapes, seeded at startup. 1 = occupied.
const BUILTINS: &[(&str, &[&[u8]])] = &[
    ("glider", &[
        &[0, 0, 1],
        &[1, 0, 1],
        &[0, 1, 1],
    ]),
    ("beehive", &[
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ]),
    ("blinker", &[
        &[1, 1, 1],
    ]),
    ("toad", &[
        &[0, 1, 1, 1],
        &[1, 1, 1, 0],
    ]),
    ("lwss", &[
        &[0, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[0, 0, 0, 0, 1],
        &[1, 0, 0, 1, 0],
    ]),
    ("gosper glider gun", &[
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
        &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ]),
    ("small bomb", &[
        &[1, 1, 1, 0, 1, 1, 1],
        &[1, 0, 1, 0, 1, 0, 1],
        &[1, 1, 1, 0, 1, 1, 1],
    ]),
    ("eater1", &[
        &[1, 1, 0, 0],
        &[1, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 1],
    ]),
];

/// Named pattern registry. Builtins are seeded at construction; captured
/// patterns join the same namespace at runtime. Registration order is
/// preserved for the UI dropdown.
pub struct PatternLibrary {
    entries: Vec<(String, Pattern)>,
}

impl PatternLibrary {
    pub fn with_builtins() -> Self {
        let entries = BUILTINS
            .iter()
            .map(|&(name, rows)| {
                let rows = rows
                    .iter()
                    .map(|row| row.iter().map(|&v| v != 0).collect())
                    .collect();
                (name.to_owned(), Pattern::from_rows(rows))
            })
            .collect();
        Self { entries }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// First entry in registration order. The builtin table guarantees the
    /// library is never empty.
    pub fn first(&self) -> (&str, &Pattern) {
        let (name, pattern) = &self.entries[0];
        (name, pattern)
    }

    /// Add a pattern under a new name. Rejects duplicates and leaves the
    /// table unchanged on failure.
    pub fn register(&mut self, name: &str, pattern: Pattern) -> Result<(), LibraryError> {
        if self.get(name).is_some() {
            return Err(LibraryError::DuplicateName(name.to_owned()));
        }
        self.entries.push((name.to_owned(), pattern));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(rows: &[&[u8]]) -> Pattern {
        Pattern::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        )
    }

    #[test]
    fn rotate_four_times_is_identity() {
        let toad = pattern(&[&[0, 1, 1, 1], &[1, 1, 1, 0]]);
        let mut rotated = toad.clone();
        for _ in 0..4 {
            rotated = rotated.rotated_clockwise();
        }
        assert_eq!(toad, rotated);
    }

    #[test]
    fn rotate_turns_horizontal_blinker_vertical() {
        let blinker = pattern(&[&[1, 1, 1]]);
        let rotated = blinker.rotated_clockwise();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 3);
        assert!((0..3).all(|y| rotated.is_set(0, y)));
    }

    #[test]
    fn rotate_non_square() {
        // 2x3 L-shape turns into its 3x2 clockwise image.
        let l = pattern(&[&[1, 0, 0], &[1, 1, 1]]);
        let r = l.rotated_clockwise();
        assert_eq!(r, pattern(&[&[1, 1], &[1, 0], &[1, 0]]));
    }

    #[test]
    fn capture_empty_grid_fails() {
        let grid = Grid::new(10, 10);
        assert_eq!(capture_region(&grid), Err(LibraryError::EmptyGrid));
    }

    #[test]
    fn capture_normalizes_to_bounding_box() {
        let mut grid = Grid::new(10, 10);
        grid.set(4, 6, 90);
        grid.set(6, 6, 90);
        grid.set(5, 7, 90);
        let captured = capture_region(&grid).unwrap();
        assert_eq!((captured.width(), captured.height()), (3, 2));
        assert!(captured.is_set(0, 0));
        assert!(captured.is_set(2, 0));
        assert!(captured.is_set(1, 1));
        assert!(!captured.is_set(1, 0));
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut library = PatternLibrary::with_builtins();
        let count = library.names().count();
        let p = pattern(&[&[1]]);

        assert_eq!(
            library.register("glider", p.clone()),
            Err(LibraryError::DuplicateName("glider".to_owned()))
        );
        assert_eq!(library.names().count(), count);

        assert_eq!(library.register("dot", p), Ok(()));
        assert!(library.get("dot").is_some());
    }

    #[test]
    fn builtins_are_seeded() {
        let library = PatternLibrary::with_builtins();
        for name in ["glider", "blinker", "toad", "gosper glider gun"] {
            assert!(library.get(name).is_some(), "missing builtin {name:?}");
        }
        assert_eq!(library.first().0, "glider");
    }
}
