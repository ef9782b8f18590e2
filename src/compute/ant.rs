//! The ant: a four-state turtle that flips cells and walks a torus.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Direction the ant faces. Clockwise order is Up, Right, Down, Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Quarter turn clockwise.
    #[inline]
    pub fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Quarter turn counter-clockwise.
    #[inline]
    pub fn turn_left(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Advance (row, col) one cell in this direction on a `size`-wide torus.
    #[inline]
    pub fn advance(self, row: usize, col: usize, size: usize) -> (usize, usize) {
        match self {
            Heading::Up => ((row + size - 1) % size, col),
            Heading::Down => ((row + 1) % size, col),
            Heading::Left => (row, (col + size - 1) % size),
            Heading::Right => (row, (col + 1) % size),
        }
    }
}

/// Langton's ant.
///
/// On a dead cell: turn right, bring the cell to life, step forward.
/// On a living cell: turn left, kill the cell, step forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    row: usize,
    col: usize,
    heading: Heading,
}

impl Ant {
    /// Ant at an explicit position and heading.
    pub fn new(row: usize, col: usize, heading: Heading) -> Self {
        Self { row, col, heading }
    }

    /// Ant in the middle of a `size`-wide grid, facing up.
    pub fn centered(size: usize) -> Self {
        Self::new(size / 2, size / 2, Heading::Up)
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Current (row, col).
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Apply one transition to `grid`.
    ///
    /// Flips exactly one cell. Neighbor counts are left stale; the caller
    /// recomputes them.
    pub(crate) fn step(&mut self, grid: &mut Grid) {
        let size = grid.size();
        debug_assert!(grid.contains(self.row, self.col));

        let alive = grid.is_alive(self.row, self.col);
        self.heading = if alive {
            self.heading.turn_left()
        } else {
            self.heading.turn_right()
        };
        grid.set_raw(self.row, self.col, !alive);

        (self.row, self.col) = self.heading.advance(self.row, self.col, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_turns_cycle() {
        let mut h = Heading::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            h = h.turn_right();
            seen.push(h);
        }
        assert_eq!(
            seen,
            vec![Heading::Right, Heading::Down, Heading::Left, Heading::Up]
        );

        for h in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(h.turn_right().turn_left(), h);
        }
        assert_eq!(Heading::Up.turn_left(), Heading::Left);
    }

    #[test]
    fn test_centered() {
        let ant = Ant::centered(15);
        assert_eq!(ant.position(), (7, 7));
        assert_eq!(ant.heading(), Heading::Up);

        let ant = Ant::centered(6);
        assert_eq!(ant.position(), (3, 3));

        let ant = Ant::centered(1);
        assert_eq!(ant.position(), (0, 0));
    }

    #[test]
    fn test_first_two_steps() {
        let mut grid = Grid::new(3).unwrap();
        let mut ant = Ant::new(1, 1, Heading::Up);

        ant.step(&mut grid);
        assert!(grid.is_alive(1, 1));
        assert_eq!(ant.heading(), Heading::Right);
        assert_eq!(ant.position(), (0, 1));

        ant.step(&mut grid);
        assert!(grid.is_alive(0, 1));
        assert_eq!(ant.heading(), Heading::Down);
        assert_eq!(ant.position(), (0, 2));
    }

    #[test]
    fn test_living_cell_turns_left() {
        let mut grid = Grid::new(3).unwrap();
        grid.toggle_cell(1, 1).unwrap();
        let mut ant = Ant::new(1, 1, Heading::Up);

        ant.step(&mut grid);
        assert!(!grid.is_alive(1, 1));
        assert_eq!(ant.heading(), Heading::Left);
        assert_eq!(ant.position(), (1, 0));
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(Heading::Up.advance(0, 2, 5), (4, 2));
        assert_eq!(Heading::Right.advance(2, 4, 5), (2, 0));
        assert_eq!(Heading::Down.advance(4, 2, 5), (0, 2));
        assert_eq!(Heading::Left.advance(2, 0, 5), (2, 4));
    }

    #[test]
    fn test_step_wraps_up_from_top_row() {
        // Living cell facing Right turns left to Up and leaves through the top edge.
        let mut grid = Grid::new(4).unwrap();
        grid.toggle_cell(0, 2).unwrap();
        let mut ant = Ant::new(0, 2, Heading::Right);

        ant.step(&mut grid);
        assert_eq!(ant.heading(), Heading::Up);
        assert_eq!(ant.position(), (3, 2));
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1).unwrap();
        let mut ant = Ant::centered(1);
        for i in 0..8 {
            ant.step(&mut grid);
            assert_eq!(ant.position(), (0, 0));
            assert_eq!(grid.is_alive(0, 0), i % 2 == 0);
        }
    }

    proptest! {
        #[test]
        fn prop_ant_stays_in_bounds(
            size in 1usize..20,
            start in (0usize..20, 0usize..20),
            steps in 0usize..300,
        ) {
            let mut grid = Grid::new(size).unwrap();
            let mut ant = Ant::new(start.0 % size, start.1 % size, Heading::Up);
            for _ in 0..steps {
                ant.step(&mut grid);
                prop_assert!(grid.contains(ant.row(), ant.col()));
            }
        }
    }
}
