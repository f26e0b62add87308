//! Breathing-maze game state.

/// Maze grid columns.
pub const COLS: usize = 8;
/// Maze grid rows.
pub const ROWS: usize = 11;

/// One of the four step directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// All directions in candidate-scan order.
pub const ALL_DIRS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// Grid delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// One maze cell: which of its four walls are still standing.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// A cell with all four walls up.
    pub fn sealed() -> Self {
        Self { walls: [true; 4] }
    }

    pub fn wall(&self, dir: Dir) -> bool {
        self.walls[dir as usize]
    }

    pub fn knock(&mut self, dir: Dir) {
        self.walls[dir as usize] = false;
    }
}

/// Row-major maze grid of [`COLS`] × [`ROWS`] cells.
pub struct Maze {
    cells: Vec<Cell>,
}

impl Maze {
    /// A maze with every wall intact. Carving happens in the logic module.
    pub fn sealed() -> Self {
        Self {
            cells: vec![Cell::sealed(); COLS * ROWS],
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * COLS + x]
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * COLS + x]
    }
}

/// Breathing-maze state.
pub struct SuppressionState {
    pub maze: Maze,
    /// Player cell as `(x, y)`.
    pub player: (usize, usize),
    pub goal: (usize, usize),
    /// Ticks of bright wall visibility left after a breath.
    pub reveal_ticks: u32,
    pub rng_seed: u64,
}
