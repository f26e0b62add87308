//! Breathing maze — pure game logic (no rendering / IO).

use crate::levels::run::LevelRun;

use super::state::{Dir, Maze, SuppressionState, ALL_DIRS, COLS, ROWS};

/// Score for one successful step.
pub const STEP_SCORE: f64 = 2.0;
/// Bonus for reaching the goal.
pub const GOAL_SCORE: f64 = 40.0;
/// How long one breath keeps the walls bright (2 s at 10 ticks/sec).
pub const BREATH_TICKS: u32 = 20;

// ── RNG ────────────────────────────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

// ── Maze generation ────────────────────────────────────────────────────

/// Depth-first carve over a sealed grid. Knocks both sides of every opened
/// wall, so every cell ends up reachable and border walls stay intact.
fn carve_maze(state: &mut SuppressionState) {
    let mut visited = vec![false; COLS * ROWS];
    let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
    visited[0] = true;

    while let Some(&(x, y)) = stack.last() {
        let mut candidates: Vec<(Dir, usize, usize)> = Vec::new();
        for dir in ALL_DIRS {
            let (dx, dy) = dir.delta();
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || nx >= COLS as i32 || ny < 0 || ny >= ROWS as i32 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if !visited[ny * COLS + nx] {
                candidates.push((dir, nx, ny));
            }
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng_range(&mut state.rng_seed, candidates.len() as u32) as usize;
        let (dir, nx, ny) = candidates[pick];
        state.maze.cell_mut(x, y).knock(dir);
        state.maze.cell_mut(nx, ny).knock(dir.opposite());
        visited[ny * COLS + nx] = true;
        stack.push((nx, ny));
    }
}

pub fn new_state(seed: u64) -> SuppressionState {
    let mut state = SuppressionState {
        maze: Maze::sealed(),
        player: (0, 0),
        goal: (COLS - 1, ROWS - 1),
        reveal_ticks: 0,
        rng_seed: seed,
    };
    carve_maze(&mut state);
    state
}

/// Fresh maze after the goal is reached; the player walks again from the
/// top-left corner.
pub fn regenerate(state: &mut SuppressionState) {
    state.maze = Maze::sealed();
    carve_maze(state);
    state.player = (0, 0);
}

// ── Movement ───────────────────────────────────────────────────────────

/// One step. A standing wall makes the move a no-op; reaching the goal pays
/// the bonus and regenerates the maze. Returns whether the player moved.
pub fn try_move(state: &mut SuppressionState, run: &mut LevelRun, dir: Dir) -> bool {
    if run.ended() {
        return false;
    }
    let (x, y) = state.player;
    if state.maze.cell(x, y).wall(dir) {
        return false;
    }
    let (dx, dy) = dir.delta();
    state.player = ((x as i32 + dx) as usize, (y as i32 + dy) as usize);
    run.add_score(STEP_SCORE);

    if state.player == state.goal {
        run.add_score(GOAL_SCORE);
        regenerate(state);
    }
    true
}

// ── Breath ─────────────────────────────────────────────────────────────

/// A breath lights the walls for [`BREATH_TICKS`].
pub fn breathe(state: &mut SuppressionState, run: &LevelRun) {
    if run.ended() {
        return;
    }
    state.reveal_ticks = BREATH_TICKS;
}

pub fn tick(state: &mut SuppressionState, delta_ticks: u32) {
    state.reveal_ticks = state.reveal_ticks.saturating_sub(delta_ticks);
}
