//! One generation of the Game of Life on a toroidal grid.
//!
//! [`step`] is the whole engine: count the 8 wrap-around neighbors of every
//! cell, then apply the survival/birth rule. It is pure and allocates a fresh
//! board, so callers can fire it from concurrent requests without
//! coordination.

use crate::board::{Board, CellState};

/// Compute the next generation. The result has the same dimensions as the
/// input and the input is never modified.
///
/// Rule per cell: a live cell survives with 2 or 3 live neighbors, a dead
/// cell is born with exactly 3, everything else is dead. Neighbors wrap at
/// every edge, so on a 1x1 board all 8 neighbor addresses resolve to the cell
/// itself.
///
/// A board with zero height or zero width has no neighbors to count; it steps
/// to an identical empty board.
pub fn step(board: &Board) -> Board {
    let (height, width) = board.dimensions();
    if height == 0 || width == 0 {
        return board.clone();
    }

    let states = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| next_state(board.states[row][col], live_neighbors(board, row, col)))
                .collect()
        })
        .collect();
    Board { states }
}

fn next_state(current: CellState, live_neighbors: usize) -> CellState {
    match current {
        CellState::Alive if live_neighbors == 2 || live_neighbors == 3 => CellState::Alive,
        CellState::Dead if live_neighbors == 3 => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Count live cells among the 8 toroidal neighbors of `(row, col)`.
fn live_neighbors(board: &Board, row: usize, col: usize) -> usize {
    let (height, width) = board.dimensions();
    let mut count = 0;
    // Offsets of -1, 0, +1 expressed as dim-1, dim, dim+1 so the sum wraps
    // with a plain modulo instead of underflowing. The 8 offset pairs stay
    // distinct even on 1-wide boards, where they all land on the same cell.
    for dr in [height - 1, height, height + 1] {
        for dc in [width - 1, width, width + 1] {
            if dr == height && dc == width {
                continue;
            }
            if board.states[(row + dr) % height][(col + dc) % width] == CellState::Alive {
                count += 1;
            }
        }
    }
    count
}
