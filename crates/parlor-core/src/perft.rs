//! Leaf-node counting over the destination generator.

use crate::board::Board;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::make_move::play_unchecked;
use crate::movegen::legal_destinations;

/// Count the leaf nodes `depth` plies below `board` with `side` to move.
///
/// Depth 0 returns 1. Nodes are counted under `config`, so pseudo mode
/// includes self-checking moves.
pub fn perft(board: &Board, side: Color, depth: usize, config: &RulesConfig) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for piece in board.live_of(side) {
        let targets = legal_destinations(board, piece, config);
        if depth == 1 {
            nodes += targets.len() as u64;
            continue;
        }
        for to in targets {
            let mut child = board.clone();
            if play_unchecked(&mut child, piece.id(), to).is_some() {
                nodes += perft(&child, side.flip(), depth - 1, config);
            }
        }
    }
    nodes
}
