//! Minimax search with alpha-beta pruning
//!
//! The search walks the full game tree from a given state: X maximizes
//! the position value and O minimizes it, with wins scored +1 for X and
//! -1 for O and ties scored 0. Alpha-beta pruning skips branches that
//! cannot influence the result, so every value returned here equals the
//! plain minimax value of the position.

use crate::board::{BoardState, Player};

/// Game-theoretic value of `state` with `player` to move, assuming both
/// sides play perfectly.
///
/// The recursion starts with the widest possible window; the sentinel
/// bounds sit strictly outside the attainable values (-1, 0 and +1) and
/// are never negated.
///
/// # Examples
///
/// ```
/// use oxo::{BoardState, Player, minimax};
///
/// // Perfect play from the empty board is a tie.
/// let board = BoardState::new(3).unwrap();
/// assert_eq!(minimax(&board, Player::X), 0);
/// ```
pub fn minimax(state: &BoardState, player: Player) -> i32 {
    alpha_beta(state, i32::MIN, i32::MAX, player)
}

/// Two-branch minimax recursion over the successor states.
///
/// `alpha` carries the best value the maximizer has locked in above this
/// node and `beta` the same for the minimizer. Once `beta <= alpha` the
/// remaining successors cannot affect the value at the root, so the loop
/// stops early.
fn alpha_beta(state: &BoardState, mut alpha: i32, mut beta: i32, player: Player) -> i32 {
    if let Some(value) = state.outcome().value() {
        return value;
    }

    match player {
        Player::X => {
            for successor in state.successors(Player::X) {
                alpha = alpha.max(alpha_beta(&successor, alpha, beta, Player::O));
                if beta <= alpha {
                    break;
                }
            }
            alpha
        }
        Player::O => {
            for successor in state.successors(Player::O) {
                beta = beta.min(alpha_beta(&successor, alpha, beta, Player::X));
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }
}

/// Pick the best successor state for `player`.
///
/// Every legal move is scored with a fresh full-window search and the
/// first one achieving the extremal value for the mover wins, so ties
/// between equally good moves always resolve to the earliest cell in
/// row-major order. Repeated calls on the same state return the same
/// move.
///
/// # Errors
///
/// Returns [`crate::Error::NoValidMoves`] if the state has no
/// successors, which happens once the board is full or decided.
#[must_use = "select_move returns the chosen board state; the original is unchanged"]
pub fn select_move(state: &BoardState, player: Player) -> Result<BoardState, crate::Error> {
    let mut best: Option<(BoardState, i32)> = None;
    for successor in state.successors(player) {
        let value = minimax(&successor, player.opponent());
        let improves = match &best {
            None => true,
            Some((_, best_value)) => match player {
                Player::X => value > *best_value,
                Player::O => value < *best_value,
            },
        };
        if improves {
            best = Some((successor, value));
        }
    }
    best.map(|(chosen, _)| chosen)
        .ok_or(crate::Error::NoValidMoves)
}
