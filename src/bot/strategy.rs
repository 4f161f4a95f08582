//! The bot strategy trait and the helpers strategies share.

use crate::board::{BoardState, Cell};
use crate::cards::Card;
use crate::core::{EngineConfig, GameRng, Player};
use crate::game::GameSnapshot;
use crate::rules::{enumerate_moves, Move};

/// What a bot sees when choosing a move: the board, its own hand, and
/// how far the game has gone.
#[derive(Clone, Copy, Debug)]
pub struct BotContext<'a> {
    pub board: &'a BoardState,
    pub hand: &'a [Card],
    pub player: Player,
    pub hands_played: u32,
    pub config: &'a EngineConfig,
}

impl<'a> BotContext<'a> {
    /// Context for whoever is to move in `snapshot`.
    #[must_use]
    pub fn for_next_player(snapshot: &'a GameSnapshot, config: &'a EngineConfig) -> Self {
        Self {
            board: &snapshot.board,
            hand: snapshot.hand(snapshot.next_player),
            player: snapshot.next_player,
            hands_played: snapshot.hands_played,
            config,
        }
    }

    /// Every legal move from this hand.
    #[must_use]
    pub fn moves(&self, ignore_jacks: bool) -> Vec<Move> {
        enumerate_moves(self.hand, self.board, self.player, ignore_jacks)
    }

    /// Cells this bot currently owns.
    #[must_use]
    pub fn owned_cells(&self) -> Vec<Cell> {
        self.board.cells_with(self.player.mark()).collect()
    }
}

/// A move-selection strategy.
///
/// Implementations must only return moves from the context's enumerated
/// legal moves, and return `None` only when there are none. All
/// randomness comes from `rng`.
pub trait BotStrategy: Send + Sync {
    /// Stable identifier used in logs and the registry.
    fn name(&self) -> &'static str;

    /// Choose a move, or `None` when nothing is legal.
    fn select(&self, ctx: &BotContext<'_>, rng: &mut GameRng) -> Option<Move>;
}

/// The move whose cell is closest to a corner. Ties go to the earliest.
#[must_use]
pub fn nearest_corner(moves: &[Move]) -> Option<Move> {
    moves.iter().copied().min_by_key(|mv| mv.cell.corner_distance_squared())
}

/// Moves whose cell lies within Chebyshev `radius` of any of `owned`.
#[must_use]
pub fn moves_near(moves: &[Move], owned: &[Cell], radius: usize) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|mv| owned.iter().any(|&cell| cell.chebyshev(mv.cell) <= radius))
        .collect()
}
