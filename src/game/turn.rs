//! The turn manager.
//!
//! `play_turn` applies one move to an active game and returns the next
//! snapshot. Order of operations:
//!
//! 1. Access checks: game active, right player, card in hand
//! 2. Board validation (see [`crate::rules::apply_move`])
//! 3. Spend the card, prune dead cards, refill from the draw pile
//! 4. Count the hand, then check for a draw, then for a win
//!
//! A rejected turn leaves nothing changed: the input snapshot is never
//! touched and no partial snapshot escapes.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::snapshot::{GameSnapshot, GameStatus, TurnRecord};
use crate::board::{BoardState, Cell, BOARD_SIZE};
use crate::cards::{Card, Hand};
use crate::core::{EngineConfig, JackPruning, Player};
use crate::error::TurnError;
use crate::rules::{apply_move, detect_win, is_playable, Move};

/// Play `card` at (`row`, `col`) for `player`.
pub fn play_turn(
    snapshot: &GameSnapshot,
    player: Player,
    card: Card,
    row: usize,
    col: usize,
    config: &EngineConfig,
) -> Result<GameSnapshot, TurnError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(TurnError::OffBoard { row, col });
    }
    play_move(snapshot, player, Move::new(card, Cell::new(row, col)), config)
}

/// Play an already-built [`Move`] for `player`.
pub fn play_move(
    snapshot: &GameSnapshot,
    player: Player,
    mv: Move,
    config: &EngineConfig,
) -> Result<GameSnapshot, TurnError> {
    if snapshot.status != GameStatus::Active {
        return Err(TurnError::GameNotActive { status: snapshot.status });
    }
    if player != snapshot.next_player {
        return Err(TurnError::NotPlayersTurn {
            expected: snapshot.next_player,
            actual: player,
        });
    }
    let Some(position) = snapshot.hands[player].iter().position(|&c| c == mv.card) else {
        return Err(TurnError::CardNotInHand { card: mv.card });
    };

    let board = apply_move(mv.card, mv.cell, &snapshot.board, player)?;

    let mut next = snapshot.clone();
    next.board = board;

    let hand = &mut next.hands[player];
    hand.remove(position);
    let discarded = prune_dead_cards(hand, &next.board, player, config.jack_pruning);
    let dealt = next.draw_pile.refill(hand, config.hand_size);
    let hand_empty = hand.is_empty();

    next.hands_played += 1;

    debug!(
        player = player.number(),
        card = %mv.card,
        cell = %mv.cell,
        pruned = discarded.len(),
        dealt,
        hands_played = next.hands_played,
        "Turn applied"
    );

    next.history.push_back(TurnRecord {
        hand_number: next.hands_played,
        player,
        card: mv.card,
        cell: mv.cell,
        discarded,
    });

    if hand_empty || next.hands_played > config.max_hands_played {
        info!(
            hands_played = next.hands_played,
            hand_empty,
            remaining = next.draw_pile.remaining(),
            "Game ended in a draw"
        );
        next.end(None, None);
    } else if let Some(sequence) = detect_win(&next.board) {
        info!(
            winner = player.number(),
            kind = ?sequence.kind,
            hands_played = next.hands_played,
            "Game won"
        );
        next.end(Some(player), Some(sequence));
    } else {
        next.next_player = player.opponent();
    }

    Ok(next)
}

/// Remove every card with no legal cell on `board`, returning them in hand
/// order.
///
/// Under [`JackPruning::ExemptJacks`] Jacks always stay.
pub fn prune_dead_cards(
    hand: &mut Hand,
    board: &BoardState,
    player: Player,
    policy: JackPruning,
) -> SmallVec<[Card; 2]> {
    let mut discarded = SmallVec::new();
    hand.retain(|card| {
        let card = *card;
        let keep = (policy == JackPruning::ExemptJacks && card.is_jack()) || is_playable(card, board, player);
        if !keep {
            discarded.push(card);
        }
        keep
    });
    discarded
}
