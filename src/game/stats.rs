//! Statistics over ended games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::snapshot::GameSnapshot;
use crate::core::Player;
use crate::rules::{SequenceKind, WinningSequence};

/// Outcome of one won game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub hands_played: u32,
    pub winner: Player,
    pub winning_sequence: Option<WinningSequence>,
}

/// Summaries of up to `limit` won games, in the order given.
///
/// Drawn, cancelled and unfinished games are skipped.
pub fn summarize_won_games<'a, I>(games: I, limit: usize) -> Vec<GameSummary>
where
    I: IntoIterator<Item = &'a GameSnapshot>,
{
    games
        .into_iter()
        .filter(|game| game.is_ended())
        .filter_map(|game| {
            game.winner.map(|winner| GameSummary {
                hands_played: game.hands_played,
                winner,
                winning_sequence: game.winning_sequence.clone(),
            })
        })
        .take(limit)
        .collect()
}

/// Wins per sequence kind, plus how many used a corner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceTally {
    pub by_kind: FxHashMap<SequenceKind, usize>,
    pub corner_wins: usize,
}

impl SequenceTally {
    #[must_use]
    pub fn count(&self, kind: SequenceKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Check whether every kind of sequence has been seen at least once.
    #[must_use]
    pub fn covers_all_kinds(&self) -> bool {
        SequenceKind::ALL.iter().all(|&kind| self.count(kind) > 0)
    }
}

/// Count the winning sequences in `summaries`.
#[must_use]
pub fn tally_sequence_kinds(summaries: &[GameSummary]) -> SequenceTally {
    let mut tally = SequenceTally::default();
    for sequence in summaries.iter().filter_map(|s| s.winning_sequence.as_ref()) {
        *tally.by_kind.entry(sequence.kind).or_default() += 1;
        if sequence.uses_corner() {
            tally.corner_wins += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Cell};
    use crate::core::{EngineConfig, GameRng};
    use crate::game::{cancel_game, create_game};
    use crate::rules::detect_win;

    fn won_game(cells: &[Cell], winner: Player, hands_played: u32) -> GameSnapshot {
        let mut board = BoardState::new();
        for &cell in cells {
            board.set(cell, winner.mark());
        }
        let mut game = create_game(&EngineConfig::default(), &mut GameRng::new(1));
        game.board = board;
        game.hands_played = hands_played;
        let sequence = detect_win(&game.board);
        game.end(Some(winner), sequence);
        game
    }

    #[test]
    fn test_summaries_skip_unwon_games() {
        let fresh = create_game(&EngineConfig::default(), &mut GameRng::new(2));
        let drawn = cancel_game(&fresh);
        let row = won_game(&(1..=5).map(|c| Cell::new(3, c)).collect::<Vec<_>>(), Player::One, 40);
        let col = won_game(&(1..=5).map(|r| Cell::new(r, 3)).collect::<Vec<_>>(), Player::Two, 52);

        let games = [fresh, row, drawn, col];
        let summaries = summarize_won_games(&games, 100);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].winner, Player::One);
        assert_eq!(summaries[0].hands_played, 40);
        assert_eq!(summaries[1].winner, Player::Two);

        assert_eq!(summarize_won_games(&games, 1).len(), 1);
    }

    #[test]
    fn test_tally_counts_kinds_and_corners() {
        let row = won_game(&(1..=5).map(|c| Cell::new(3, c)).collect::<Vec<_>>(), Player::One, 40);
        let corner_row = won_game(&(1..=4).map(|c| Cell::new(0, c)).collect::<Vec<_>>(), Player::One, 30);
        let diag = won_game(&(1..=5).map(|i| Cell::new(i, i)).collect::<Vec<_>>(), Player::Two, 60);

        let summaries = summarize_won_games(&[row, corner_row, diag], 100);
        let tally = tally_sequence_kinds(&summaries);
        assert_eq!(tally.count(SequenceKind::Row), 2);
        assert_eq!(tally.count(SequenceKind::DiagDownRight), 1);
        assert_eq!(tally.count(SequenceKind::Col), 0);
        assert_eq!(tally.corner_wins, 1);
        assert!(!tally.covers_all_kinds());
    }
}
