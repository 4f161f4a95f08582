//! Error types.
//!
//! Every error here is a definitive rejection of the input, never a
//! transient condition: callers map them to user-facing messages and do
//! not retry.

use thiserror::Error;

use crate::board::Cell;
use crate::cards::Card;
use crate::core::Player;
use crate::game::GameStatus;

/// Why a (card, cell) action is illegal on a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("corner {cell} cannot be played")]
    CornerNotPlayable { cell: Cell },
    #[error("{card} cannot be played at {cell}; it belongs at {} or {}", .options[0], .options[1])]
    CardCellMismatch {
        card: Card,
        cell: Cell,
        options: [Cell; 2],
    },
    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: Cell },
    #[error("no opponent piece at {cell} for {card} to remove")]
    NoOpponentPieceHere { card: Card, cell: Cell },
    #[error("{card} is not printed on the board")]
    NotOnLayout { card: Card },
}

/// Why a turn was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("game is not active (status: {status})")]
    GameNotActive { status: GameStatus },
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: Player, actual: Player },
    #[error("{card} is not in the player's hand")]
    CardNotInHand { card: Card },
    #[error("({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },
    #[error(transparent)]
    Invalid(#[from] InvalidMove),
}

/// Why a bot could not produce a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    #[error("no legal move for {player}")]
    NoLegalMove { player: Player },
    #[error("unknown bot strategy version {0}")]
    UnknownStrategy(u8),
    #[error("game is not active (status: {status})")]
    GameNotActive { status: GameStatus },
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: Player, actual: Player },
}

/// Why a lobby transition was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LobbyError {
    #[error("this game already has 2 players")]
    GameFull,
    #[error("this game has ended")]
    GameEnded,
}

/// Malformed wire-form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid card: {0:?}")]
    Card(String),
    #[error("invalid mark: {0:?}")]
    Mark(String),
    #[error("invalid player number: {0}")]
    Player(u8),
    #[error("({row}, {col}) is off the board")]
    Cell { row: usize, col: usize },
    #[error("board must have {expected} cells, got {actual}")]
    BoardLength { expected: usize, actual: usize },
    #[error("corner {cell} cannot be owned")]
    OwnedCorner { cell: Cell },
    #[error("draw pile cursor {cursor} is past its {len} cards")]
    DrawCursor { cursor: usize, len: usize },
    #[error("invalid game code: {0:?}")]
    GameCode(String),
}

/// Binary snapshot encoding failures.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("snapshot encoding failed: {0}")]
    Bincode(#[from] bincode::Error),
}
