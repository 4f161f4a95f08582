//! Cards, the two-deck pack, and the draw pile.
//!
//! - `Card`: (rank, suit) value with the `RANK|SUIT` text form
//! - `JackKind`: one-eyed (anti-wild) or two-eyed (wild)
//! - `Hand`: ordered multiset of cards held by one player
//! - `DrawPile`: shuffled pack plus a deal cursor

pub mod card;
pub mod pack;

pub use card::{try_parse_cards, Card, JackKind, Rank, Suit};
pub use pack::{full_pack, DrawPile, Hand, DECKS_IN_PACK, PACK_SIZE};
