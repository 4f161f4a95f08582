//! The 104-card pack and the draw pile dealt from it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, HAND_SIZE};
use crate::error::ParseError;

/// An ordered multiset of cards held by one player.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// Number of standard decks combined into the pack.
pub const DECKS_IN_PACK: usize = 2;

/// Cards in the combined pack.
pub const PACK_SIZE: usize = DECKS_IN_PACK * 52;

/// Build the unshuffled pack: deck, then rank, then suit.
#[must_use]
pub fn full_pack() -> Vec<Card> {
    let mut cards = Vec::with_capacity(PACK_SIZE);
    for _ in 0..DECKS_IN_PACK {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

/// The shuffled pack plus a cursor counting how many cards were dealt.
///
/// Cards before the cursor are in hands, on the board or discarded; the
/// draw pile never forgets them so the persisted form stays a plain list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DrawPileParts")]
pub struct DrawPile {
    cards: Vec<Card>,
    cursor: usize,
}

/// Persisted form of a `DrawPile`, checked before it becomes one.
#[derive(Deserialize)]
struct DrawPileParts {
    cards: Vec<Card>,
    cursor: usize,
}

impl TryFrom<DrawPileParts> for DrawPile {
    type Error = ParseError;

    fn try_from(parts: DrawPileParts) -> Result<Self, Self::Error> {
        if parts.cursor > parts.cards.len() {
            return Err(ParseError::DrawCursor {
                cursor: parts.cursor,
                len: parts.cards.len(),
            });
        }
        Ok(Self {
            cards: parts.cards,
            cursor: parts.cursor,
        })
    }
}

impl DrawPile {
    /// Shuffle a fresh pack.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = full_pack();
        rng.shuffle(&mut cards);
        Self { cards, cursor: 0 }
    }

    /// Rebuild a pile from its persisted parts. The cursor is clamped to
    /// the pile length.
    #[must_use]
    pub fn from_parts(cards: Vec<Card>, cursor: usize) -> Self {
        let cursor = cursor.min(cards.len());
        Self { cards, cursor }
    }

    /// All cards in pile order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards dealt so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cards still available to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Check whether every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Deal the next card, advancing the cursor.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Deal into `hand` until it holds `target` cards or the pile runs out.
    ///
    /// Returns how many cards were dealt.
    pub fn refill(&mut self, hand: &mut Hand, target: usize) -> usize {
        let wanted = target.saturating_sub(hand.len()).min(self.remaining());
        hand.extend((0..wanted).filter_map(|_| self.deal()));
        wanted
    }
}
