//! The built-in bot strategies, versions 1 through 7.

use tracing::debug;

use super::strategy::{moves_near, nearest_corner, BotContext, BotStrategy};
use crate::board::BOARD_SIZE;
use crate::core::GameRng;
use crate::rules::{apply_move, detect_win, longest_run, Move};

// =============================================================================
// v1 / v2 / v3
// =============================================================================

/// v1: any legal move, uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl RandomBot {
    pub const NAME: &'static str = "random";
}

impl BotStrategy for RandomBot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select(&self, ctx: &BotContext<'_>, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&ctx.moves(false)).copied()
    }
}

/// v2: the move closest to a corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornerBot;

impl CornerBot {
    pub const NAME: &'static str = "nearest-corner";
}

impl BotStrategy for CornerBot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select(&self, ctx: &BotContext<'_>, _rng: &mut GameRng) -> Option<Move> {
        nearest_corner(&ctx.moves(false))
    }
}

/// v3: like v2, but Jacks are held back early in the game.
///
/// Jacks are only considered once `jack_reserve_hands` hands have been
/// played, or when nothing else is legal.
#[derive(Clone, Copy, Debug, Default)]
pub struct JackReserveBot;

impl JackReserveBot {
    pub const NAME: &'static str = "jack-reserve";
}

impl BotStrategy for JackReserveBot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select(&self, ctx: &BotContext<'_>, _rng: &mut GameRng) -> Option<Move> {
        let reserve = ctx.hands_played < ctx.config.jack_reserve_hands;
        let mut moves = ctx.moves(reserve);
        if moves.is_empty() && reserve {
            debug!(hands_played = ctx.hands_played, "Only Jacks are playable; spending one");
            moves = ctx.moves(false);
        }
        nearest_corner(&moves)
    }
}

// =============================================================================
// v4 / v5 / v6
// =============================================================================

/// v4-v6: grow from pieces already down.
///
/// Tries radii 1..=`max_radius` in order and picks uniformly among the
/// moves within the first radius that has any. Falls back to v2.
#[derive(Clone, Copy, Debug)]
pub struct ProximityBot {
    pub max_radius: usize,
}

impl ProximityBot {
    /// v4
    pub const ADJACENT: Self = Self { max_radius: 1 };
    /// v5
    pub const NEAR: Self = Self { max_radius: 2 };
    /// v6
    pub const ANYWHERE: Self = Self { max_radius: BOARD_SIZE - 1 };

    pub const ADJACENT_NAME: &'static str = "adjacent";
    pub const NEAR_NAME: &'static str = "near";
    pub const ANYWHERE_NAME: &'static str = "proximity";
}

impl BotStrategy for ProximityBot {
    fn name(&self) -> &'static str {
        match self.max_radius {
            1 => Self::ADJACENT_NAME,
            2 => Self::NEAR_NAME,
            _ => Self::ANYWHERE_NAME,
        }
    }

    fn select(&self, ctx: &BotContext<'_>, rng: &mut GameRng) -> Option<Move> {
        let moves = ctx.moves(false);
        let owned = ctx.owned_cells();
        if !owned.is_empty() {
            for radius in 1..=self.max_radius {
                let near = moves_near(&moves, &owned, radius);
                if let Some(&mv) = rng.choose(&near) {
                    return Some(mv);
                }
            }
        }
        debug!(strategy = self.name(), "No move near own pieces; using nearest corner");
        nearest_corner(&moves)
    }
}

// =============================================================================
// v7
// =============================================================================

/// v7: one-move lookahead around its own pieces.
///
/// Among moves adjacent to an owned cell: take an immediate win if there
/// is one, else the move that most lengthens the bot's longest run, else
/// a random adjacent move. With no adjacent move, plays as v6.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadBot;

impl LookaheadBot {
    pub const NAME: &'static str = "lookahead";
}

impl BotStrategy for LookaheadBot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select(&self, ctx: &BotContext<'_>, rng: &mut GameRng) -> Option<Move> {
        let candidates = moves_near(&ctx.moves(false), &ctx.owned_cells(), 1);
        if candidates.is_empty() {
            return ProximityBot::ANYWHERE.select(ctx, rng);
        }

        let mark = ctx.player.mark();
        let before = longest_run(ctx.board, mark);
        let mut best: Option<(usize, Move)> = None;

        for &mv in &candidates {
            let Ok(after) = apply_move(mv.card, mv.cell, ctx.board, ctx.player) else {
                continue;
            };
            if detect_win(&after).is_some_and(|seq| seq.owner(&after) == Some(ctx.player)) {
                debug!(mv = %mv, "Winning move found");
                return Some(mv);
            }
            let gain = longest_run(&after, mark).saturating_sub(before);
            if gain > 0 && best.map_or(true, |(top, _)| gain > top) {
                best = Some((gain, mv));
            }
        }

        match best {
            Some((_, mv)) => Some(mv),
            None => rng.choose(&candidates).copied(),
        }
    }
}
