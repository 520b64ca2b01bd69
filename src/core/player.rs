//! Player identity and the per-player resource ledger.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Turn order is fixed at session creation;
//! the first player is `PlayerId(0)`.
//!
//! ## Ledger
//!
//! One `Ledger` per player: chip counters, quality points, board position,
//! and the hand in draw order. Ledgers are created once at game start and
//! live for the whole session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::RoomId;
use crate::cards::CardId;

/// Player identifier.
///
/// Player indices are 0-based and double as turn order: the first player
/// is `PlayerId(0)` and acts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One of the three chip resources a player accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChipKind {
    Learning,
    Craft,
    Integrity,
}

impl ChipKind {
    /// All chip kinds, in display order.
    pub const ALL: [ChipKind; 3] = [ChipKind::Learning, ChipKind::Craft, ChipKind::Integrity];
}

impl std::fmt::Display for ChipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ChipKind::Learning => "learning",
            ChipKind::Craft => "craft",
            ChipKind::Integrity => "integrity",
        };
        f.write_str(label)
    }
}

/// Per-player resource ledger.
///
/// Chip counts cannot go below zero by construction. Quality points may go
/// negative transiently while a card effect resolves;
/// `GameSession::apply_qp_step` clamps them back to zero afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Display name ("Human Player", "AI 1", ...).
    pub name: String,

    /// Current board position.
    pub position: RoomId,

    learning_chips: u32,
    craft_chips: u32,
    integrity_chips: u32,
    quality_points: i64,

    /// Hand contents in draw order.
    hand: SmallVec<[CardId; 8]>,
}

impl Ledger {
    /// Create a fresh ledger with no chips, no points, and an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, position: RoomId) -> Self {
        Self {
            name: name.into(),
            position,
            learning_chips: 0,
            craft_chips: 0,
            integrity_chips: 0,
            quality_points: 0,
            hand: SmallVec::new(),
        }
    }

    // === Chips ===

    /// Get a chip count.
    #[must_use]
    pub fn chips(&self, kind: ChipKind) -> u32 {
        match kind {
            ChipKind::Learning => self.learning_chips,
            ChipKind::Craft => self.craft_chips,
            ChipKind::Integrity => self.integrity_chips,
        }
    }

    /// Add one chip of the given kind.
    pub fn add_chip(&mut self, kind: ChipKind) {
        match kind {
            ChipKind::Learning => self.learning_chips += 1,
            ChipKind::Craft => self.craft_chips += 1,
            ChipKind::Integrity => self.integrity_chips += 1,
        }
    }

    /// Set a chip count directly (skill-set assignment at game start).
    pub fn set_chips(&mut self, kind: ChipKind, count: u32) {
        match kind {
            ChipKind::Learning => self.learning_chips = count,
            ChipKind::Craft => self.craft_chips = count,
            ChipKind::Integrity => self.integrity_chips = count,
        }
    }

    // === Quality points ===

    /// Current quality points.
    #[must_use]
    pub fn quality_points(&self) -> i64 {
        self.quality_points
    }

    /// Add (or with a negative delta, subtract) quality points.
    ///
    /// No clamping happens here; the engine's QP step owns that rule.
    pub fn modify_quality_points(&mut self, delta: i64) {
        self.quality_points += delta;
    }

    /// Set quality points directly.
    pub fn set_quality_points(&mut self, value: i64) {
        self.quality_points = value;
    }

    // === Hand ===

    /// Hand contents in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Append a drawn card to the hand.
    pub fn push_card(&mut self, card: CardId) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of range; callers validate against
    /// `hand_len` first.
    pub fn take_card(&mut self, index: usize) -> CardId {
        self.hand.remove(index)
    }

    /// Take the whole hand, leaving it empty.
    ///
    /// Used by the year transition, which folds every hand back into the
    /// draw pile.
    pub fn clear_hand(&mut self) -> SmallVec<[CardId; 8]> {
        std::mem::take(&mut self.hand)
    }
}
