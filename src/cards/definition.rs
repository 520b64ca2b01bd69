//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name, the
//! academic year (era) it belongs to, and the effect it applies when played.
//! Cards are immutable once registered; the deck, discard pile, and hands
//! track them by `CardId`.

use serde::{Deserialize, Serialize};

use crate::board::RoomId;
use crate::core::ChipKind;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Academic year a card belongs to.
///
/// Year 1 is Freshman, year 2 Sophomore, and so on. The active era decides
/// which slice of the catalog is in play; advancing a year retires part of
/// the old set and introduces the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Era(pub u8);

impl Era {
    pub const FRESHMAN: Era = Era(1);
    pub const SOPHOMORE: Era = Era(2);

    /// Create a new era.
    #[must_use]
    pub const fn new(year: u8) -> Self {
        Self(year)
    }

    /// Get the raw year number (1-based).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The era that follows this one.
    #[must_use]
    pub const fn next(self) -> Era {
        Era(self.0 + 1)
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Freshman",
            2 => "Sophomore",
            3 => "Junior",
            4 => "Senior",
            _ => "Graduate",
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An atomic card effect, resolved by the engine against the acting player.
///
/// The engine interprets these when a card is played; card content lives
/// entirely in the catalog tables, so adding a card never touches engine
/// code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Add (or with a negative delta, subtract) quality points.
    ModifyQp { delta: i64 },

    /// Grant one chip of the given kind.
    GrantChip { kind: ChipKind },

    /// Move the acting player to a room.
    MoveTo { room: RoomId },

    /// Apply several effects in sequence.
    Batch(Vec<Effect>),
}

impl Default for Effect {
    /// An empty batch, i.e. a card with no effect.
    fn default() -> Self {
        Effect::Batch(Vec::new())
    }
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name. Year-transition pruning matches on this.
    pub name: String,

    /// Academic year this card belongs to.
    pub era: Era,

    /// Effect applied when the card is played.
    pub effect: Effect,
}

impl CardDefinition {
    /// Create a new card definition with no effect.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, era: Era) -> Self {
        Self {
            id,
            name: name.into(),
            era,
            effect: Effect::default(),
        }
    }

    /// Set the effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}
