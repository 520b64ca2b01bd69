//! # campus-quest
//!
//! Game-state and deck-lifecycle engine for a university-themed board game:
//! three players (one human, two automated) race to 100 quality points
//! across academic years, drawing course cards from a shared deck.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every source of randomness flows through one
//!    seeded, session-scoped RNG. The same seed reproduces the same game.
//!
//! 2. **Explicit catalog**: cards are statically registered in a table and
//!    enumerated by era. No runtime type discovery.
//!
//! 3. **The driver owns the turn loop**: the engine exposes synchronous,
//!    atomic operations (draw, play, QP step, year check, win scan) and a
//!    surrounding UI or automation layer sequences them. No operation
//!    suspends mid-step.
//!
//! ## Modules
//!
//! - `core`: player identity, resource ledgers, deterministic RNG
//! - `cards`: card definitions, the era-aware registry, the catalog
//! - `deck`: draw pile / discard pile lifecycle
//! - `board`: static room layout (consumed by movement logic elsewhere)
//! - `engine`: session state, thresholds, year transitions, win detection

pub mod board;
pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{ChipKind, GameRng, GameRngState, Ledger, PlayerId};

pub use crate::cards::{catalog, CardDefinition, CardId, CardRegistry, Effect, Era};

pub use crate::deck::Deck;

pub use crate::board::{RoomId, ROOM_COUNT, START_ROOM};

pub use crate::engine::{
    BalancedChooser, ChipChooser, GameSession, SessionBuilder, SessionSnapshot, HAND_SIZE,
    QP_THRESHOLD_START, QP_THRESHOLD_STEP, QP_TO_WIN, YEAR_ADVANCE_QP,
};
