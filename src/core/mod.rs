//! Core types: player identity, resource ledgers, deterministic RNG.

pub mod player;
pub mod rng;

pub use player::{ChipKind, Ledger, PlayerId};
pub use rng::{GameRng, GameRngState};
