//! Card system: definitions, the era-aware registry, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions; piles and hands store these
//! - `Era`: Academic year a card belongs to (Freshman, Sophomore, ...)
//! - `Effect`: What a card does when played, as data
//! - `CardDefinition`: Immutable card data
//! - `CardRegistry`: Definition lookup and per-era enumeration
//!
//! The `catalog` module holds the standard card set as a static table plus
//! the per-era deny-lists used during year transitions.

pub mod catalog;
pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, Effect, Era};
pub use registry::CardRegistry;
