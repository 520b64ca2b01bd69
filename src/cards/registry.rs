//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition for a game and answers
//! the question the year-transition machinery keeps asking: which cards
//! belong to a given era. It replaces runtime type discovery with an
//! explicit, statically-registered table.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, Era};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use campus_quest::cards::{CardDefinition, CardId, CardRegistry, Effect, Era};
///
/// let mut registry = CardRegistry::new();
///
/// let card = CardDefinition::new(CardId::new(1), "Math 122", Era::FRESHMAN)
///     .with_effect(Effect::ModifyQp { delta: 5 });
/// registry.register(card);
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Math 122");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists; duplicate
    /// registration is a configuration defect.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use for IDs that came out of a pile or hand; those always originate
    /// from this registry.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in registry")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// All cards belonging to an era.
    ///
    /// Iteration order is unspecified; callers that need a reproducible
    /// sequence sort the result.
    pub fn cards_of_era(&self, era: Era) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.era == era)
    }

    /// The latest era any registered card belongs to.
    ///
    /// The year transition refuses to advance past this.
    #[must_use]
    pub fn max_era(&self) -> Era {
        self.cards
            .values()
            .map(|c| c.era)
            .max()
            .unwrap_or(Era::FRESHMAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Effect;

    fn card(id: u32, name: &str, era: Era) -> CardDefinition {
        CardDefinition::new(CardId::new(id), name, era)
            .with_effect(Effect::ModifyQp { delta: 1 })
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "CECS 105", Era::FRESHMAN));

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "CECS 105");

        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "CECS 105", Era::FRESHMAN));
        registry.register(card(1, "CECS 100", Era::FRESHMAN));
    }

    #[test]
    fn test_cards_of_era() {
        let mut registry = CardRegistry::new();
        registry.register(card(1, "CECS 105", Era::FRESHMAN));
        registry.register(card(2, "CECS 274", Era::SOPHOMORE));
        registry.register(card(3, "Math 122", Era::FRESHMAN));

        let freshman: Vec<_> = registry.cards_of_era(Era::FRESHMAN).collect();
        assert_eq!(freshman.len(), 2);

        let sophomore: Vec<_> = registry.cards_of_era(Era::SOPHOMORE).collect();
        assert_eq!(sophomore.len(), 1);
        assert_eq!(sophomore[0].name, "CECS 274");
    }

    #[test]
    fn test_max_era() {
        let mut registry = CardRegistry::new();
        assert_eq!(registry.max_era(), Era::FRESHMAN);

        registry.register(card(1, "CECS 105", Era::FRESHMAN));
        assert_eq!(registry.max_era(), Era::FRESHMAN);

        registry.register(card(2, "CECS 274", Era::SOPHOMORE));
        assert_eq!(registry.max_era(), Era::SOPHOMORE);
    }

    #[test]
    fn test_get_unchecked() {
        let mut registry = CardRegistry::new();
        registry.register(card(4, "KIN 253", Era::FRESHMAN));

        assert_eq!(registry.get_unchecked(CardId::new(4)).name, "KIN 253");
    }

    #[test]
    fn test_len_and_contains() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        registry.register(card(1, "CHEM 111", Era::FRESHMAN));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(CardId::new(1)));
        assert!(!registry.contains(CardId::new(2)));
    }
}
