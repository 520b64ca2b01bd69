//! The deck: draw pile, discard pile, and their lifecycle.
//!
//! The `Deck` owns the two piles and the operations that move cards
//! between them: shuffling, dealing, routine recycling of the discard
//! pile, and the merge/prune steps of a year transition. Cards are
//! tracked by `CardId`; the multiset union of draw pile, discard pile,
//! and all hands stays constant between explicit prune/introduce steps.
//!
//! The top of the draw pile is the end of the vec; `draw` pops it.
//! Discard pile order carries no meaning.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};
use crate::core::{GameRng, Ledger};

/// Draw pile and discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<CardId>,
    discard_pile: Vec<CardId>,
}

impl Deck {
    /// Create a deck with the given draw pile and an empty discard pile.
    #[must_use]
    pub fn new(draw_pile: Vec<CardId>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    // === Sizes ===

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards in both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Draw pile contents, bottom to top.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    /// Discard pile contents.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    // === Lifecycle ===

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Remove and return the top card of the draw pile.
    ///
    /// An empty draw pile is not an error; callers recycle first.
    pub fn draw(&mut self) -> Option<CardId> {
        self.draw_pile.pop()
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: CardId) {
        self.discard_pile.push(card);
    }

    /// If the draw pile is empty, move the whole discard pile into it and
    /// shuffle. Returns whether a recycle happened.
    ///
    /// This is the deck's only source of new draw-order entropy after the
    /// initial deal; as long as cards exist in discard the game never
    /// stalls for lack of cards.
    pub fn recycle_if_empty(&mut self, rng: &mut GameRng) -> bool {
        if !self.draw_pile.is_empty() {
            return false;
        }
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle(rng);
        true
    }

    /// Deal `hand_size` cards off the top to each player, in turn order.
    ///
    /// Panics if the draw pile cannot cover every hand; the catalog sizing
    /// guarantees it can, so a shortfall is a fatal configuration error.
    pub fn deal_initial_hands(&mut self, players: &mut [Ledger], hand_size: usize) {
        let needed = players.len() * hand_size;
        assert!(
            self.draw_pile.len() >= needed,
            "draw pile holds {} cards, need {} to deal {} players a hand of {}",
            self.draw_pile.len(),
            needed,
            players.len(),
            hand_size
        );

        for ledger in players.iter_mut() {
            for _ in 0..hand_size {
                let card = self.draw().expect("draw pile sized by assertion above");
                ledger.push_card(card);
            }
        }
    }

    // === Year transition support ===

    /// Fold the discard pile back into the draw pile without shuffling.
    pub fn reclaim_discard(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
    }

    /// Add cards to the draw pile.
    pub fn absorb(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.draw_pile.extend(cards);
    }

    /// Remove every draw-pile card whose definition name is in `names`.
    ///
    /// Matching is by name equality, never by index, so every instance of
    /// a retired card goes at once. Returns how many cards were removed.
    pub fn prune_by_name(&mut self, registry: &CardRegistry, names: &[&str]) -> usize {
        let before = self.draw_pile.len();
        self.draw_pile
            .retain(|&id| !names.contains(&registry.get_unchecked(id).name.as_str()));
        before - self.draw_pile.len()
    }
}
