use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Character, CHARACTER_VARIANTS, COPIES_PER_CHARACTER};

/// The face-down draw pile. Draws come off the end of the vector; returned
/// cards are pushed onto the end and only mix back in once the pile is
/// shuffled again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Character>,
}

impl Deck {
    /// A full, unshuffled pile: three copies of each character.
    pub fn full() -> Self {
        let cards = CHARACTER_VARIANTS
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(COPIES_PER_CHARACTER))
            .collect();

        Deck { cards }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Character> {
        self.cards.pop()
    }

    pub fn put_back(&mut self, character: Character) {
        self.cards.push(character);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copies of `character` currently in the pile.
    pub fn count_of(&self, character: Character) -> usize {
        self.cards.iter().filter(|&&c| c == character).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn full_deck_has_three_of_each() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 15);
        for character in CHARACTER_VARIANTS {
            assert_eq!(deck.count_of(character), 3);
        }
    }

    #[test]
    fn draw_pops_from_the_end() {
        let mut deck = Deck::full();
        // unshuffled, so the last three pushed are contessas
        assert_eq!(deck.draw(), Some(Character::Contessa));
        assert_eq!(deck.draw(), Some(Character::Contessa));
        assert_eq!(deck.draw(), Some(Character::Contessa));
        assert_eq!(deck.draw(), Some(Character::Ambassador));
        assert_eq!(deck.len(), 11);
    }

    #[test]
    fn put_back_restores_the_count() {
        let mut deck = Deck::full();
        let card = deck.draw().unwrap();
        deck.put_back(card);
        assert_eq!(deck.len(), 15);
        assert_eq!(deck.count_of(card), 3);
    }

    #[test]
    fn shuffle_is_deterministic_under_a_seed() {
        let mut a = Deck::full();
        let mut b = Deck::full();
        a.shuffle(&mut Pcg64::seed_from_u64(77));
        b.shuffle(&mut Pcg64::seed_from_u64(77));
        assert_eq!(a, b);

        let mut c = Deck::full();
        c.shuffle(&mut Pcg64::seed_from_u64(78));
        assert_ne!(a, c);
    }

    #[test]
    fn drained_deck_reports_empty() {
        let mut deck = Deck::full();
        while deck.draw().is_some() {}
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
