use serde::{Deserialize, Serialize};

/// The five character roles. The deck holds three copies of each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Duke,
    Assassin,
    Captain,
    Ambassador,
    Contessa,
}

pub static CHARACTER_VARIANTS: [Character; 5] = [
    Character::Duke,
    Character::Assassin,
    Character::Captain,
    Character::Ambassador,
    Character::Contessa,
];

pub const COPIES_PER_CHARACTER: usize = 3;
pub const TOTAL_CARDS: usize = 15;

/// One influence card in a hand. A revealed card is public knowledge,
/// permanently out of play, and no longer counts as influence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub character: Character,
    pub revealed: bool,
}

impl Card {
    pub fn face_down(character: Character) -> Self {
        Card {
            character,
            revealed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_table_covers_every_character() {
        assert_eq!(CHARACTER_VARIANTS.len() * COPIES_PER_CHARACTER, TOTAL_CARDS);
        for pair in CHARACTER_VARIANTS.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn new_cards_start_face_down() {
        let card = Card::face_down(Character::Contessa);
        assert_eq!(card.character, Character::Contessa);
        assert!(!card.revealed);
    }
}
