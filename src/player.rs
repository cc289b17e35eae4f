use serde::{Deserialize, Serialize};

use crate::card::{Card, Character};

pub const STARTING_COINS: u8 = 2;

/// A seated participant. The hand stays empty until the game starts; once
/// dealt it always holds two cards, face down or revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(rename = "displayName")]
    pub name: String,
    pub coins: u8,
    pub hand: Vec<Card>,
    pub eliminated: bool,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            coins: STARTING_COINS,
            hand: Vec::new(),
            eliminated: false,
        }
    }

    /// Face-down cards still counting as influence.
    pub fn influence(&self) -> usize {
        self.hand.iter().filter(|card| !card.revealed).count()
    }

    /// Index of the first face-down card, if any.
    pub fn first_unrevealed(&self) -> Option<usize> {
        self.hand.iter().position(|card| !card.revealed)
    }

    /// Index of a face-down copy of `character`, if the player really holds one.
    pub fn find_unrevealed(&self, character: Character) -> Option<usize> {
        self.hand
            .iter()
            .position(|card| !card.revealed && card.character == character)
    }

    /// Characters of the face-down cards, in hand order.
    pub fn unrevealed_characters(&self) -> Vec<Character> {
        self.hand
            .iter()
            .filter(|card| !card.revealed)
            .map(|card| card.character)
            .collect()
    }
}
