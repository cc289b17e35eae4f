use serde::{Deserialize, Serialize};

use crate::card::Character;
use crate::pending::PendingAction;
use crate::player::Player;
use crate::{Coup, Status};

/// One influence card as a particular viewer sees it. `character` is `None`
/// while the card sits face down in someone else's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub character: Option<Character>,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    #[serde(rename = "displayName")]
    pub name: String,
    pub coins: u8,
    pub hand: Vec<CardView>,
    pub eliminated: bool,
}

/// A redacted snapshot safe to hand to one player's client. Everything the
/// viewer is not entitled to know is reduced to placeholders and counts: other
/// hands lose their identities, the draw pile becomes a number. Claims,
/// responses and the log are public and pass through untouched. Views are
/// derived on demand and never fed back into the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub viewer: String,
    pub status: Status,
    pub players: Vec<PlayerView>,
    #[serde(rename = "deckCount")]
    pub deck_count: usize,
    #[serde(rename = "currentPlayer")]
    pub current_player: Option<String>,
    #[serde(rename = "pendingAction")]
    pub pending: Option<PendingAction>,
    pub winner: Option<String>,
    pub log: Vec<String>,
}

fn project_player(player: &Player, is_viewer: bool) -> PlayerView {
    let hand = player
        .hand
        .iter()
        .map(|card| CardView {
            character: (is_viewer || card.revealed).then_some(card.character),
            revealed: card.revealed,
        })
        .collect();

    PlayerView {
        id: player.id.clone(),
        name: player.name.clone(),
        coins: player.coins,
        hand,
        eliminated: player.eliminated,
    }
}

impl Coup {
    /// The game as `viewer` is allowed to see it. An id that is not seated
    /// gets a spectator view with every face-down card hidden.
    pub fn view_for(&self, viewer: &str) -> GameView {
        let players = self
            .players
            .iter()
            .map(|player| project_player(player, player.id == viewer))
            .collect();

        let current_player = match self.status {
            Status::Playing => self
                .players
                .get(self.current_player_idx)
                .map(|p| p.id.clone()),
            _ => None,
        };

        GameView {
            viewer: viewer.to_owned(),
            status: self.status,
            players,
            deck_count: self.deck.len(),
            current_player,
            pending: self.pending.clone(),
            winner: self.winner.clone(),
            log: self.log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::card::Character::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn started_pair() -> Coup {
        let mut rng = Pcg64::seed_from_u64(11);
        let mut game = Coup::create("p1", "Alice")
            .add_player("p2", "Bob")
            .unwrap()
            .start_game(&mut rng)
            .unwrap();
        game.players[0].hand = vec![Card::face_down(Duke), Card::face_down(Assassin)];
        game.players[1].hand = vec![Card::face_down(Captain), Card::face_down(Contessa)];
        game
    }

    #[test]
    fn a_viewer_sees_their_own_hand_but_not_the_opponents() {
        let game = started_pair();
        let view = game.view_for("p1");

        assert_eq!(view.players[0].hand[0].character, Some(Duke));
        assert_eq!(view.players[0].hand[1].character, Some(Assassin));
        assert_eq!(view.players[1].hand[0].character, None);
        assert_eq!(view.players[1].hand[1].character, None);
        assert_eq!(view.deck_count, 11);
    }

    #[test]
    fn revealed_cards_are_public() {
        let mut game = started_pair();
        game.players[1].hand[0].revealed = true;

        let view = game.view_for("p1");
        assert_eq!(view.players[1].hand[0].character, Some(Captain));
        assert!(view.players[1].hand[0].revealed);
        assert_eq!(view.players[1].hand[1].character, None);
    }

    #[test]
    fn an_unseated_viewer_is_a_spectator() {
        let game = started_pair();
        let view = game.view_for("watcher");

        for player in &view.players {
            for card in &player.hand {
                assert_eq!(card.character, None);
            }
        }
        assert_eq!(view.current_player.as_deref(), game.current_player_id());
    }

    #[test]
    fn coins_log_and_status_pass_through() {
        let game = started_pair();
        let view = game.view_for("p2");

        assert_eq!(view.status, Status::Playing);
        assert_eq!(view.players[0].coins, 2);
        assert_eq!(view.winner, None);
        assert!(view.log.iter().any(|line| line == "Game started!"));
    }

    #[test]
    fn hidden_cards_serialize_as_null() {
        let game = started_pair();
        let json = serde_json::to_value(game.view_for("p1")).unwrap();

        assert_eq!(json["players"][1]["hand"][0]["character"], serde_json::Value::Null);
        assert_eq!(json["players"][0]["hand"][0]["character"], "Duke");
        assert!(json["deckCount"].is_number());
        assert!(json["pendingAction"].is_null());
    }
}
