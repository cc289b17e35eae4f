use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, Response};
use crate::card::Character;
use crate::player::Player;

/// Which response round the table is waiting on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingResponse,
    AwaitingBlockResponse,
}

/// A counter-claim standing against the pending action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    #[serde(rename = "playerId")]
    pub player: String,
    #[serde(rename = "claimedCharacter")]
    pub claim: Character,
}

/// One announced action frozen mid-negotiation, together with every response
/// gathered so far. Created when a contestable action is announced and
/// destroyed the moment the negotiation settles. A block reuses the same
/// record with the responses cleared instead of nesting a second negotiation,
/// since a block can never itself be blocked.
///
/// Transitions return fresh values; the record is never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    #[serde(rename = "actionType")]
    pub kind: ActionKind,
    #[serde(rename = "actorId")]
    pub actor: String,
    #[serde(rename = "targetId")]
    pub target: Option<String>,
    pub blocker: Option<Blocker>,
    pub responses: BTreeMap<String, Response>,
    /// Coins already taken from the actor, remembered for the refund paths.
    #[serde(rename = "resolvedCost")]
    pub paid: u8,
}

impl PendingAction {
    pub fn open(kind: ActionKind, actor: &str, target: Option<&str>, paid: u8) -> Self {
        PendingAction {
            kind,
            actor: actor.to_owned(),
            target: target.map(str::to_owned),
            blocker: None,
            responses: BTreeMap::new(),
            paid,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.blocker.is_some() {
            Phase::AwaitingBlockResponse
        } else {
            Phase::AwaitingResponse
        }
    }

    pub fn has_responded(&self, player: &str) -> bool {
        self.responses.contains_key(player)
    }

    pub fn with_allow(&self, player: &str) -> Self {
        let mut next = self.clone();
        next.responses.insert(player.to_owned(), Response::Allow);
        next
    }

    /// Installs the blocker and clears the gathered responses, reopening a
    /// response round where only the original actor has a say.
    pub fn with_block(&self, player: &str, claim: Character) -> Self {
        let mut next = self.clone();
        next.blocker = Some(Blocker {
            player: player.to_owned(),
            claim,
        });
        next.responses = BTreeMap::new();
        next
    }

    /// Players whose response is still required, in seat order after the actor.
    pub fn awaiting<'a>(&self, players: &'a [Player]) -> Vec<&'a str> {
        let actor_seat = players.iter().position(|p| p.id == self.actor);
        let Some(actor_seat) = actor_seat else {
            return Vec::new();
        };

        match self.phase() {
            Phase::AwaitingBlockResponse => {
                if self.has_responded(&self.actor) {
                    Vec::new()
                } else {
                    vec![players[actor_seat].id.as_str()]
                }
            }
            Phase::AwaitingResponse => {
                let count = players.len();
                (1..count)
                    .map(|offset| &players[(actor_seat + offset) % count])
                    .filter(|p| !p.eliminated && !self.has_responded(&p.id))
                    .map(|p| p.id.as_str())
                    .collect()
            }
        }
    }

    pub fn is_awaiting(&self, players: &[Player], responder: &str) -> bool {
        self.awaiting(players).contains(&responder)
    }

    pub fn settled(&self, players: &[Player]) -> bool {
        self.awaiting(players).is_empty()
    }

    /// The claim a challenge would put on trial: the blocker's claimed
    /// character while a block stands, otherwise the character behind the
    /// action itself. `None` means there is nothing to challenge.
    pub fn claim_under_challenge(&self) -> Option<(&str, Character)> {
        if let Some(blocker) = &self.blocker {
            return Some((blocker.player.as_str(), blocker.claim));
        }
        self.kind
            .profile()
            .claim
            .map(|claim| (self.actor.as_str(), claim))
    }
}
