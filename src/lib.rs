//! Authoritative rules engine for Coup: lobby, turn actions, the
//! block/challenge negotiation, eliminations and win detection. Pure state
//! transitions over immutable snapshots; randomness is always injected.

mod action;
mod card;
mod deck;
mod error;
mod pending;
mod player;
mod view;

pub use action::{ActionKind, ActionProfile, Response, ACTION_VARIANTS};
pub use card::{Card, Character, CHARACTER_VARIANTS, TOTAL_CARDS};
pub use deck::Deck;
pub use error::{CoupError, InvariantViolation, RuleViolation};
pub use pending::{Blocker, PendingAction, Phase};
pub use player::{Player, STARTING_COINS};
pub use view::{CardView, GameView, PlayerView};

use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

const CARDS_PER_PLAYER: usize = 2;
const FORCED_COUP_AT: u8 = 10;
const STEAL_AMOUNT: u8 = 2;
const EXCHANGE_DRAW: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Waiting,
    Playing,
    Finished,
}

/// A single legal move available right now: who can make it and what it is.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Perform {
        actor: String,
        kind: ActionKind,
        target: Option<String>,
    },
    Respond {
        responder: String,
        response: Response,
    },
}

impl Debug for Intent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Perform {
                actor,
                kind,
                target: Some(target),
            } => f.write_fmt(format_args!("{actor} plays {} on {target}", kind.label())),
            Intent::Perform {
                actor,
                kind,
                target: None,
            } => f.write_fmt(format_args!("{actor} plays {}", kind.label())),
            Intent::Respond {
                responder,
                response: Response::Allow,
            } => f.write_fmt(format_args!("{responder} allows")),
            Intent::Respond {
                responder,
                response: Response::Challenge,
            } => f.write_fmt(format_args!("{responder} challenges")),
            Intent::Respond {
                responder,
                response: Response::Block(character),
            } => f.write_fmt(format_args!("{responder} blocks with {character:?}")),
        }
    }
}

/// The authoritative state of one table.
///
/// Every mutating operation clones the snapshot, validates, applies, runs the
/// invariant self-check and returns the result; on `Err` the caller still
/// holds the previous snapshot, untouched. Serializes to the document shape
/// the integration layer stores.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coup {
    players: Vec<Player>,
    deck: Deck,
    #[serde(rename = "currentPlayerIndex")]
    current_player_idx: usize,
    #[serde(rename = "pendingAction")]
    pending: Option<PendingAction>,
    status: Status,
    winner: Option<String>,
    log: Vec<String>,
}

impl Debug for Coup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:?} | seat {} | deck {}\n",
            self.status,
            self.current_player_idx,
            self.deck.len()
        ))?;
        for (seat, player) in self.players.iter().enumerate() {
            let marker = if seat == self.current_player_idx { '>' } else { ' ' };
            f.write_fmt(format_args!(
                "{marker} {} ({}): ${} | {:?}\n",
                player.name, player.id, player.coins, player.hand
            ))?;
        }
        if let Some(pending) = &self.pending {
            f.write_fmt(format_args!("pending {pending:?}\n"))?;
        }
        Ok(())
    }
}

impl Coup {
    /// A fresh table in the waiting lobby with the host seated.
    pub fn create(host_id: impl Into<String>, host_name: impl Into<String>) -> Coup {
        let host = Player::new(host_id, host_name);
        let mut game = Coup {
            players: Vec::new(),
            deck: Deck::full(),
            current_player_idx: 0,
            pending: None,
            status: Status::Waiting,
            winner: None,
            log: Vec::new(),
        };
        game.push_log(format!(
            "Game created by {}. Waiting for players...",
            host.name
        ));
        game.players.push(host);
        game
    }

    /// Seats another player. Only legal while the table is waiting.
    pub fn add_player(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Coup, CoupError> {
        let mut next = self.clone();
        if next.status != Status::Waiting {
            return Err(RuleViolation::AlreadyStarted.into());
        }
        if next.players.len() >= MAX_PLAYERS {
            return Err(RuleViolation::TableFull { max: MAX_PLAYERS }.into());
        }
        let player = Player::new(id, name);
        if next.seat_of(&player.id).is_some() {
            return Err(RuleViolation::AlreadySeated { player: player.id }.into());
        }
        next.push_log(format!("{} joined the game.", player.name));
        next.players.push(player);
        Ok(next)
    }

    /// Shuffles the deck, deals two cards to every seat and hands the first
    /// turn to a random player.
    pub fn start_game<R: Rng>(&self, rng: &mut R) -> Result<Coup, CoupError> {
        let mut next = self.clone();
        if next.status != Status::Waiting {
            return Err(RuleViolation::AlreadyStarted.into());
        }
        if next.players.len() < MIN_PLAYERS {
            return Err(RuleViolation::NotEnoughPlayers {
                needed: MIN_PLAYERS,
            }
            .into());
        }

        next.deck.shuffle(rng);
        for seat in 0..next.players.len() {
            for _ in 0..CARDS_PER_PLAYER {
                let character = next.deck.draw().ok_or(InvariantViolation::DeckExhausted)?;
                next.players[seat].hand.push(Card::face_down(character));
            }
        }
        next.status = Status::Playing;
        next.current_player_idx = rng.gen_range(0..next.players.len());
        next.push_log("Game started!");
        next.push_log(format!(
            "--- {}'s turn ---",
            next.players[next.current_player_idx].name
        ));
        next.verify()?;
        Ok(next)
    }

    /// Announces the current player's action for this turn. Actions with
    /// nothing to contest resolve on the spot; everything else opens a
    /// negotiation that `respond_to_action` settles.
    pub fn perform_action<R: Rng>(
        &self,
        actor: &str,
        kind: ActionKind,
        target: Option<&str>,
        rng: &mut R,
    ) -> Result<Coup, CoupError> {
        let mut next = self.clone();
        if next.status != Status::Playing {
            return Err(RuleViolation::NotPlaying {
                status: next.status,
            }
            .into());
        }
        if next.pending.is_some() {
            return Err(RuleViolation::ActionInProgress.into());
        }
        let seat = next.require_seat(actor)?;
        if seat != next.current_player_idx {
            return Err(RuleViolation::OutOfTurn {
                player: actor.to_owned(),
            }
            .into());
        }
        if next.players[seat].eliminated {
            return Err(RuleViolation::Eliminated {
                player: actor.to_owned(),
            }
            .into());
        }

        let profile = kind.profile();
        let coins = next.players[seat].coins;
        if coins >= FORCED_COUP_AT && kind != ActionKind::Coup {
            return Err(RuleViolation::MustCoup.into());
        }
        if profile.cost > coins {
            return Err(RuleViolation::InsufficientCoins {
                kind,
                needed: profile.cost,
                available: coins,
            }
            .into());
        }

        // a target handed to an untargeted action is ignored
        let target_seat = if profile.requires_target {
            let target = target.ok_or(RuleViolation::MissingTarget { kind })?;
            let target_seat = next.require_seat(target)?;
            if target_seat == seat {
                return Err(RuleViolation::SelfTarget.into());
            }
            if next.players[target_seat].eliminated {
                return Err(RuleViolation::TargetEliminated {
                    target: target.to_owned(),
                }
                .into());
            }
            Some(target_seat)
        } else {
            None
        };

        // pay up front; failed actions refund through the pending record
        next.players[seat].coins -= profile.cost;

        if profile.contestable() {
            let target_id = target_seat.map(|t| next.players[t].id.clone());
            let mut line = format!("{} attempts {}", next.players[seat].name, kind.label());
            if let Some(t) = target_seat {
                line.push_str(&format!(" on {}", next.players[t].name));
            }
            line.push('.');
            next.push_log(line);
            next.pending = Some(PendingAction::open(
                kind,
                actor,
                target_id.as_deref(),
                profile.cost,
            ));
        } else {
            next.resolve_success(kind, seat, target_seat, rng)?;
            next.advance_turn()?;
        }

        next.verify()?;
        Ok(next)
    }

    /// Feeds one player's response into the pending negotiation.
    pub fn respond_to_action<R: Rng>(
        &self,
        responder: &str,
        response: Response,
        rng: &mut R,
    ) -> Result<Coup, CoupError> {
        let mut next = self.clone();
        if next.status != Status::Playing {
            return Err(RuleViolation::NotPlaying {
                status: next.status,
            }
            .into());
        }
        let Some(pending) = next.pending.clone() else {
            return Err(RuleViolation::NothingPending.into());
        };
        let responder_seat = next.require_seat(responder)?;
        if next.players[responder_seat].eliminated {
            return Err(RuleViolation::Eliminated {
                player: responder.to_owned(),
            }
            .into());
        }
        if !pending.is_awaiting(&next.players, responder) {
            if pending.has_responded(responder) {
                return Err(RuleViolation::AlreadyResponded {
                    player: responder.to_owned(),
                }
                .into());
            }
            return Err(RuleViolation::NotAwaitingResponder {
                player: responder.to_owned(),
            }
            .into());
        }

        match response {
            Response::Allow => next.record_allow(pending, responder, rng)?,
            Response::Block(claim) => next.record_block(pending, responder_seat, claim)?,
            Response::Challenge => next.resolve_challenge(pending, responder_seat, rng)?,
        }

        next.verify()?;
        Ok(next)
    }

    /// Every legal move on the table right now. Empty in the lobby and once
    /// the game is over; clients use this to re-render their options.
    pub fn intents(&self) -> Vec<Intent> {
        if self.status != Status::Playing {
            return Vec::new();
        }
        match &self.pending {
            Some(pending) => self.response_intents(pending),
            None => self.turn_intents(),
        }
    }

    /// Dispatches one enumerated intent through the façade.
    pub fn apply<R: Rng>(&self, intent: &Intent, rng: &mut R) -> Result<Coup, CoupError> {
        match intent {
            Intent::Perform {
                actor,
                kind,
                target,
            } => self.perform_action(actor, *kind, target.as_deref(), rng),
            Intent::Respond {
                responder,
                response,
            } => self.respond_to_action(responder, *response, rng),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn current_seat(&self) -> usize {
        self.current_player_idx
    }

    pub fn current_player_id(&self) -> Option<&str> {
        match self.status {
            Status::Playing => self
                .players
                .get(self.current_player_idx)
                .map(|p| p.id.as_str()),
            _ => None,
        }
    }

    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Structural self-check. Every façade call runs this before returning a
    /// new snapshot; a failure is an engine bug and the would-be snapshot is
    /// discarded.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let counted = self.deck.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len())
                .sum::<usize>();
        if counted != TOTAL_CARDS {
            return Err(InvariantViolation::CardCountMismatch {
                counted,
                expected: TOTAL_CARDS,
            });
        }
        for player in &self.players {
            // hands are empty until dealt; the flag only means something after
            if !player.hand.is_empty() && (player.influence() == 0) != player.eliminated {
                return Err(InvariantViolation::EliminationDesync {
                    player: player.id.clone(),
                });
            }
        }
        Ok(())
    }

    fn turn_intents(&self) -> Vec<Intent> {
        let mut intents = Vec::new();
        let actor = &self.players[self.current_player_idx];
        let opponents: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| !p.eliminated && p.id != actor.id)
            .collect();

        for kind in ACTION_VARIANTS {
            let profile = kind.profile();
            if actor.coins >= FORCED_COUP_AT && kind != ActionKind::Coup {
                continue;
            }
            if profile.cost > actor.coins {
                continue;
            }
            if profile.requires_target {
                for target in &opponents {
                    intents.push(Intent::Perform {
                        actor: actor.id.clone(),
                        kind,
                        target: Some(target.id.clone()),
                    });
                }
            } else {
                intents.push(Intent::Perform {
                    actor: actor.id.clone(),
                    kind,
                    target: None,
                });
            }
        }
        intents
    }

    fn response_intents(&self, pending: &PendingAction) -> Vec<Intent> {
        let mut intents = Vec::new();
        let profile = pending.kind.profile();
        for responder in pending.awaiting(&self.players) {
            intents.push(Intent::Respond {
                responder: responder.to_owned(),
                response: Response::Allow,
            });
            if pending.blocker.is_some() {
                // only the actor is awaited here, contesting the block
                intents.push(Intent::Respond {
                    responder: responder.to_owned(),
                    response: Response::Challenge,
                });
            } else {
                if profile.challengeable {
                    intents.push(Intent::Respond {
                        responder: responder.to_owned(),
                        response: Response::Challenge,
                    });
                }
                let may_block =
                    !profile.requires_target || pending.target.as_deref() == Some(responder);
                if may_block {
                    for &claim in profile.blocked_by {
                        intents.push(Intent::Respond {
                            responder: responder.to_owned(),
                            response: Response::Block(claim),
                        });
                    }
                }
            }
        }
        intents
    }

    fn record_allow<R: Rng>(
        &mut self,
        pending: PendingAction,
        responder: &str,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        let pending = pending.with_allow(responder);
        if !pending.settled(&self.players) {
            self.pending = Some(pending);
            return Ok(());
        }

        self.pending = None;
        let actor_seat = self.seat_by_ref(&pending.actor)?;
        match &pending.blocker {
            Some(blocker) => {
                let blocker_name = self.name_by_ref(&blocker.player)?;
                self.push_log(format!(
                    "{}'s block succeeds. {} is blocked!",
                    blocker_name,
                    pending.kind.label()
                ));
                self.refund(actor_seat, pending.paid);
            }
            None => {
                let target_seat = match pending.target.as_deref() {
                    Some(id) => Some(self.seat_by_ref(id)?),
                    None => None,
                };
                self.resolve_success(pending.kind, actor_seat, target_seat, rng)?;
            }
        }
        self.advance_turn()?;
        Ok(())
    }

    fn record_block(
        &mut self,
        pending: PendingAction,
        responder_seat: usize,
        claim: Character,
    ) -> Result<(), CoupError> {
        if pending.blocker.is_some() {
            return Err(RuleViolation::BlockAlreadyStanding.into());
        }
        let profile = pending.kind.profile();
        if profile.blocked_by.is_empty() {
            return Err(RuleViolation::NotBlockable { kind: pending.kind }.into());
        }
        if !profile.blocked_by.contains(&claim) {
            return Err(RuleViolation::WrongBlockClaim {
                kind: pending.kind,
                claim,
            }
            .into());
        }
        let responder_id = self.players[responder_seat].id.clone();
        if profile.requires_target && pending.target.as_deref() != Some(responder_id.as_str()) {
            return Err(RuleViolation::OnlyTargetMayBlock { kind: pending.kind }.into());
        }

        self.push_log(format!(
            "{} claims to block with {:?}!",
            self.players[responder_seat].name, claim
        ));
        self.pending = Some(pending.with_block(&responder_id, claim));
        Ok(())
    }

    fn resolve_challenge<R: Rng>(
        &mut self,
        pending: PendingAction,
        responder_seat: usize,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        let Some((challenged_id, claim)) = pending.claim_under_challenge() else {
            return Err(RuleViolation::NotChallengeable { kind: pending.kind }.into());
        };
        let challenged_id = challenged_id.to_owned();
        let challenged_seat = self.seat_by_ref(&challenged_id)?;
        let actor_seat = self.seat_by_ref(&pending.actor)?;
        let target_seat = match pending.target.as_deref() {
            Some(id) => Some(self.seat_by_ref(id)?),
            None => None,
        };

        self.push_log(format!(
            "{} challenges {}'s claim of {:?}!",
            self.players[responder_seat].name, self.players[challenged_seat].name, claim
        ));

        // a challenge settles the whole negotiation, one way or the other
        self.pending = None;
        match self.players[challenged_seat].find_unrevealed(claim) {
            Some(card_idx) => {
                self.push_log(format!(
                    "{} reveals {:?}! Challenge failed!",
                    self.players[challenged_seat].name, claim
                ));
                self.lose_influence(responder_seat, None);
                self.cycle_claimed_card(challenged_seat, card_idx, rng)?;
                if pending.blocker.is_some() {
                    // a proven block stands and the action stays paid for
                    self.push_log(format!(
                        "{}'s block stands. {} is blocked!",
                        self.players[challenged_seat].name,
                        pending.kind.label()
                    ));
                } else {
                    self.resolve_success(pending.kind, actor_seat, target_seat, rng)?;
                }
            }
            None => {
                self.push_log(format!(
                    "{} was bluffing! Challenge succeeded!",
                    self.players[challenged_seat].name
                ));
                self.lose_influence(challenged_seat, None);
                if pending.blocker.is_some() {
                    // the block collapses and the original action goes through
                    self.resolve_success(pending.kind, actor_seat, target_seat, rng)?;
                } else {
                    self.refund(actor_seat, pending.paid);
                }
            }
        }
        self.advance_turn()?;
        Ok(())
    }

    // applies a settled action's effect; never advances the turn itself
    fn resolve_success<R: Rng>(
        &mut self,
        kind: ActionKind,
        actor_seat: usize,
        target_seat: Option<usize>,
        rng: &mut R,
    ) -> Result<(), InvariantViolation> {
        match kind {
            ActionKind::Income => {
                self.players[actor_seat].coins += 1;
                self.push_log(format!(
                    "{} takes 1 coin (Income). Total: {}",
                    self.players[actor_seat].name, self.players[actor_seat].coins
                ));
            }
            ActionKind::ForeignAid => {
                self.players[actor_seat].coins += 2;
                self.push_log(format!(
                    "{} takes 2 coins (Foreign Aid). Total: {}",
                    self.players[actor_seat].name, self.players[actor_seat].coins
                ));
            }
            ActionKind::Tax => {
                self.players[actor_seat].coins += 3;
                self.push_log(format!(
                    "{} takes 3 coins (Tax). Total: {}",
                    self.players[actor_seat].name, self.players[actor_seat].coins
                ));
            }
            ActionKind::Coup | ActionKind::Assassinate => {
                let target = target_seat.ok_or(InvariantViolation::TargetMissingAtResolve)?;
                let verb = if kind == ActionKind::Coup {
                    "launches a Coup against"
                } else {
                    "assassinates"
                };
                self.push_log(format!(
                    "{} {verb} {}!",
                    self.players[actor_seat].name, self.players[target].name
                ));
                self.lose_influence(target, None);
            }
            ActionKind::Steal => {
                let target = target_seat.ok_or(InvariantViolation::TargetMissingAtResolve)?;
                let amount = self.players[target].coins.min(STEAL_AMOUNT);
                if amount == 0 {
                    self.push_log(format!(
                        "{} attempts to steal from {}, but they have no coins!",
                        self.players[actor_seat].name, self.players[target].name
                    ));
                } else {
                    self.players[target].coins -= amount;
                    self.players[actor_seat].coins += amount;
                    self.push_log(format!(
                        "{} steals {} coin{} from {}.",
                        self.players[actor_seat].name,
                        amount,
                        if amount == 1 { "" } else { "s" },
                        self.players[target].name
                    ));
                }
            }
            ActionKind::Exchange => {
                let keep = self.players[actor_seat].influence();
                let mut pool = self.players[actor_seat].unrevealed_characters();
                for _ in 0..EXCHANGE_DRAW {
                    pool.push(self.deck.draw().ok_or(InvariantViolation::DeckExhausted)?);
                }
                pool.shuffle(rng);
                for character in pool.drain(keep..) {
                    self.deck.put_back(character);
                }
                // write the kept cards back into the face-down slots, in order
                let mut kept = pool.into_iter();
                for card in self.players[actor_seat].hand.iter_mut() {
                    if !card.revealed {
                        if let Some(character) = kept.next() {
                            *card = Card::face_down(character);
                        }
                    }
                }
                self.deck.shuffle(rng);
                self.push_log(format!(
                    "{} exchanges cards with the deck.",
                    self.players[actor_seat].name
                ));
            }
        }
        Ok(())
    }

    /// Flips one face-down card. `choice` names the card by hand index; an
    /// absent or invalid choice falls back to the first face-down card, which
    /// is all the current callers ask for. Flipping the last one eliminates
    /// the player on the spot; a player with nothing left to flip is
    /// unaffected.
    fn lose_influence(&mut self, seat: usize, choice: Option<usize>) {
        let player = &self.players[seat];
        let card_idx = choice
            .filter(|&idx| idx < player.hand.len() && !player.hand[idx].revealed)
            .or_else(|| player.first_unrevealed());

        if let Some(idx) = card_idx {
            self.players[seat].hand[idx].revealed = true;
            self.push_log(format!(
                "{} reveals {:?} and loses influence.",
                self.players[seat].name, self.players[seat].hand[idx].character
            ));
        }

        if self.players[seat].influence() == 0 && !self.players[seat].eliminated {
            self.players[seat].eliminated = true;
            self.push_log(format!("{} has been eliminated!", self.players[seat].name));
        }
    }

    // the proven card returns to the pile and a replacement lands in the
    // same hand slot
    fn cycle_claimed_card<R: Rng>(
        &mut self,
        seat: usize,
        card_idx: usize,
        rng: &mut R,
    ) -> Result<(), InvariantViolation> {
        let character = self.players[seat].hand[card_idx].character;
        self.deck.put_back(character);
        self.deck.shuffle(rng);
        let replacement = self.deck.draw().ok_or(InvariantViolation::DeckExhausted)?;
        self.players[seat].hand[card_idx] = Card::face_down(replacement);
        self.push_log(format!(
            "{} shuffles a card back into the deck and draws a new one.",
            self.players[seat].name
        ));
        Ok(())
    }

    fn refund(&mut self, seat: usize, amount: u8) {
        if amount == 0 {
            return;
        }
        self.players[seat].coins += amount;
        self.push_log(format!(
            "{} gets refunded {} coin{}.",
            self.players[seat].name,
            amount,
            if amount == 1 { "" } else { "s" }
        ));
    }

    // win check first, then the cyclic scan to the next living seat
    fn advance_turn(&mut self) -> Result<(), InvariantViolation> {
        self.pending = None;

        let living: Vec<usize> = (0..self.players.len())
            .filter(|&seat| !self.players[seat].eliminated)
            .collect();
        if living.len() == 1 {
            let winner_seat = living[0];
            self.status = Status::Finished;
            self.winner = Some(self.players[winner_seat].id.clone());
            self.current_player_idx = winner_seat;
            self.push_log(format!(
                "{} wins the game!",
                self.players[winner_seat].name
            ));
            return Ok(());
        }

        self.current_player_idx = self.next_living_seat()?;
        self.push_log(format!(
            "--- {}'s turn ---",
            self.players[self.current_player_idx].name
        ));
        Ok(())
    }

    fn next_living_seat(&self) -> Result<usize, InvariantViolation> {
        let count = self.players.len();
        let mut seat = self.current_player_idx;
        for _ in 0..count {
            seat = (seat + 1) % count;
            if !self.players[seat].eliminated {
                return Ok(seat);
            }
        }
        Err(InvariantViolation::NoNextPlayer)
    }

    fn seat_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn require_seat(&self, id: &str) -> Result<usize, RuleViolation> {
        self.seat_of(id).ok_or_else(|| RuleViolation::UnknownPlayer {
            player: id.to_owned(),
        })
    }

    // lookups of ids the engine itself recorded; a miss is a bug, not bad input
    fn seat_by_ref(&self, id: &str) -> Result<usize, InvariantViolation> {
        self.seat_of(id)
            .ok_or_else(|| InvariantViolation::DanglingPlayerRef {
                player: id.to_owned(),
            })
    }

    fn name_by_ref(&self, id: &str) -> Result<String, InvariantViolation> {
        Ok(self.players[self.seat_by_ref(id)?].name.clone())
    }

    fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}
