use thiserror::Error;

use crate::action::ActionKind;
use crate::card::Character;
use crate::Status;

/// A player intent the rules reject. The snapshot is left untouched; the
/// caller can show the message and let the player pick again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("the game is not in progress (status: {status:?})")]
    NotPlaying { status: Status },

    #[error("no player with id {player:?} is seated")]
    UnknownPlayer { player: String },

    #[error("it is not {player}'s turn")]
    OutOfTurn { player: String },

    #[error("{player} has been eliminated")]
    Eliminated { player: String },

    #[error("with 10 or more coins the only legal action is Coup")]
    MustCoup,

    #[error("not enough coins: {} costs {needed}, only {available} available", kind.label())]
    InsufficientCoins {
        kind: ActionKind,
        needed: u8,
        available: u8,
    },

    #[error("{} requires a target", kind.label())]
    MissingTarget { kind: ActionKind },

    #[error("players cannot target themselves")]
    SelfTarget,

    #[error("{target} is eliminated and cannot be targeted")]
    TargetEliminated { target: String },

    #[error("an action is already awaiting responses")]
    ActionInProgress,

    #[error("no action is awaiting responses")]
    NothingPending,

    #[error("{player} may not respond to this action right now")]
    NotAwaitingResponder { player: String },

    #[error("{player} has already responded")]
    AlreadyResponded { player: String },

    #[error("{} cannot be challenged", kind.label())]
    NotChallengeable { kind: ActionKind },

    #[error("{} cannot be blocked", kind.label())]
    NotBlockable { kind: ActionKind },

    #[error("{claim:?} does not block {}", kind.label())]
    WrongBlockClaim { kind: ActionKind, claim: Character },

    #[error("only the targeted player may block {}", kind.label())]
    OnlyTargetMayBlock { kind: ActionKind },

    #[error("a block is already standing; it can only be allowed or challenged")]
    BlockAlreadyStanding,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("the table is full ({max} seats)")]
    TableFull { max: usize },

    #[error("player {player:?} is already seated")]
    AlreadySeated { player: String },

    #[error("at least {needed} players are required to start")]
    NotEnoughPlayers { needed: usize },
}

/// A state the engine must never reach. This is a bug in the engine, not bad
/// input; the affected game should be abandoned rather than continued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("card conservation broken: counted {counted} cards, expected {expected}")]
    CardCountMismatch { counted: usize, expected: usize },

    #[error("elimination flag out of sync for {player}")]
    EliminationDesync { player: String },

    #[error("the draw pile is unexpectedly empty")]
    DeckExhausted,

    #[error("no eligible next player found")]
    NoNextPlayer,

    #[error("a targeted action resolved without a target")]
    TargetMissingAtResolve,

    #[error("the game refers to an unseated player {player:?}")]
    DanglingPlayerRef { player: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoupError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
