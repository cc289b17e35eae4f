use serde::{Deserialize, Serialize};

use crate::card::Character;

/// The seven things a player can do on their turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Income,
    ForeignAid,
    Coup,
    Tax,
    Assassinate,
    Steal,
    Exchange,
}

pub static ACTION_VARIANTS: [ActionKind; 7] = [
    ActionKind::Income,
    ActionKind::ForeignAid,
    ActionKind::Coup,
    ActionKind::Tax,
    ActionKind::Assassinate,
    ActionKind::Steal,
    ActionKind::Exchange,
];

/// Static rule data for one action kind. Everything the engine needs to know
/// about an action outside its resolution effect lives here.
#[derive(Debug, PartialEq, Eq)]
pub struct ActionProfile {
    pub cost: u8,
    pub requires_target: bool,
    pub claim: Option<Character>,
    pub blocked_by: &'static [Character],
    pub challengeable: bool,
}

impl ActionProfile {
    /// An action with nothing to contest resolves the moment it is announced.
    pub fn contestable(&self) -> bool {
        self.challengeable || !self.blocked_by.is_empty()
    }
}

// rows indexed by ActionKind discriminant, declaration order
static PROFILES: [ActionProfile; 7] = [
    ActionProfile {
        cost: 0,
        requires_target: false,
        claim: None,
        blocked_by: &[],
        challengeable: false,
    },
    ActionProfile {
        cost: 0,
        requires_target: false,
        claim: None,
        blocked_by: &[Character::Duke],
        challengeable: false,
    },
    ActionProfile {
        cost: 7,
        requires_target: true,
        claim: None,
        blocked_by: &[],
        challengeable: false,
    },
    ActionProfile {
        cost: 0,
        requires_target: false,
        claim: Some(Character::Duke),
        blocked_by: &[],
        challengeable: true,
    },
    ActionProfile {
        cost: 3,
        requires_target: true,
        claim: Some(Character::Assassin),
        blocked_by: &[Character::Contessa],
        challengeable: true,
    },
    ActionProfile {
        cost: 0,
        requires_target: true,
        claim: Some(Character::Captain),
        blocked_by: &[Character::Captain, Character::Ambassador],
        challengeable: true,
    },
    ActionProfile {
        cost: 0,
        requires_target: false,
        claim: Some(Character::Ambassador),
        blocked_by: &[],
        challengeable: true,
    },
];

impl ActionKind {
    pub fn profile(self) -> &'static ActionProfile {
        &PROFILES[self as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Income => "Income",
            ActionKind::ForeignAid => "Foreign Aid",
            ActionKind::Coup => "Coup",
            ActionKind::Tax => "Tax",
            ActionKind::Assassinate => "Assassinate",
            ActionKind::Steal => "Steal",
            ActionKind::Exchange => "Exchange",
        }
    }
}

/// A reply to an in-flight action: let it stand, contest the claim behind it,
/// or counter-claim a character that cancels it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Allow,
    Challenge,
    Block(Character),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Character::*;

    #[test]
    fn rules_table_matches_the_game() {
        let income = ActionKind::Income.profile();
        assert_eq!(income.cost, 0);
        assert!(!income.requires_target);
        assert!(!income.contestable());

        let foreign_aid = ActionKind::ForeignAid.profile();
        assert_eq!(foreign_aid.claim, None);
        assert_eq!(foreign_aid.blocked_by, &[Duke]);
        assert!(!foreign_aid.challengeable);
        assert!(foreign_aid.contestable());

        let coup = ActionKind::Coup.profile();
        assert_eq!(coup.cost, 7);
        assert!(coup.requires_target);
        assert!(!coup.contestable());

        let tax = ActionKind::Tax.profile();
        assert_eq!(tax.claim, Some(Duke));
        assert!(tax.blocked_by.is_empty());
        assert!(tax.challengeable);

        let assassinate = ActionKind::Assassinate.profile();
        assert_eq!(assassinate.cost, 3);
        assert!(assassinate.requires_target);
        assert_eq!(assassinate.claim, Some(Assassin));
        assert_eq!(assassinate.blocked_by, &[Contessa]);

        let steal = ActionKind::Steal.profile();
        assert_eq!(steal.cost, 0);
        assert!(steal.requires_target);
        assert_eq!(steal.claim, Some(Captain));
        assert_eq!(steal.blocked_by, &[Captain, Ambassador]);

        let exchange = ActionKind::Exchange.profile();
        assert_eq!(exchange.claim, Some(Ambassador));
        assert!(exchange.blocked_by.is_empty());
        assert!(exchange.challengeable);
    }

    #[test]
    fn every_challengeable_action_carries_a_claim() {
        for kind in ACTION_VARIANTS {
            let profile = kind.profile();
            assert_eq!(profile.challengeable, profile.claim.is_some(), "{kind:?}");
        }
    }

    #[test]
    fn wire_names_are_snake_case() {
        let json = serde_json::to_string(&ActionKind::ForeignAid).unwrap();
        assert_eq!(json, "\"foreign_aid\"");
        let json = serde_json::to_string(&Response::Block(Duke)).unwrap();
        assert_eq!(json, "{\"block\":\"Duke\"}");
    }
}
