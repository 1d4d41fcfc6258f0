//! Upgrade catalog.
//!
//! Every upgrade is one row of `CATALOG`: what it is paid in, what it
//! costs, and which rate it raises. Costs never scale with purchases.
//! New upgrades are added as a variant plus a row; the engine dispatches
//! on the row, never on the variant.

use crate::{
    error::GameError,
    state::EconomyState,
    types::Amount,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    #[serde(rename = "auto-drip-1", alias = "auto1")]
    AutoDrip1,
    #[serde(rename = "click-1", alias = "click1")]
    Click1,
    #[serde(rename = "auto-drip-2", alias = "auto5")]
    AutoDrip2,
    #[serde(rename = "click-2", alias = "click5")]
    Click2,
}

/// The tier an upgrade is paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Life,
    Lakes,
}

/// The rate an upgrade raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    PerSecond,
    PerClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeSpec {
    pub kind:     UpgradeKind,
    pub label:    &'static str,
    pub currency: Currency,
    pub cost:     Amount,
    pub stat:     Stat,
    pub gain:     Amount,
}

pub const CATALOG: [UpgradeSpec; 4] = [
    UpgradeSpec {
        kind:     UpgradeKind::AutoDrip1,
        label:    "+1 / sec",
        currency: Currency::Life,
        cost:     50,
        stat:     Stat::PerSecond,
        gain:     1,
    },
    UpgradeSpec {
        kind:     UpgradeKind::Click1,
        label:    "+1 / click",
        currency: Currency::Life,
        cost:     75,
        stat:     Stat::PerClick,
        gain:     1,
    },
    UpgradeSpec {
        kind:     UpgradeKind::AutoDrip2,
        label:    "+5 / sec",
        currency: Currency::Lakes,
        cost:     2,
        stat:     Stat::PerSecond,
        gain:     5,
    },
    UpgradeSpec {
        kind:     UpgradeKind::Click2,
        label:    "+5 / click",
        currency: Currency::Lakes,
        cost:     3,
        stat:     Stat::PerClick,
        gain:     5,
    },
];

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::AutoDrip1,
        UpgradeKind::Click1,
        UpgradeKind::AutoDrip2,
        UpgradeKind::Click2,
    ];

    pub fn spec(self) -> &'static UpgradeSpec {
        match self {
            Self::AutoDrip1 => &CATALOG[0],
            Self::Click1    => &CATALOG[1],
            Self::AutoDrip2 => &CATALOG[2],
            Self::Click2    => &CATALOG[3],
        }
    }

    /// Stable wire name, also used as the event payload.
    pub fn name(self) -> &'static str {
        match self {
            Self::AutoDrip1 => "auto-drip-1",
            Self::Click1    => "click-1",
            Self::AutoDrip2 => "auto-drip-2",
            Self::Click2    => "click-2",
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UpgradeKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto-drip-1" | "auto1"  => Ok(Self::AutoDrip1),
            "click-1"     | "click1" => Ok(Self::Click1),
            "auto-drip-2" | "auto5"  => Ok(Self::AutoDrip2),
            "click-2"     | "click5" => Ok(Self::Click2),
            other => Err(GameError::UnknownUpgrade { name: other.to_string() }),
        }
    }
}

impl Currency {
    pub fn balance(self, state: &EconomyState) -> Amount {
        match self {
            Self::Life  => state.life,
            Self::Lakes => state.lakes,
        }
    }

    fn balance_mut(self, state: &mut EconomyState) -> &mut Amount {
        match self {
            Self::Life  => &mut state.life,
            Self::Lakes => &mut state.lakes,
        }
    }
}

impl Stat {
    fn value_mut(self, state: &mut EconomyState) -> &mut Amount {
        match self {
            Self::PerSecond => &mut state.per_second,
            Self::PerClick  => &mut state.per_click,
        }
    }
}

impl UpgradeSpec {
    pub fn affordable(&self, state: &EconomyState) -> bool {
        self.currency.balance(state) >= self.cost
    }

    /// Debit the cost and credit the effect. Leaves `state` untouched and
    /// returns false when the balance is short.
    pub(crate) fn apply(&self, state: &mut EconomyState) -> bool {
        if !self.affordable(state) {
            return false;
        }
        *self.currency.balance_mut(state) -= self.cost;
        let stat = self.stat.value_mut(state);
        *stat = stat.saturating_add(self.gain);
        true
    }
}

/// One row of the shop as a presentation layer would render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopEntry {
    pub kind:       UpgradeKind,
    pub label:      &'static str,
    pub currency:   Currency,
    pub cost:       Amount,
    pub stat:       Stat,
    pub gain:       Amount,
    pub affordable: bool,
}

/// Every catalog row in order, with affordability against `state`.
pub fn shop(state: &EconomyState) -> Vec<ShopEntry> {
    CATALOG
        .iter()
        .map(|spec| ShopEntry {
            kind:       spec.kind,
            label:      spec.label,
            currency:   spec.currency,
            cost:       spec.cost,
            stat:       spec.stat,
            gain:       spec.gain,
            affordable: spec.affordable(state),
        })
        .collect()
}
