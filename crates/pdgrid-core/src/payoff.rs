//! Payoff matrix for pairwise Prisoner's Dilemma encounters.
//!
//! Keyed by `(own_move, other_move)`. In configuration and on disk the
//! matrix is a table with the keys `CC`, `CD`, `DC` and `DD`.

use crate::error::{ConfigError, PdError, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The 2x2 payoff table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct PayoffMatrix {
    entries: BTreeMap<(Move, Move), f64>,
}

impl PayoffMatrix {
    /// Build a matrix from the four payoffs, named from the row player's view.
    pub fn new(cc: f64, cd: f64, dc: f64, dd: f64) -> Result<Self> {
        let mut table = BTreeMap::new();
        table.insert("CC".to_string(), cc);
        table.insert("CD".to_string(), cd);
        table.insert("DC".to_string(), dc);
        table.insert("DD".to_string(), dd);
        Self::from_table(table).map_err(PdError::from)
    }

    /// Build a matrix from a `CC`/`CD`/`DC`/`DD` keyed table.
    ///
    /// Every pair must be present exactly once with a finite, non-negative
    /// value.
    pub fn from_table(table: BTreeMap<String, f64>) -> std::result::Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        for (key, value) in table {
            let pair = parse_pair(&key).ok_or_else(|| ConfigError::InvalidValue {
                field: "payoff".to_string(),
                value: key.clone(),
                reason: "key must be two move symbols, e.g. CD".to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field: format!("payoff.{}", key),
                    min: 0.0,
                    max: f64::MAX,
                    value,
                });
            }
            if entries.insert(pair, value).is_some() {
                return Err(ConfigError::InvalidValue {
                    field: "payoff".to_string(),
                    value: key,
                    reason: "pair given more than once".to_string(),
                });
            }
        }

        for own in Move::ALL {
            for other in Move::ALL {
                if !entries.contains_key(&(own, other)) {
                    return Err(ConfigError::MissingField(format!("payoff.{}{}", own, other)));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Payoff to a player using `own` against a player using `other`.
    pub fn payoff(&self, own: Move, other: Move) -> Option<f64> {
        self.entries.get(&(own, other)).copied()
    }

    /// Like [`payoff`](Self::payoff), but a missing pair is an error
    /// attributed to the agent at `position`.
    pub fn lookup(&self, position: Position, own: Move, other: Move) -> Result<f64> {
        self.payoff(own, other).ok_or_else(|| {
            PdError::payoff_lookup(position, format!("no payoff entry for ({}, {})", own, other))
        })
    }

    /// Table form with `CC`/`CD`/`DC`/`DD` keys.
    pub fn to_table(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|((own, other), v)| (format!("{}{}", own, other), *v))
            .collect()
    }
}

impl Default for PayoffMatrix {
    /// Cooperation pays 1 against cooperation, a defector exploiting a
    /// cooperator gets 1.6, everything else pays nothing.
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert((Move::Cooperate, Move::Cooperate), 1.0);
        entries.insert((Move::Cooperate, Move::Defect), 0.0);
        entries.insert((Move::Defect, Move::Cooperate), 1.6);
        entries.insert((Move::Defect, Move::Defect), 0.0);
        Self { entries }
    }
}

impl TryFrom<BTreeMap<String, f64>> for PayoffMatrix {
    type Error = ConfigError;

    fn try_from(table: BTreeMap<String, f64>) -> std::result::Result<Self, Self::Error> {
        Self::from_table(table)
    }
}

impl From<PayoffMatrix> for BTreeMap<String, f64> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.to_table()
    }
}

fn parse_pair(key: &str) -> Option<(Move, Move)> {
    let mut chars = key.trim().chars();
    let own = chars.next()?.to_string().parse().ok()?;
    let other = chars.next()?.to_string().parse().ok()?;
    if chars.next().is_some() {
        return None;
    }
    Some((own, other))
}
