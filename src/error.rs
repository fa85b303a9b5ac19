//! Error types for combat resolution.
//!
//! All errors the engine can raise are represented by the `CombatError`
//! enum. They fall into two groups:
//!
//! - **Configuration errors** come from malformed static data (matchup
//!   tables, status definitions, the ability catalog). They are raised once,
//!   at load time, and indicate a data-definition bug.
//! - **Usage errors** come from an illegal request (wrong targets, blocked
//!   ability, not enough mana, negative amounts). The engine guarantees that
//!   no state was mutated, so the caller can simply pick another action.

use crate::element::ElementType;
use crate::name::Name;
use thiserror::Error;

/// Errors that can occur while loading game data or resolving abilities.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::CombatError;
///
/// let err = CombatError::NoTargets;
/// assert!(!err.is_config());
/// println!("{}", err); // "Ability used with no targets"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    /// A matchup table has no entry for an attacker/defender pair.
    #[error("No matchup assigned for {attacker} attacking {defender}")]
    UncoveredType {
        attacker: ElementType,
        defender: ElementType,
    },

    /// A matchup table assigns more than one matchup to a pair.
    #[error("{attacker} attacking {defender} is assigned more than one matchup")]
    DuplicateTypeAssignment {
        attacker: ElementType,
        defender: ElementType,
    },

    /// A status modifies nothing, modifies more than one property, or
    /// targets a stat that statuses cannot change.
    #[error("Illegal status {name}: {reason}")]
    IllegalStatus { name: Name, reason: &'static str },

    /// An ability definition refers to a status the catalog does not know.
    #[error("Unknown status: {0}")]
    UnknownStatus(Name),

    /// Static data could not be parsed.
    #[error("Invalid game data: {0}")]
    InvalidData(String),

    /// An ability was used with an empty target list.
    #[error("Ability used with no targets")]
    NoTargets,

    /// The source does not know the ability, or an active status blocks it.
    #[error("This {element} cannot use {ability}")]
    IllegalAbility { element: ElementType, ability: Name },

    /// The source cannot pay the ability's mana cost.
    #[error("{ability} costs {required} mana but only {available} is available")]
    InsufficientMana {
        ability: Name,
        required: u64,
        available: u64,
    },

    /// A single-target ability was given more than one target.
    #[error("{ability} is single-target but {count} elementals are being targeted")]
    TargetCountMismatch { ability: Name, count: usize },

    /// A target index does not point into the battlefield.
    #[error("Target index {0} is out of range")]
    TargetOutOfRange(usize),

    /// The same battlefield index was targeted twice.
    #[error("Target index {0} appears more than once")]
    DuplicateTarget(usize),

    /// Harm or heal was requested with a negative amount.
    #[error("Amount must be non-negative, got {0}")]
    InvalidAmount(i64),
}

impl CombatError {
    /// Whether this error comes from static data rather than from a
    /// single request.
    ///
    /// Configuration errors are fatal; everything else is recoverable.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CombatError::UncoveredType { .. }
                | CombatError::DuplicateTypeAssignment { .. }
                | CombatError::IllegalStatus { .. }
                | CombatError::UnknownStatus(_)
                | CombatError::InvalidData(_)
        )
    }
}

impl From<serde_json::Error> for CombatError {
    fn from(err: serde_json::Error) -> Self {
        CombatError::InvalidData(err.to_string())
    }
}
