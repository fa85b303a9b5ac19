//! # elemental-combat - Deterministic Elemental Battle Resolution
//!
//! A combat engine for turn-based battles between elemental creatures that
//! provides:
//! - **Deterministic** resolution (same state and ability → same outcome)
//! - **Exact** arithmetic (rational stats, ceiling-rounded damage)
//! - **Atomic** abilities (a rejected ability changes nothing)
//! - **Data-driven** content (matchups and abilities are plain data)
//!
//! ## Core Concepts
//!
//! ### Resolution Pipeline
//!
//! An offensive ability flows through the defenders' barriers before it is
//! scaled by the type matchup:
//!
//! ```text
//! [side barrier] → [own barrier] → [attack × matchup ÷ defense] → [health]
//! ```
//!
//! 1. **Barriers** absorb raw damage and pass on the bleed-through
//! 2. **Matchups** scale what is left by 6/5, 1 or 4/5
//! 3. **Statuses** shift attack, defense and speed additively, or block
//!    whole classes of abilities, for two rounds
//!
//! The engine does not decide turn order, round boundaries or who wins. It
//! exposes the state those decisions need (`net_speed`, `end_round`,
//! `is_fainted`) and reports what each ability did as a [`Resolution`].
//!
//! ## Example
//!
//! ```rust
//! use elemental_combat::*;
//!
//! let catalog = Catalog::standard().unwrap();
//! let resolver = CombatResolver::new().unwrap();
//!
//! let mut fire = Elemental::new(ElementType::Fire)
//!     .with_level(9)
//!     .with_abilities(catalog.learnable(ElementType::Fire, 9));
//! let mut earth = Elemental::new(ElementType::Earth);
//!
//! let flamethrower = catalog.ability("Flamethrower").unwrap();
//! let resolution = resolver
//!     .resolve(flamethrower, &mut fire, &mut [&mut earth])
//!     .unwrap();
//!
//! assert!(resolution.hits[0].effects_applied);
//! assert_eq!(earth.statuses().count(), 1);
//! assert_eq!(fire.mana(), 450);
//! ```
//!
//! ## Modules
//!
//! - [`element`] - Element types and base stats
//! - [`matchup`] - Type matchup table
//! - [`status`] - Status definitions
//! - [`ledger`] - Per-elemental status ledger
//! - [`barrier`] - Damage-absorbing barriers
//! - [`ability`] - Ability definitions
//! - [`elemental`] - Combatant state
//! - [`resolver`] - Ability resolution
//! - [`catalog`] - Named game data
//! - [`transform`] - Stat transforms
//! - [`resolved`] - Stat breakdowns
//! - [`numeric`] - Exact stat arithmetic
//! - [`error`] - Error types

pub mod ability;
pub mod barrier;
pub mod catalog;
pub mod element;
pub mod elemental;
pub mod error;
pub mod ledger;
pub mod matchup;
pub mod name;
pub mod numeric;
pub mod resolved;
pub mod resolver;
pub mod stat;
pub mod status;
pub mod transform;

// Re-export main types for convenience
pub use ability::{Ability, AbilityBuilder, TargetArity};
pub use barrier::Barrier;
pub use catalog::Catalog;
pub use element::{BaseStats, ElementType};
pub use elemental::Elemental;
pub use error::CombatError;
pub use ledger::EffectLedger;
pub use matchup::{Matchup, MatchupTable};
pub use name::Name;
pub use resolved::ResolvedStat;
pub use resolver::{CombatResolver, Hit, Resolution, BARRIER_PIERCING_ELEMENT};
pub use stat::Stat;
pub use status::{Status, StatusEffect};
