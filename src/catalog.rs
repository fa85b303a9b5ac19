//! Named game data.
//!
//! The `Catalog` holds the named statuses and abilities the game ships
//! with, plus each element's movepool. It is loaded from JSON once, checked
//! while loading and immutable afterwards.
//!
//! In the data file abilities refer to statuses by name, so the status
//! definitions live in one place:
//!
//! ```json
//! {
//!   "statuses": [{ "name": "Burn", "stat": "Attack", "delta": [-1, 5] }],
//!   "abilities": [{
//!     "name": "Flamethrower", "element": "Fire", "level": 9,
//!     "damage": 60, "mana": 50, "barrier": 0, "arity": "Single",
//!     "effects": ["Burn"]
//!   }]
//! }
//! ```

use crate::ability::{Ability, TargetArity};
use crate::barrier::Barrier;
use crate::element::ElementType;
use crate::error::CombatError;
use crate::name::Name;
use crate::status::Status;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The standard catalog data.
const STANDARD_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    statuses: Vec<Status>,
    abilities: Vec<AbilityRecord>,
}

#[derive(Debug, Deserialize)]
struct AbilityRecord {
    name: Name,
    element: ElementType,
    level: u32,
    damage: i64,
    mana: i64,
    barrier: u64,
    arity: TargetArity,
    #[serde(default)]
    effects: Vec<Name>,
    #[serde(default)]
    barrier_effects: Vec<Name>,
    #[serde(default)]
    bypass_barriers: bool,
}

/// Named statuses, abilities and movepools.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Catalog, ElementType};
///
/// let catalog = Catalog::standard().unwrap();
/// let flamethrower = catalog.ability("Flamethrower").unwrap();
/// assert_eq!(flamethrower.base_damage(), 60);
/// assert_eq!(flamethrower.effects()[0].name().as_str(), "Burn");
///
/// let starters: Vec<_> = catalog
///     .learnable(ElementType::Fire, 3)
///     .map(|a| a.name().as_str())
///     .collect();
/// assert_eq!(starters, ["Ember", "Blaze"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    statuses: BTreeMap<Name, Status>,
    abilities: BTreeMap<Name, Ability>,
    learnsets: BTreeMap<ElementType, Vec<Name>>,
}

impl Catalog {
    /// Parse and check a catalog.
    ///
    /// # Errors
    ///
    /// * `CombatError::InvalidData` if the JSON is malformed or a name is
    ///   defined twice
    /// * `CombatError::IllegalStatus` if a status definition is malformed
    /// * `CombatError::UnknownStatus` if an ability refers to a status that
    ///   is not defined
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        let record: CatalogRecord = serde_json::from_str(json)?;
        let mut catalog = Self::default();

        for status in record.statuses {
            let name = status.name().clone();
            if catalog.statuses.insert(name.clone(), status).is_some() {
                return Err(CombatError::InvalidData(format!(
                    "status {} is defined twice",
                    name
                )));
            }
        }

        for ability in record.abilities {
            let name = ability.name.clone();
            let element = ability.element;
            let ability = catalog.build_ability(ability)?;
            if catalog.abilities.insert(name.clone(), ability).is_some() {
                return Err(CombatError::InvalidData(format!(
                    "ability {} is defined twice",
                    name
                )));
            }
            catalog.learnsets.entry(element).or_default().push(name);
        }

        tracing::debug!(
            statuses = catalog.statuses.len(),
            abilities = catalog.abilities.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn standard() -> Result<Self, CombatError> {
        Self::from_json(STANDARD_CATALOG)
    }

    /// Look up a status by name.
    pub fn status(&self, name: &str) -> Option<&Status> {
        self.statuses.get(name)
    }

    /// Look up an ability by name.
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.get(name)
    }

    /// Iterate over all statuses, ordered by name.
    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.statuses.values()
    }

    /// Iterate over all abilities, ordered by name.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }

    /// The abilities of `element`'s movepool available at `level`, in the
    /// order they are learned.
    pub fn learnable(&self, element: ElementType, level: u32) -> impl Iterator<Item = &Ability> {
        self.learnsets
            .get(&element)
            .into_iter()
            .flatten()
            .filter_map(move |name| self.abilities.get(name))
            .filter(move |ability| ability.min_level() <= level)
    }

    fn resolve_statuses(&self, names: &[Name]) -> Result<Vec<Status>, CombatError> {
        names
            .iter()
            .map(|name| {
                self.statuses
                    .get(name)
                    .cloned()
                    .ok_or_else(|| CombatError::UnknownStatus(name.clone()))
            })
            .collect()
    }

    fn build_ability(&self, record: AbilityRecord) -> Result<Ability, CombatError> {
        let effects = self.resolve_statuses(&record.effects)?;
        let on_hit = self.resolve_statuses(&record.barrier_effects)?;
        Ok(Ability::builder(record.name)
            .damage(record.damage)
            .mana_cost(record.mana)
            .arity(record.arity)
            .min_level(record.level)
            .effects(effects)
            .barrier(Barrier::new(record.barrier, record.arity, on_hit))
            .bypasses_barriers(record.bypass_barriers)
            .build())
    }
}
