//! Type matchups.
//!
//! The `MatchupTable` maps every ordered (attacker, defender) pair of
//! element types to exactly one `Matchup`. Tables are validated when they
//! are built: a missing pair or a pair assigned twice is a configuration
//! error, never a silent default. Once built, a table is read-only and can
//! be shared between any number of battles.

use crate::element::ElementType;
use crate::error::CombatError;
use crate::numeric::{ratio, StatValue};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// The standard matchup data, grouped per attacker.
const STANDARD_MATCHUPS: &str = include_str!("../data/matchups.json");

/// The type relationship between an attacker and a defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Matchup {
    Advantage,
    Neutral,
    Disadvantage,
}

impl Matchup {
    /// The damage multiplier bound to this matchup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemental_combat::Matchup;
    /// use elemental_combat::numeric::ratio;
    ///
    /// assert_eq!(Matchup::Advantage.multiplier(), ratio(6, 5));
    /// assert_eq!(Matchup::Disadvantage.multiplier(), ratio(4, 5));
    /// ```
    pub fn multiplier(self) -> StatValue {
        match self {
            Matchup::Advantage => ratio(6, 5),
            Matchup::Neutral => ratio(1, 1),
            Matchup::Disadvantage => ratio(4, 5),
        }
    }
}

/// Matchup assignments in the shape they are written in: for each attacker,
/// the defenders grouped by matchup.
pub type MatchupAssignments = BTreeMap<ElementType, BTreeMap<Matchup, Vec<ElementType>>>;

/// A validated, total matchup table.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{ElementType, Matchup, MatchupTable};
///
/// let table = MatchupTable::standard().unwrap();
/// assert_eq!(table.lookup(ElementType::Fire, ElementType::Water), Matchup::Disadvantage);
/// assert_eq!(table.lookup(ElementType::Water, ElementType::Fire), Matchup::Advantage);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupTable {
    matchups: [[Matchup; ElementType::COUNT]; ElementType::COUNT],
}

impl MatchupTable {
    /// Build a table from per-attacker assignments.
    ///
    /// # Errors
    ///
    /// * `CombatError::DuplicateTypeAssignment` if a defender appears under
    ///   more than one matchup (or twice under one) for the same attacker
    /// * `CombatError::UncoveredType` if any attacker/defender pair has no
    ///   matchup
    pub fn from_assignments(assignments: &MatchupAssignments) -> Result<Self, CombatError> {
        Self::from_groups(assignments.iter().flat_map(|(&attacker, groups)| {
            groups
                .iter()
                .map(move |(&matchup, defenders)| (attacker, matchup, defenders.as_slice()))
        }))
    }

    /// Parse and validate a table from JSON of the form
    /// `{ "Fire": { "Advantage": ["Ice", ...], "Neutral": [...], ... }, ... }`.
    ///
    /// A repeated attacker or matchup key is not collapsed: every listing is
    /// checked, so a pair assigned under both is a
    /// `CombatError::DuplicateTypeAssignment`.
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        let entries: Entries<ElementType, Entries<Matchup, Vec<ElementType>>> =
            serde_json::from_str(json)?;
        Self::from_groups(entries.0.iter().flat_map(|(attacker, groups)| {
            groups
                .0
                .iter()
                .map(move |(matchup, defenders)| (*attacker, *matchup, defenders.as_slice()))
        }))
    }

    fn from_groups<'a, I>(groups: I) -> Result<Self, CombatError>
    where
        I: IntoIterator<Item = (ElementType, Matchup, &'a [ElementType])>,
    {
        let mut cells = [[None; ElementType::COUNT]; ElementType::COUNT];

        for (attacker, matchup, defenders) in groups {
            for &defender in defenders {
                let cell = &mut cells[attacker.index()][defender.index()];
                if cell.is_some() {
                    return Err(CombatError::DuplicateTypeAssignment { attacker, defender });
                }
                *cell = Some(matchup);
            }
        }

        let mut matchups = [[Matchup::Neutral; ElementType::COUNT]; ElementType::COUNT];
        for attacker in ElementType::ALL {
            for defender in ElementType::ALL {
                matchups[attacker.index()][defender.index()] = cells[attacker.index()]
                    [defender.index()]
                .ok_or(CombatError::UncoveredType { attacker, defender })?;
            }
        }

        Ok(Self { matchups })
    }

    /// The standard table shipped with the crate.
    pub fn standard() -> Result<Self, CombatError> {
        let table = Self::from_json(STANDARD_MATCHUPS)?;
        tracing::debug!("loaded standard matchup table");
        Ok(table)
    }

    /// A table in which every pair is neutral.
    pub fn neutral() -> Self {
        Self {
            matchups: [[Matchup::Neutral; ElementType::COUNT]; ElementType::COUNT],
        }
    }

    /// Look up the matchup of `attacker` hitting `defender`.
    pub fn lookup(&self, attacker: ElementType, defender: ElementType) -> Matchup {
        self.matchups[attacker.index()][defender.index()]
    }
}

/// The entries of a JSON object in document order, repeated keys kept.
struct Entries<K, V>(Vec<(K, V)>);

impl<'de, K, V> Deserialize<'de> for Entries<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
        where
            K: Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = Entries<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
