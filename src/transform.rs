//! Stat transforms module.
//!
//! A net stat is computed by running its base value through a short chain
//! of transforms: one additive transform per active status that modifies
//! the stat, then a final clamp that keeps the stat positive.

use crate::name::Name;
use crate::numeric::StatValue;

/// Phase for transform application order.
///
/// Transforms are applied in phase order. Within each phase, transforms
/// are applied in the order they were collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformPhase {
    /// Transforms that add or subtract values.
    Additive,

    /// Final adjustments like clamping.
    Final,
}

/// Trait for transforms that modify stat values.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::transform::{AdditiveTransform, StatTransform};
/// use elemental_combat::numeric::ratio;
///
/// let burn = AdditiveTransform::new("Burn", ratio(-1, 5));
/// assert_eq!(burn.apply(ratio(6, 5)), ratio(1, 1));
/// ```
pub trait StatTransform: Send + Sync {
    /// Get the phase this transform belongs to.
    fn phase(&self) -> TransformPhase;

    /// Apply the transform to an input value.
    fn apply(&self, input: StatValue) -> StatValue;

    /// Get a human-readable description of this transform.
    ///
    /// Used for the breakdown in `ResolvedStat`.
    fn description(&self) -> String;
}

/// Adds a status's delta to a stat.
#[derive(Debug, Clone)]
pub struct AdditiveTransform {
    label: Name,
    delta: StatValue,
}

impl AdditiveTransform {
    /// Create a new additive transform.
    ///
    /// # Arguments
    ///
    /// * `label` - What contributed the delta (usually a status name)
    /// * `delta` - The amount to add (negative for penalties)
    pub fn new(label: impl Into<Name>, delta: StatValue) -> Self {
        Self {
            label: label.into(),
            delta,
        }
    }

    /// Get the delta.
    pub fn delta(&self) -> StatValue {
        self.delta
    }
}

impl StatTransform for AdditiveTransform {
    fn phase(&self) -> TransformPhase {
        TransformPhase::Additive
    }

    fn apply(&self, input: StatValue) -> StatValue {
        input + self.delta
    }

    fn description(&self) -> String {
        if self.delta < StatValue::from_integer(0) {
            format!("{} {}", self.label, self.delta)
        } else {
            format!("{} +{}", self.label, self.delta)
        }
    }
}

/// Keeps a value at or above a lower bound.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::transform::{FloorTransform, StatTransform};
/// use elemental_combat::numeric::{ratio, MIN_STAT};
///
/// let floor = FloorTransform::new(MIN_STAT);
/// assert_eq!(floor.apply(ratio(-3, 10)), MIN_STAT);
/// assert_eq!(floor.apply(ratio(9, 10)), ratio(9, 10));
/// ```
#[derive(Debug, Clone)]
pub struct FloorTransform {
    min: StatValue,
}

impl FloorTransform {
    /// Create a floor at `min`.
    pub fn new(min: StatValue) -> Self {
        Self { min }
    }
}

impl StatTransform for FloorTransform {
    fn phase(&self) -> TransformPhase {
        TransformPhase::Final
    }

    fn apply(&self, input: StatValue) -> StatValue {
        if input < self.min {
            self.min
        } else {
            input
        }
    }

    fn description(&self) -> String {
        format!("floor {}", self.min)
    }
}
