//! Numeric types for stat values.
//!
//! Every stat, modifier and multiplier in a battle is an exact fraction.
//! Matchup multipliers such as 6/5 and 4/5 have to compose over many turns
//! without drift, so floating point never enters the damage pipeline.
//! Values only leave the rational domain at the very end, when a final
//! damage number is rounded up to a whole point.

use num_rational::{Ratio, Rational64};
use num_traits::{CheckedDiv, CheckedMul};

/// Type alias for stat values.
///
/// Serializes as a `[numerator, denominator]` pair.
pub type StatValue = Rational64;

/// Smallest value a net attack, defense or speed can reach.
///
/// Debuffs stack additively, so a pile of them could otherwise push a stat
/// to zero or below and break the defense division.
pub const MIN_STAT: StatValue = Rational64::new_raw(1, 10);

/// Create an exact fraction `numer / denom`, reduced to lowest terms.
///
/// # Panics
///
/// Panics if `denom` is zero.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::numeric::ratio;
///
/// assert_eq!(ratio(12, 10), ratio(6, 5));
/// ```
pub fn ratio(numer: i64, denom: i64) -> StatValue {
    Rational64::new(numer, denom)
}

/// Create a whole-number stat value.
pub fn whole(value: i64) -> StatValue {
    Rational64::from_integer(value)
}

/// Round a value up to the next whole number and truncate it to a
/// non-negative integer.
///
/// Any strictly positive value yields at least 1; zero and negative values
/// yield 0.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::numeric::{ceil_to_u64, ratio};
///
/// // 6/5 * 11 = 13.2
/// assert_eq!(ceil_to_u64(ratio(6, 5) * ratio(11, 1)), 14);
/// assert_eq!(ceil_to_u64(ratio(1, 1000)), 1);
/// assert_eq!(ceil_to_u64(ratio(-7, 2)), 0);
/// ```
pub fn ceil_to_u64(value: StatValue) -> u64 {
    ceil_wide(widen(value))
}

/// Scale `raw` damage by `attack * multiplier / defense` and round up.
///
/// The product is computed in 128-bit fractions, so any `u64` amount of
/// raw damage scales exactly. A result past `u64::MAX`, or a zero
/// `defense`, saturates at `u64::MAX` instead of panicking or wrapping.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::numeric::{ratio, scale_damage, MIN_STAT};
///
/// // Fire into Water: 1.2 * 0.8 / 1.1 * 10 = 8.72...
/// assert_eq!(scale_damage(ratio(12, 10), ratio(4, 5), ratio(11, 10), 10), 9);
/// assert_eq!(scale_damage(ratio(12, 10), ratio(6, 5), MIN_STAT, u64::MAX), u64::MAX);
/// ```
pub fn scale_damage(attack: StatValue, multiplier: StatValue, defense: StatValue, raw: u64) -> u64 {
    let scaled = widen(attack)
        .checked_mul(&widen(multiplier))
        .and_then(|value| value.checked_div(&widen(defense)))
        .and_then(|value| value.checked_mul(&Ratio::from_integer(i128::from(raw))));
    match scaled {
        Some(value) => ceil_wide(value),
        None if raw == 0 => 0,
        None => u64::MAX,
    }
}

fn widen(value: StatValue) -> Ratio<i128> {
    Ratio::new_raw(i128::from(*value.numer()), i128::from(*value.denom()))
}

/// Ceiling of a reduced fraction, clamped into `u64`.
fn ceil_wide(value: Ratio<i128>) -> u64 {
    let (numer, denom) = (*value.numer(), *value.denom());
    if numer <= 0 {
        return 0;
    }
    let rounded = numer / denom + i128::from(numer % denom != 0);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Convert an integer amount into a stat value.
///
/// Amounts above `i64::MAX` are clamped to it. Only health and mana go
/// through here, for display in stat breakdowns.
pub fn from_u64(value: u64) -> StatValue {
    whole(i64::try_from(value).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_reduces() {
        let r = ratio(96, 110);
        assert_eq!(*r.numer(), 48);
        assert_eq!(*r.denom(), 55);
    }

    #[test]
    fn test_ceil_rounds_up_fractions() {
        assert_eq!(ceil_to_u64(ratio(132, 10)), 14);
        assert_eq!(ceil_to_u64(ratio(960, 110)), 9);
    }

    #[test]
    fn test_ceil_keeps_whole_numbers() {
        assert_eq!(ceil_to_u64(whole(30)), 30);
        assert_eq!(ceil_to_u64(whole(0)), 0);
    }

    #[test]
    fn test_ceil_floors_negatives_at_zero() {
        assert_eq!(ceil_to_u64(ratio(-1, 3)), 0);
        assert_eq!(ceil_to_u64(whole(-40)), 0);
    }

    #[test]
    fn test_ceil_handles_extreme_values() {
        assert_eq!(ceil_to_u64(whole(i64::MAX)), i64::MAX as u64);
        assert_eq!(ceil_to_u64(ratio(i64::MAX, 2)), (i64::MAX as u64) / 2 + 1);
        assert_eq!(ceil_to_u64(whole(i64::MIN)), 0);
    }

    #[test]
    fn test_scale_damage_is_exact_for_large_amounts() {
        let (attack, multiplier, defense) = (ratio(12, 10), ratio(4, 5), ratio(11, 10));
        assert_eq!(scale_damage(attack, multiplier, defense, 10), 9);
        assert_eq!(
            scale_damage(attack, multiplier, defense, 1_000_000_000_000_000_000),
            872_727_272_727_272_728
        );
        assert_eq!(
            scale_damage(attack, multiplier, defense, u64::MAX),
            16_098_976_646_146_517_774
        );
        assert_eq!(scale_damage(attack, multiplier, defense, 0), 0);
    }

    #[test]
    fn test_scale_damage_saturates() {
        assert_eq!(scale_damage(ratio(6, 5), ratio(6, 5), MIN_STAT, u64::MAX), u64::MAX);
        assert_eq!(scale_damage(whole(i64::MAX), ratio(6, 5), MIN_STAT, 2), u64::MAX);
        assert_eq!(scale_damage(ratio(1, 1), ratio(1, 1), whole(0), 5), u64::MAX);
        assert_eq!(scale_damage(MIN_STAT, ratio(4, 5), whole(i64::MAX), 1), 1);
    }

    #[test]
    fn test_min_stat_is_reduced() {
        assert_eq!(MIN_STAT, ratio(1, 10));
    }
}
