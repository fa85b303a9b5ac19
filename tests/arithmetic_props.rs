//! Property tests for the arithmetic laws of combat.

use proptest::prelude::*;

use elemental_combat::numeric::{ceil_to_u64, ratio, scale_damage, MIN_STAT};
use elemental_combat::*;

fn element() -> impl Strategy<Value = ElementType> {
    (0usize..ElementType::COUNT).prop_map(|i| ElementType::ALL[i])
}

proptest! {
    /// Barrier harm removes at most its health and passes on the rest.
    #[test]
    fn barrier_harm_splits_damage(health in 0u64..100_000, amount in 0u64..100_000) {
        let mut barrier = Barrier::single(health);
        let bled = barrier.harm(amount);

        prop_assert_eq!(bled, amount.saturating_sub(health));
        prop_assert_eq!(barrier.health(), health.saturating_sub(amount));
        prop_assert_eq!(bled + (health - barrier.health()), amount);
    }

    /// An empty barrier absorbs nothing.
    #[test]
    fn empty_barrier_absorbs_nothing(amount in any::<u64>()) {
        let mut barrier = Barrier::empty(TargetArity::All);
        prop_assert_eq!(barrier.harm(amount), amount);
        prop_assert_eq!(barrier.health(), 0);
    }

    /// Rounding is always upward and never by a whole point or more.
    #[test]
    fn ceiling_rounds_up(numer in -100_000i64..100_000, denom in 1i64..1_000) {
        let value = ratio(numer, denom);
        let rounded = ceil_to_u64(value);
        if numer <= 0 {
            prop_assert_eq!(rounded, 0);
        } else {
            let rounded = ratio(i64::try_from(rounded).unwrap(), 1);
            prop_assert!(rounded >= value);
            prop_assert!(rounded - value < ratio(1, 1));
        }
    }

    /// Scaled damage never panics and never shrinks below the unscaled
    /// amount when the ratio is at least one.
    #[test]
    fn scale_damage_saturates(
        attack in 1i64..1_000_000,
        defense in 1i64..1_000_000,
        raw in any::<u64>(),
    ) {
        let attack = ratio(attack, 10);
        let defense = ratio(defense, 10);
        let dealt = scale_damage(attack, ratio(6, 5), defense, raw);
        if attack * ratio(6, 5) >= defense {
            prop_assert!(dealt >= raw);
        }
        prop_assert_eq!(scale_damage(attack, ratio(6, 5), MIN_STAT, u64::MAX), u64::MAX);
    }

    /// Any positive-damage hit with no barriers in the way deals at least 1.
    #[test]
    fn unshielded_hits_always_land(
        attacker in element(),
        defender in element(),
        damage in 1i64..500,
    ) {
        let resolver = CombatResolver::new().unwrap();
        let strike = Ability::builder("Strike").damage(damage).build();
        let mut source = Elemental::new(attacker).with_abilities([&strike]);
        let mut target = Elemental::new(defender);

        let resolution = resolver.resolve(&strike, &mut source, &mut [&mut target]).unwrap();
        prop_assert!(resolution.hits[0].damage >= 1);
        prop_assert_eq!(target.health(), 1000u64.saturating_sub(resolution.hits[0].damage));
    }

    /// Statuses live for exactly two rounds after they are applied.
    #[test]
    fn statuses_decay_after_two_rounds(stacks in 1usize..8) {
        let burn = Status::modifier("Burn", Stat::Attack, ratio(-1, 5)).unwrap();
        let mut ledger = EffectLedger::new();
        ledger.apply(std::iter::repeat(burn).take(stacks));

        ledger.advance_round();
        prop_assert_eq!(ledger.len(), stacks);
        ledger.advance_round();
        prop_assert!(ledger.is_empty());
        prop_assert_eq!(ledger.stat_modifier(Stat::Attack), ratio(0, 1));
    }

    /// Net stats never drop below the floor, however many debuffs stack.
    #[test]
    fn net_stats_stay_positive(element in element(), stacks in 0usize..20) {
        let poison = Status::modifier("Poison", Stat::Defense, ratio(-1, 5)).unwrap();
        let mut elemental = Elemental::new(element);
        elemental.apply_effects(std::iter::repeat(poison).take(stacks));
        prop_assert!(elemental.net_defense() >= numeric::MIN_STAT);
    }
}
