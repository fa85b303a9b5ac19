use elemental_combat::numeric::ratio;
use elemental_combat::*;

fn even_stats(element: ElementType) -> BaseStats {
    BaseStats {
        attack: ratio(1, 1),
        defense: ratio(1, 1),
        ..BaseStats::of(element)
    }
}

/// Fire attacking Water at a disadvantage: ceil(1.2 * 0.8 / 1.1 * 10) = 9.
#[test]
fn test_fire_versus_water() {
    let resolver = CombatResolver::new().unwrap();
    let ember = Ability::builder("Ember").damage(10).mana_cost(10).build();
    let mut fire = Elemental::new(ElementType::Fire).with_abilities([&ember]);
    let mut water = Elemental::new(ElementType::Water);

    assert_eq!(
        fire.matchup_against(&water, resolver.table()),
        Matchup::Disadvantage
    );

    resolver
        .resolve(&ember, &mut fire, &mut [&mut water])
        .unwrap();
    assert_eq!(water.health(), 991);
}

/// A 50-health barrier soaks 50 of an 80-damage hit.
#[test]
fn test_barrier_bleed_through() {
    let resolver = CombatResolver::with_table(MatchupTable::neutral());
    let slam = Ability::builder("Slam").damage(80).build();
    let mut source =
        Elemental::with_stats(ElementType::Earth, even_stats(ElementType::Earth))
            .with_abilities([&slam]);
    let mut target = Elemental::with_stats(ElementType::Sand, even_stats(ElementType::Sand));
    target.set_single_barrier(&Barrier::single(50));

    let resolution = resolver
        .resolve(&slam, &mut source, &mut [&mut target])
        .unwrap();

    assert_eq!(resolution.hits[0].damage, 30);
    assert_eq!(target.health(), 970);
    assert_eq!(target.single_barrier().health(), 0);
}

#[test]
fn test_no_targets_changes_nothing() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let ember = catalog.ability("Ember").unwrap();
    let mut fire = Elemental::new(ElementType::Fire).with_abilities([ember]);
    let before = fire.clone();

    assert_eq!(
        resolver.resolve(ember, &mut fire, &mut []),
        Err(CombatError::NoTargets)
    );
    assert_eq!(fire, before);
}

#[test]
fn test_healing_ignores_barriers() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let reservoir = catalog.ability("Reservoir").unwrap();
    let mut water = Elemental::new(ElementType::Water).with_abilities([reservoir]);
    let mut ally = Elemental::new(ElementType::Earth);
    ally.harm(400).unwrap();
    ally.set_single_barrier(&Barrier::single(150));
    ally.set_all_barrier(&Barrier::all(300));

    resolver
        .resolve(reservoir, &mut water, &mut [&mut ally])
        .unwrap();

    assert_eq!(ally.health(), 700);
    assert_eq!(ally.single_barrier().health(), 150);
    assert_eq!(ally.all_barrier().health(), 300);
    assert_eq!(water.mana(), 410);
}

#[test]
fn test_effects_decay_after_two_rounds() {
    let catalog = Catalog::standard().unwrap();
    let daze = catalog.status("Daze").unwrap().clone();
    let breeze = catalog.ability("Breeze").unwrap();
    let mut wind = Elemental::new(ElementType::Wind).with_abilities([breeze]);

    wind.apply_effects([daze]);
    assert!(!wind.can_use(breeze));
    wind.end_round();
    assert!(!wind.can_use(breeze));
    wind.end_round();
    assert!(wind.can_use(breeze));
    assert!(wind.ledger().is_empty());
}

#[test]
fn test_daze_blocks_attacks_but_not_support() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let stone_edge = catalog.ability("StoneEdge").unwrap();
    let mut earth = Elemental::new(ElementType::Earth)
        .with_level(15)
        .with_abilities(catalog.learnable(ElementType::Earth, 15));
    let mut wind = Elemental::new(ElementType::Wind)
        .with_level(9)
        .with_abilities(catalog.learnable(ElementType::Wind, 9));

    resolver
        .resolve(stone_edge, &mut earth, &mut [&mut wind])
        .unwrap();

    let gust = catalog.ability("Gust").unwrap();
    let derecho = catalog.ability("Derecho").unwrap();
    assert_eq!(
        resolver.resolve(gust, &mut wind, &mut [&mut earth]),
        Err(CombatError::IllegalAbility {
            element: ElementType::Wind,
            ability: Name::new("Gust"),
        })
    );

    let mut field = vec![wind];
    resolver.resolve_in(derecho, &mut field, 0, &[0]).unwrap();
    assert_eq!(field[0].single_barrier().health(), 50);
}

/// Water spends all its mana on Torrent against Fire:
/// ceil(1.0 * 1.2 / 0.9 * 50) = 67 per hit, 12 hits for 480 mana.
#[test]
fn test_duel_until_out_of_mana() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let torrent = catalog.ability("Torrent").unwrap();
    let mut water = Elemental::new(ElementType::Water).with_abilities([torrent]);
    let mut fire = Elemental::new(ElementType::Fire);

    let mut uses = 0;
    let err = loop {
        match resolver.resolve(torrent, &mut water, &mut [&mut fire]) {
            Ok(resolution) => {
                assert_eq!(resolution.total_damage(), 67);
                uses += 1;
            }
            Err(err) => break err,
        }
    };

    assert_eq!(uses, 12);
    assert_eq!(
        err,
        CombatError::InsufficientMana {
            ability: Name::new("Torrent"),
            required: 40,
            available: 20,
        }
    );
    assert_eq!(fire.health(), 1000 - 12 * 67);
    assert!(!fire.is_fainted());
}

#[test]
fn test_fainting() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let inferno = catalog.ability("Inferno").unwrap();
    let mut fire = Elemental::new(ElementType::Fire).with_abilities([inferno]);
    let mut wind = Elemental::new(ElementType::Wind);

    // ceil(1.2 * 1.0 / 0.9 * 250) = 334 per hit
    for _ in 0..3 {
        resolver
            .resolve(inferno, &mut fire, &mut [&mut wind])
            .unwrap();
    }
    assert_eq!(wind.health(), 0);
    assert!(wind.is_fainted());
}

#[test]
fn test_serialized_elemental_behaves_the_same() {
    let catalog = Catalog::standard().unwrap();
    let mut earth = Elemental::new(ElementType::Earth)
        .with_level(30)
        .with_abilities(catalog.learnable(ElementType::Earth, 30));
    earth.harm(123).unwrap();
    earth.apply_effects([catalog.status("Poison").unwrap().clone()]);
    earth.end_round();
    earth.apply_effects([catalog.status("Rage").unwrap().clone()]);
    earth.set_single_barrier(&Barrier::single(80));
    earth.set_all_barrier(&Barrier::new(
        300,
        TargetArity::All,
        [catalog.status("Burn").unwrap().clone()],
    ));

    let json = serde_json::to_string(&earth).unwrap();
    let restored: Elemental = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, earth);
    assert_eq!(restored.net_attack(), earth.net_attack());
    assert_eq!(restored.net_defense(), earth.net_defense());
    assert_eq!(restored.net_speed(), earth.net_speed());
    for ability in catalog.abilities() {
        assert_eq!(restored.can_use(ability), earth.can_use(ability));
    }
}

#[test]
fn test_resolution_report_serializes() {
    let resolver = CombatResolver::new().unwrap();
    let catalog = Catalog::standard().unwrap();
    let wildfire = catalog.ability("Wildfire").unwrap();
    let mut fire = Elemental::new(ElementType::Fire).with_abilities([wildfire]);
    let mut a = Elemental::new(ElementType::Ice);
    let mut b = Elemental::new(ElementType::Flora);

    let resolution = resolver
        .resolve(wildfire, &mut fire, &mut [&mut a, &mut b])
        .unwrap();
    assert_eq!(resolution.hits.len(), 2);

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["ability"], "Wildfire");
    assert_eq!(json["mana_cost"], 90);
    let back: Resolution = serde_json::from_value(json).unwrap();
    assert_eq!(back, resolution);
}

#[test]
fn test_stat_breakdown_lists_statuses() {
    let catalog = Catalog::standard().unwrap();
    let mut fire = Elemental::new(ElementType::Fire);
    fire.apply_effects([
        catalog.status("ElectronFlow").unwrap().clone(),
        catalog.status("Burn").unwrap().clone(),
    ]);

    let attack = fire.resolve_stat(Stat::Attack);
    let labels: Vec<&str> = attack.transforms.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(labels, ["ElectronFlow +1/5", "Burn -1/5", "floor 1/10"]);
    assert_eq!(attack.value, ratio(6, 5));
}
