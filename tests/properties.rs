//! Property tests for the numeric core

use mech_attrition::damage::{self, ArmorPolicy, DamageBundle, DamageType, HitFlags};
use mech_attrition::dice::{DiceExpr, DiceRoll, Keep, ScriptedDice};
use mech_attrition::escalation::{roll_table, OverheatTable, RiskTable, StructureTable};
use mech_attrition::maintenance::full_repair;
use mech_attrition::unit::{Resistances, Status, Unit};
use mech_attrition::UnitId;
use proptest::prelude::*;

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop::sample::select(DamageType::all().to_vec())
}

fn bundle() -> impl Strategy<Value = DamageBundle> {
    prop::collection::vec((damage_type(), -5.0f64..30.0), 0..8).prop_map(|pairs| DamageBundle::from_pairs(pairs))
}

fn policy() -> impl Strategy<Value = ArmorPolicy> {
    prop_oneof![Just(ArmorPolicy::DefenderFavored), Just(ArmorPolicy::AttackerFavored)]
}

fn resistances() -> impl Strategy<Value = Resistances> {
    prop::collection::vec(damage_type(), 0..4).prop_map(|types| types.into_iter().collect())
}

proptest! {
    /// No magnitude ever comes out negative, whatever the policy
    #[test]
    fn test_resolved_damage_never_negative(
        hit in bundle(),
        armor in 0.0f64..10.0,
        resist in resistances(),
        policy in policy(),
        exposed in any::<bool>(),
        armor_piercing in any::<bool>(),
    ) {
        let mut mech = Unit::mech("Everest").with_armor(armor);
        mech.resistances = resist;
        if exposed {
            mech.statuses.insert(Status::Exposed);
        }
        let flags = HitFlags { armor_piercing, paracausal: false };

        let plan = damage::plan(&mech, hit, flags, policy);
        for (damage_type, amount) in plan.resolved.iter() {
            prop_assert!(amount >= 0.0, "{} went negative: {}", damage_type, amount);
        }
        prop_assert!(plan.applied_to_hp >= 0.0);
        prop_assert!(plan.absorbed >= 0.0);
    }

    /// Overshield and hit points together account for the whole hit
    #[test]
    fn test_overshield_and_hp_split_the_total(
        hit in bundle(),
        shield in 0.0f64..20.0,
    ) {
        let mut mech = Unit::mech("Everest").with_armor(0.0).with_overshield(shield);
        let hp_before = mech.hp.value;
        let plan = damage::plan(&mech, hit, HitFlags::default(), ArmorPolicy::default());
        let total = plan.resolved.armored_total().ceil() + plan.resolved.burn;

        prop_assert!((plan.absorbed + plan.applied_to_hp - total).abs() < 1e-9);
        prop_assert!(plan.absorbed <= shield + 1e-9);

        damage::resolve(&mut mech, hit, HitFlags::default(), ArmorPolicy::default());
        prop_assert!((hp_before - mech.hp.value - plan.applied_to_hp).abs() < 1e-9);
    }

    /// A full pool never rolls
    #[test]
    fn test_full_pool_never_rolls(max in 1u32..8, extra in 0u32..4) {
        let mut dice = ScriptedDice::new([1, 1, 1, 1, 1, 1, 1, 1]);
        prop_assert!(roll_table(&StructureTable, UnitId::new(), max + extra, max, &mut dice).is_none());
        prop_assert_eq!(dice.remaining(), 8);
    }

    /// Two or more ones always land on entry 0
    #[test]
    fn test_multiple_ones_always_index_zero(
        max in 3u32..7,
        others in prop::collection::vec(1u32..=6, 0..4),
    ) {
        let remaining = 1;
        let count = (max - remaining) as usize;
        let mut faces = vec![1, 1];
        faces.extend(others.into_iter().take(count - 2));
        while faces.len() < count {
            faces.push(6);
        }

        let mut dice = ScriptedDice::new(faces);
        let outcome = roll_table(&OverheatTable, UnitId::new(), remaining, max, &mut dice).unwrap();
        prop_assert_eq!(outcome.index, 0);
        prop_assert_eq!(outcome.title.as_str(), OverheatTable.title(0));
    }

    /// Without a double one the entry is the lowest die
    #[test]
    fn test_outcome_index_is_lowest_die(faces in prop::collection::vec(2u32..=6, 1..4)) {
        let max = 4;
        let remaining = max - faces.len() as u32;
        let lowest = *faces.iter().min().unwrap() as usize;
        let mut dice = ScriptedDice::new(faces);
        let outcome = roll_table(&StructureTable, UnitId::new(), remaining, max, &mut dice).unwrap();
        prop_assert_eq!(outcome.index, lowest);
    }

    /// Full repair brings every pool back regardless of where it started
    #[test]
    fn test_full_repair_restores_everything(
        hp in -20.0f64..10.0,
        heat in 0.0f64..20.0,
        stress in 0.0f64..4.0,
        structure in 0.0f64..4.0,
        burn in 0.0f64..10.0,
        level in 0usize..4,
    ) {
        let mut mech = Unit::mech("Everest").with_heat(heat);
        mech.hp.set(hp);
        mech.burn = burn;
        mech.overcharge = level;
        if let Some(pool) = mech.stress.as_mut() { pool.set(stress); }
        if let Some(pool) = mech.structure.as_mut() { pool.set(structure); }

        full_repair(&mut mech);

        prop_assert!(mech.hp.is_full());
        prop_assert_eq!(mech.heat.unwrap().value, 0.0);
        prop_assert!(mech.stress.unwrap().is_full());
        prop_assert!(mech.structure.unwrap().is_full());
        prop_assert_eq!(mech.burn, 0.0);
        prop_assert_eq!(mech.overcharge, 0);
    }

    /// Changing max HP never leaves a standing unit below 1
    #[test]
    fn test_max_hp_corrector_floors_at_one(current in 1.0f64..30.0, new_max in 1.0f64..30.0) {
        let mut mech = Unit::mech("Everest");
        mech.hp.set(current);
        mech.set_max_hp(new_max);
        prop_assert!(mech.hp.value >= 1.0);
        prop_assert_eq!(mech.hp.max, new_max);
    }

    /// Printing and parsing agree for dice expressions
    #[test]
    fn test_dice_notation_round_trip(
        count in 1u32..10,
        sides in 1u32..20,
        keep in prop_oneof![Just(Keep::All), (1u32..3).prop_map(Keep::Lowest), (1u32..3).prop_map(Keep::Highest)],
        modifier in -10i64..10,
    ) {
        let expr = DiceExpr { count, sides, keep, modifier };
        let parsed: DiceExpr = expr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, expr);
    }

    /// Keep-lowest totals are the smallest face
    #[test]
    fn test_keep_lowest_total(faces in prop::collection::vec(1u32..=6, 1..6)) {
        let expr = DiceExpr::keep_lowest(faces.len() as u32, 6);
        let roll = DiceRoll::from_faces(expr, faces.clone());
        prop_assert_eq!(roll.total, Some(i64::from(*faces.iter().min().unwrap())));
    }
}

#[test]
fn test_attacker_favored_with_armor_to_spare() {
    let mech = Unit::mech("Everest")
        .with_armor(20.0)
        .with_resistance(DamageType::Energy);
    let hit = DamageBundle::new()
        .with(DamageType::Kinetic, 3.0)
        .with(DamageType::Energy, 4.0);
    let plan = damage::plan(&mech, hit, HitFlags::default(), ArmorPolicy::AttackerFavored);
    assert_eq!(plan.resolved.kinetic, 0.0);
    assert_eq!(plan.resolved.energy, 0.0);
    assert_eq!(plan.applied_to_hp, 0.0);
}
