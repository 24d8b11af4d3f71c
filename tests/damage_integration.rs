//! Damage resolution integration tests
//!
//! End-to-end hits through the engine: statuses, armor policy, overshield,
//! heat routing, and what the unit owes afterwards.

use mech_attrition::commit::{Journal, NullSink};
use mech_attrition::core::{AutomationConfig, EngineConfig};
use mech_attrition::damage::{self, ArmorPolicy, DamageBundle, DamageType, HitFlags};
use mech_attrition::dice::ScriptedDice;
use mech_attrition::escalation::RiskPool;
use mech_attrition::unit::{Status, Unit};
use mech_attrition::AttritionEngine;

fn engine_with(config: EngineConfig) -> AttritionEngine<ScriptedDice, Journal> {
    AttritionEngine::new(config, ScriptedDice::default(), Journal::new())
}

fn engine() -> AttritionEngine<ScriptedDice, Journal> {
    engine_with(EngineConfig::default())
}

/// Armor 5 against non-resisted kinetic 3 and resisted energy 4: armor eats
/// all the kinetic first, the 2 left over comes off energy, and the resisted
/// energy is halved.
#[test]
fn test_armor_order_defender_favored() {
    let mech = Unit::mech("Everest")
        .with_armor(5.0)
        .with_resistance(DamageType::Energy);
    let hit = DamageBundle::new()
        .with(DamageType::Kinetic, 3.0)
        .with(DamageType::Energy, 4.0);

    let plan = damage::plan(&mech, hit, HitFlags::default(), ArmorPolicy::DefenderFavored);
    assert_eq!(plan.resolved.kinetic, 0.0);
    assert_eq!(plan.resolved.energy, 1.0);
    assert_eq!(plan.applied_to_hp, 1.0);
}

#[test]
fn test_armor_policy_comes_from_config() {
    let mut config = EngineConfig::default();
    config.automation.armor_policy = ArmorPolicy::AttackerFavored;
    let mut engine = engine_with(config);

    let mut mech = Unit::mech("Everest")
        .with_armor(5.0)
        .with_resistance(DamageType::Energy);
    let hit = DamageBundle::new()
        .with(DamageType::Kinetic, 3.0)
        .with(DamageType::Energy, 4.0);

    let report = engine.apply_damage(&mut mech, hit, HitFlags::default());
    assert_eq!(report.resolved.energy, 0.0);
    assert_eq!(report.resolved.kinetic, 2.0);
    assert_eq!(report.applied_to_hp, 2.0);
}

/// EXPOSED doubles before armor, so with no armor kinetic 2 lands as 4
#[test]
fn test_exposed_doubles_before_armor() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest")
        .with_armor(0.0)
        .with_status(Status::Exposed);

    let report = engine.apply_typed(&mut mech, DamageType::Kinetic, 2.0);
    assert_eq!(report.applied_to_hp, 4.0);
}

#[test]
fn test_exposed_leaves_burn_and_heat_alone() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest").with_status(Status::Exposed);
    let hit = DamageBundle::new()
        .with(DamageType::Burn, 2.0)
        .with(DamageType::Heat, 3.0);

    let report = engine.apply_damage(&mut mech, hit, HitFlags::default());
    assert_eq!(report.applied_to_hp, 2.0);
    assert_eq!(report.heat_gained, 3.0);
    assert_eq!(mech.burn, 2.0);
}

/// Overshield 5 against 8 damage: overshield empties, hit points lose 3
#[test]
fn test_overshield_absorbs_before_hp() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest").with_armor(0.0).with_overshield(5.0);

    let report = engine.apply_typed(&mut mech, DamageType::Explosive, 8.0);
    assert_eq!(report.absorbed, 5.0);
    assert_eq!(report.applied_to_hp, 3.0);
    assert_eq!(mech.overshield.value, 0.0);
    assert_eq!(mech.hp.value, 7.0);
}

#[test]
fn test_overshield_soaks_burn_too() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest").with_overshield(4.0);

    let report = engine.apply_typed(&mut mech, DamageType::Burn, 3.0);
    assert_eq!(report.applied_to_hp, 0.0);
    assert_eq!(mech.overshield.value, 1.0);
    assert_eq!(mech.burn, 3.0);
}

#[test]
fn test_overheat_pending_after_heat() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest").with_heat(4.0);

    let report = engine.apply_typed(&mut mech, DamageType::Heat, 4.0);
    assert_eq!(mech.heat.unwrap().value, 8.0);
    assert_eq!(report.pending, vec![RiskPool::Stress]);
}

#[test]
fn test_nothing_pending_with_automation_off() {
    let config = EngineConfig {
        automation: AutomationConfig {
            enabled: false,
            ..AutomationConfig::default()
        },
        ..EngineConfig::default()
    };
    let mut engine = engine_with(config);
    let mut mech = Unit::mech("Everest").with_armor(0.0);

    let report = engine.apply_typed(&mut mech, DamageType::Kinetic, 30.0);
    assert!(report.pending.is_empty());
    assert_eq!(mech.hp.value, -20.0);
}

#[test]
fn test_pilot_takes_heat_as_energy() {
    let mut engine = engine();
    let mut pilot = Unit::pilot("Cass");

    let report = engine.apply_typed(&mut pilot, DamageType::Heat, 3.0);
    assert_eq!(report.resolved.energy, 3.0);
    assert_eq!(report.heat_gained, 0.0);
    assert_eq!(pilot.hp.value, 3.0);
    assert!(report.pending.is_empty());
}

#[test]
fn test_mixed_hit_rounds_armored_damage_up() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest")
        .with_armor(0.0)
        .with_resistance(DamageType::Kinetic)
        .with_resistance(DamageType::Explosive);
    let hit = DamageBundle::new()
        .with(DamageType::Kinetic, 1.0)
        .with(DamageType::Explosive, 2.0);

    // 0.5 + 1.0 rounds up to 2
    let report = engine.apply_damage(&mut mech, hit, HitFlags::default());
    assert_eq!(report.applied_to_hp, 2.0);
}

#[test]
fn test_zero_hit_commits_nothing() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest");
    let report = engine.apply_damage(&mut mech, DamageBundle::new(), HitFlags::default());
    assert_eq!(report.applied_to_hp, 0.0);
    assert!(engine.sink().is_empty());
}

#[test]
fn test_each_hit_is_one_commit() {
    let mut engine = engine();
    let mut mech = Unit::mech("Everest").with_overshield(2.0);
    let hit = DamageBundle::new()
        .with(DamageType::Kinetic, 5.0)
        .with(DamageType::Burn, 1.0)
        .with(DamageType::Heat, 2.0);

    engine.apply_damage(&mut mech, hit, HitFlags::default());
    assert_eq!(engine.sink().len(), 1);

    let entry = engine.sink().last().unwrap();
    assert_eq!(entry.unit, mech.id);
    assert_eq!(entry.update.overshield, Some(0.0));
    assert_eq!(entry.update.heat, Some(2.0));
    assert_eq!(entry.update.burn, Some(1.0));
}

#[test]
fn test_null_sink_engine() {
    let mut engine = AttritionEngine::new(EngineConfig::default(), ScriptedDice::default(), NullSink);
    let mut mech = Unit::mech("Everest");
    let report = engine.apply_typed(&mut mech, DamageType::Kinetic, 3.0);
    assert_eq!(report.applied_to_hp, 2.0);
}
