//! Engine facade
//!
//! `AttritionEngine` owns the config, the dice and the commit sink, and is
//! the one place that checks whether a unit may run an operation at all.
//! Each mutating call builds a single update, applies it, and commits it
//! once. Rejections at the entry boundary are logged and returned as
//! `AttritionError::Unsupported` or `AttritionError::MissingPool`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::actions::{ActionDescriptor, FollowUp, Stat};
use crate::commit::{CommitSink, UnitUpdate};
use crate::core::{AttritionError, EngineConfig, Result, UnitId};
use crate::damage::{self, DamageBundle, DamageType, HitFlags};
use crate::dice::{DiceRoller, SeededDice};
use crate::escalation::{
    self, pending_escalations, DestructionRoll, EscalationOutcome, RiskPool,
};
use crate::maintenance::{self, OverchargeResult};
use crate::stabilize::{self, PrimaryChoice, SecondaryChoice};
use crate::unit::Unit;

/// What a hit did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub applied_to_hp: f64,
    pub absorbed: f64,
    pub heat_gained: f64,
    pub resolved: DamageBundle,
    /// Checks the unit now owes, when automation is on
    pub pending: Vec<RiskPool>,
}

/// Result of dispatching a follow-up descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dispatched {
    Escalation { outcome: Option<EscalationOutcome> },
    StatCheck { stat: Stat },
    Destruction { roll: Option<DestructionRoll> },
}

pub struct AttritionEngine<D: DiceRoller, S: CommitSink> {
    config: EngineConfig,
    dice: D,
    sink: S,
}

impl<S: CommitSink> AttritionEngine<SeededDice, S> {
    /// Engine rolling with the config's seed (entropy if unset)
    pub fn seeded(config: EngineConfig, sink: S) -> Self {
        let dice = SeededDice::from_seed(config.dice.seed);
        Self::new(config, dice, sink)
    }
}

impl<D: DiceRoller, S: CommitSink> AttritionEngine<D, S> {
    pub fn new(config: EngineConfig, dice: D, sink: S) -> Self {
        Self { config, dice, sink }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    pub fn into_parts(self) -> (EngineConfig, D, S) {
        (self.config, self.dice, self.sink)
    }

    fn commit(&mut self, unit: UnitId, update: &UnitUpdate) {
        if update.is_empty() {
            return;
        }
        self.sink.commit(unit, update);
    }

    fn require_risk_pools(&self, unit: &Unit, operation: &'static str) -> Result<()> {
        if unit.capabilities().risk_pools {
            return Ok(());
        }
        let err = AttritionError::Unsupported {
            unit: unit.name.clone(),
            kind: unit.kind,
            operation,
        };
        warn!(unit = %unit.id, "{}", err);
        Err(err)
    }

    fn risk_tiers(&self, unit: &Unit, pool: RiskPool) -> Result<(u32, u32)> {
        match pool.of(unit) {
            Some(risk) => Ok((risk.tiers(), risk.max_tiers())),
            None => {
                let err = AttritionError::MissingPool {
                    unit: unit.name.clone(),
                    pool: match pool {
                        RiskPool::Stress => "stress",
                        RiskPool::Structure => "structure",
                    },
                };
                warn!(unit = %unit.id, "{}", err);
                Err(err)
            }
        }
    }

    /// Resolve a hit against a unit
    pub fn apply_damage(&mut self, unit: &mut Unit, damage: DamageBundle, flags: HitFlags) -> DamageReport {
        let plan = damage::plan(unit, damage, flags, self.config.automation.armor_policy);
        plan.update.apply(unit);
        self.commit(unit.id, &plan.update);

        let pending = pending_escalations(unit, &self.config.automation);
        debug!(
            unit = %unit.id,
            applied = plan.applied_to_hp,
            absorbed = plan.absorbed,
            heat = plan.heat_gained,
            ?pending,
            "Resolved damage"
        );

        DamageReport {
            applied_to_hp: plan.applied_to_hp,
            absorbed: plan.absorbed,
            heat_gained: plan.heat_gained,
            resolved: plan.resolved,
            pending,
        }
    }

    /// Spend stress if the unit is overheating, then roll the overheat table
    pub fn overheat(&mut self, unit: &mut Unit) -> Result<Option<EscalationOutcome>> {
        self.escalate(unit, RiskPool::Stress)
    }

    /// Spend structure if the unit is out of hit points, then roll the structure table
    pub fn structure(&mut self, unit: &mut Unit) -> Result<Option<EscalationOutcome>> {
        self.escalate(unit, RiskPool::Structure)
    }

    fn escalate(&mut self, unit: &mut Unit, pool: RiskPool) -> Result<Option<EscalationOutcome>> {
        let operation = match pool {
            RiskPool::Stress => "overheat",
            RiskPool::Structure => "take structure damage",
        };
        self.require_risk_pools(unit, operation)?;
        self.risk_tiers(unit, pool)?;

        let table = pool.table();
        match escalation::consume(table, unit) {
            Some(update) => {
                self.commit(unit.id, &update);
                info!(unit = %unit.id, %pool, "Spent one {}", pool);
            }
            // A depleted pool that is still overflowing rolls its last entry
            None if table.overflowing(unit) => {}
            None => {
                info!(unit = %unit.id, %pool, "No {} check needed", pool);
                return Ok(None);
            }
        }

        let (remaining, max) = self.risk_tiers(unit, pool)?;
        Ok(escalation::roll_table(table, unit.id, remaining, max, &mut self.dice))
    }

    /// Roll a pool's table at an explicit `remaining`, leaving the unit alone
    pub fn reroll(&mut self, unit: &Unit, pool: RiskPool, remaining: u32) -> Result<Option<EscalationOutcome>> {
        self.require_risk_pools(unit, "reroll")?;
        let (_, max) = self.risk_tiers(unit, pool)?;
        Ok(escalation::roll_table(pool.table(), unit.id, remaining, max, &mut self.dice))
    }

    /// Run a follow-up descriptor against the unit it names
    pub fn dispatch(&mut self, unit: &Unit, action: &ActionDescriptor) -> Result<Dispatched> {
        let follow_up = action.follow_up()?;
        if follow_up.unit() != unit.id {
            return Err(AttritionError::InvalidAction(format!(
                "{} targets unit {}, not {}",
                action.label,
                follow_up.unit(),
                unit.id
            )));
        }
        debug!(unit = %unit.id, label = %action.label, "Dispatching follow-up");

        match follow_up {
            FollowUp::Reroll { pool, remaining, .. } => Ok(Dispatched::Escalation {
                outcome: self.reroll(unit, pool, remaining)?,
            }),
            FollowUp::StatCheck { stat, .. } => Ok(Dispatched::StatCheck { stat }),
            FollowUp::RollForDestruction { .. } => Ok(Dispatched::Destruction {
                roll: escalation::roll_destruction(&mut self.dice),
            }),
        }
    }

    pub fn stabilize(&mut self, unit: &mut Unit, primary: PrimaryChoice, secondary: SecondaryChoice) -> Result<String> {
        let result = stabilize::plan_stabilize(unit, primary, secondary).inspect_err(|err| {
            warn!(unit = %unit.id, "{}", err);
        })?;
        result.update.apply(unit);
        self.commit(unit.id, &result.update);
        info!(unit = %unit.id, ?primary, ?secondary, "Stabilized");
        Ok(result.summary)
    }

    /// Stabilize from free-text choices; unknown choices do nothing
    pub fn stabilize_named(&mut self, unit: &mut Unit, primary: &str, secondary: &str) -> Result<String> {
        stabilize::check_stabilize(unit).inspect_err(|err| {
            warn!(unit = %unit.id, "{}", err);
        })?;
        match (
            primary.parse::<PrimaryChoice>(),
            secondary.parse::<SecondaryChoice>(),
        ) {
            (Ok(primary), Ok(secondary)) => self.stabilize(unit, primary, secondary),
            _ => {
                debug!(unit = %unit.id, primary, secondary, "Unrecognized stabilize choice");
                Ok(String::new())
            }
        }
    }

    pub fn full_repair(&mut self, unit: &mut Unit) -> UnitUpdate {
        let update = maintenance::full_repair(unit);
        self.commit(unit.id, &update);
        info!(unit = %unit.id, "Fully repaired");
        update
    }

    pub fn overcharge(&mut self, unit: &mut Unit) -> Result<Option<OverchargeResult>> {
        let result = maintenance::plan_overcharge(unit, &self.config.overcharge, &mut self.dice)
            .inspect_err(|err| warn!(unit = %unit.id, "{}", err))?;
        if let Some(result) = &result {
            result.update.apply(unit);
            self.commit(unit.id, &result.update);
            info!(unit = %unit.id, heat = result.heat_gained, level = result.level, "Overcharged");
        }
        Ok(result)
    }

    /// Damage from a single type, for callers that don't build bundles
    pub fn apply_typed(&mut self, unit: &mut Unit, damage_type: DamageType, amount: f64) -> DamageReport {
        self.apply_damage(unit, DamageBundle::new().with(damage_type, amount), HitFlags::default())
    }
}
