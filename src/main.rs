//! Mech Attrition - command line entry point
//!
//! Loads one unit from JSON, runs a single operation against it and prints
//! the result as JSON. With `--write` the updated unit is saved back.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use mech_attrition::commit::Journal;
use mech_attrition::damage::{DamageBundle, HitFlags};
use mech_attrition::escalation::RiskPool;
use mech_attrition::{AttritionEngine, EngineConfig, Result, Unit};

#[derive(Parser, Debug)]
#[command(name = "mech-attrition")]
#[command(about = "Resolve damage, risk tables and stabilize for a single unit")]
struct Args {
    /// Unit state as JSON
    #[arg(long)]
    unit: PathBuf,

    /// Engine config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic rolls, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Save the updated unit back to the --unit file
    #[arg(long)]
    write: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one hit
    Damage {
        #[arg(long, default_value_t = 0.0)]
        kinetic: f64,
        #[arg(long, default_value_t = 0.0)]
        energy: f64,
        #[arg(long, default_value_t = 0.0)]
        explosive: f64,
        #[arg(long, default_value_t = 0.0)]
        variable: f64,
        #[arg(long, default_value_t = 0.0)]
        burn: f64,
        #[arg(long, default_value_t = 0.0)]
        heat: f64,
        /// Armor piercing
        #[arg(long)]
        ap: bool,
        #[arg(long)]
        paracausal: bool,
    },
    /// Overheat check (or reroll at a given remaining stress)
    Overheat {
        #[arg(long)]
        reroll: Option<u32>,
    },
    /// Structure check (or reroll at a given remaining structure)
    Structure {
        #[arg(long)]
        reroll: Option<u32>,
    },
    /// Stabilize with a primary (cool, repair) and secondary
    /// (clear_burn, clear_own_condition, clear_allied_condition, reload) choice
    Stabilize { primary: String, secondary: String },
    /// Full repair
    Repair,
    /// Overcharge at the unit's current level
    Overcharge,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mech_attrition=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.dice.seed = args.seed;
    }

    let mut unit: Unit = serde_json::from_str(&fs::read_to_string(&args.unit)?)?;
    tracing::debug!(unit = %unit.id, name = %unit.name, kind = %unit.kind, "Loaded unit");

    let mut engine = AttritionEngine::seeded(config, Journal::new());

    let result = match args.command {
        Command::Damage {
            kinetic,
            energy,
            explosive,
            variable,
            burn,
            heat,
            ap,
            paracausal,
        } => {
            let damage = DamageBundle {
                kinetic,
                energy,
                explosive,
                variable,
                burn,
                heat,
            };
            let flags = HitFlags {
                armor_piercing: ap,
                paracausal,
            };
            serde_json::to_value(engine.apply_damage(&mut unit, damage, flags))?
        }
        Command::Overheat { reroll } => {
            let outcome = match reroll {
                Some(remaining) => engine.reroll(&unit, RiskPool::Stress, remaining)?,
                None => engine.overheat(&mut unit)?,
            };
            json!(outcome.map(|o| o.presentation()))
        }
        Command::Structure { reroll } => {
            let outcome = match reroll {
                Some(remaining) => engine.reroll(&unit, RiskPool::Structure, remaining)?,
                None => engine.structure(&mut unit)?,
            };
            json!(outcome.map(|o| o.presentation()))
        }
        Command::Stabilize { primary, secondary } => {
            json!({ "summary": engine.stabilize_named(&mut unit, &primary, &secondary)? })
        }
        Command::Repair => serde_json::to_value(engine.full_repair(&mut unit))?,
        Command::Overcharge => serde_json::to_value(engine.overcharge(&mut unit)?)?,
    };

    let (_, _, journal) = engine.into_parts();
    let output = json!({
        "result": result,
        "commits": journal.entries(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if args.write {
        fs::write(&args.unit, serde_json::to_string_pretty(&unit)?)?;
        tracing::info!(path = %args.unit.display(), "Wrote unit");
    }

    Ok(())
}
