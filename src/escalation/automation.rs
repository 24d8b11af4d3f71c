//! Which checks a unit owes after a write

use crate::core::AutomationConfig;
use crate::unit::Unit;

use super::table::RiskPool;

/// Pools whose consume trigger currently holds
///
/// Empty when automation is off or the unit has no risk pools.
pub fn pending_escalations(unit: &Unit, automation: &AutomationConfig) -> Vec<RiskPool> {
    if !automation.enabled || !unit.capabilities().risk_pools {
        return Vec::new();
    }
    RiskPool::all()
        .iter()
        .copied()
        .filter(|pool| pool.table().triggered(unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pending_on_healthy_mech() {
        let mech = Unit::mech("Everest");
        assert!(pending_escalations(&mech, &AutomationConfig::default()).is_empty());
    }

    #[test]
    fn test_both_pools_pending() {
        let mut mech = Unit::mech("Everest").with_heat(8.0);
        mech.hp.set(0.0);
        assert_eq!(
            pending_escalations(&mech, &AutomationConfig::default()),
            vec![RiskPool::Stress, RiskPool::Structure]
        );
    }

    #[test]
    fn test_disabled_automation_reports_nothing() {
        let mech = Unit::mech("Everest").with_heat(8.0);
        let config = AutomationConfig {
            enabled: false,
            ..AutomationConfig::default()
        };
        assert!(pending_escalations(&mech, &config).is_empty());
    }

    #[test]
    fn test_deployables_never_pending() {
        let mut drone = Unit::deployable("Drone").with_heat(20.0);
        drone.hp.set(-1.0);
        assert!(pending_escalations(&drone, &AutomationConfig::default()).is_empty());
    }
}
