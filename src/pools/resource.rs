//! Bounded numeric cells
//!
//! Writes through `set`/`add` never fail. Out-of-range values are clamped,
//! except on hit points, which must be able to go negative so that the
//! structure check can see how far past zero a hit landed.

use serde::{Deserialize, Deserializer, Serialize};

/// How a pool treats writes outside `[min, max]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Writes are clamped into range
    #[default]
    Clamped,
    /// Writes are stored as given (hit points)
    Unbounded,
}

/// A `{value, max, min}` cell
///
/// The clamp policy is not part of the stored form. Pools load as
/// `Clamped`; the hit point field opts out through [`deserialize_hit_points`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedResource {
    pub value: f64,
    pub max: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(skip)]
    pub policy: ClampPolicy,
}

/// Loads a pool as hit points, whatever the payload says
pub fn deserialize_hit_points<'de, D>(deserializer: D) -> Result<BoundedResource, D::Error>
where
    D: Deserializer<'de>,
{
    let pool = BoundedResource::deserialize(deserializer)?;
    Ok(BoundedResource {
        policy: ClampPolicy::Unbounded,
        ..pool
    })
}

impl BoundedResource {
    /// Clamped pool starting at `value`
    pub fn new(value: f64, max: f64) -> Self {
        let mut pool = Self {
            value: 0.0,
            max,
            min: 0.0,
            policy: ClampPolicy::Clamped,
        };
        pool.set(value);
        pool
    }

    /// Clamped pool starting full
    pub fn full(max: f64) -> Self {
        Self::new(max, max)
    }

    /// Clamped pool starting empty
    pub fn empty(max: f64) -> Self {
        Self::new(0.0, max)
    }

    /// Hit point pool: accepts any value, including negative
    pub fn hit_points(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            min: 0.0,
            policy: ClampPolicy::Unbounded,
        }
    }

    /// Same pool with a different lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        let value = self.value;
        self.set(value);
        self
    }

    /// The value a `set(value)` would store
    pub fn clamped(&self, value: f64) -> f64 {
        match self.policy {
            // max/min rather than f64::clamp: a misconfigured pool with
            // min > max must not panic
            ClampPolicy::Clamped => value.max(self.min).min(self.max),
            ClampPolicy::Unbounded => value,
        }
    }

    /// Externally driven write
    pub fn set(&mut self, value: f64) {
        self.value = self.clamped(value);
    }

    /// Externally driven relative write
    pub fn add(&mut self, delta: f64) {
        self.set(self.value + delta);
    }

    /// Engine write that skips clamping
    ///
    /// Heat gained from damage must be able to exceed capacity so the
    /// overheat trigger can detect it.
    pub fn overflow_set(&mut self, value: f64) {
        self.value = value;
    }

    /// Relative form of `overflow_set`
    pub fn overflow_add(&mut self, delta: f64) {
        self.value += delta;
    }

    /// Restore to max
    pub fn refill(&mut self) {
        self.value = self.max;
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.value <= self.min
    }

    /// Whether the value is above max (only reachable through overflow writes
    /// or unbounded pools)
    pub fn is_overflowing(&self) -> bool {
        self.value > self.max
    }

    /// Current value as a count of whole tiers
    pub fn tiers(&self) -> u32 {
        to_tiers(self.value)
    }

    /// Max as a count of whole tiers
    pub fn max_tiers(&self) -> u32 {
        to_tiers(self.max)
    }
}

fn to_tiers(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor().min(f64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_into_range() {
        let mut heat = BoundedResource::empty(6.0);

        heat.set(9.0);
        assert_eq!(heat.value, 6.0);

        heat.set(-3.0);
        assert_eq!(heat.value, 0.0);
    }

    #[test]
    fn test_add_is_set_of_sum() {
        let mut repairs = BoundedResource::new(2.0, 4.0);
        repairs.add(5.0);
        assert_eq!(repairs.value, 4.0);
        repairs.add(-1.0);
        assert_eq!(repairs.value, 3.0);
    }

    #[test]
    fn test_hit_points_accept_negative() {
        let mut hp = BoundedResource::hit_points(3.0, 10.0);
        hp.add(-8.0);
        assert_eq!(hp.value, -5.0);

        hp.set(25.0);
        assert_eq!(hp.value, 25.0);
    }

    #[test]
    fn test_policy_is_not_read_from_payload() {
        let json = r#"{"value": 2.0, "max": 4.0, "policy": "unbounded"}"#;
        let mut stress: BoundedResource = serde_json::from_str(json).unwrap();
        assert_eq!(stress.policy, ClampPolicy::Clamped);
        stress.set(-3.0);
        assert_eq!(stress.value, 0.0);

        let encoded = serde_json::to_value(BoundedResource::hit_points(3.0, 10.0)).unwrap();
        assert!(encoded.get("policy").is_none());
    }

    #[test]
    fn test_overflow_write_skips_clamp() {
        let mut heat = BoundedResource::new(4.0, 6.0);
        heat.overflow_add(5.0);
        assert_eq!(heat.value, 9.0);
        assert!(heat.is_overflowing());
    }

    #[test]
    fn test_with_min_reclamps() {
        let pool = BoundedResource::new(0.0, 5.0).with_min(1.0);
        assert_eq!(pool.value, 1.0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let mut pool = BoundedResource::new(1.0, 2.0).with_min(5.0);
        pool.set(3.0);
        assert_eq!(pool.value, 2.0);
    }

    #[test]
    fn test_tiers() {
        let stress = BoundedResource::new(3.0, 4.0);
        assert_eq!(stress.tiers(), 3);
        assert_eq!(stress.max_tiers(), 4);

        let hp = BoundedResource::hit_points(-4.0, 10.0);
        assert_eq!(hp.tiers(), 0);
    }

    #[test]
    fn test_full_and_empty() {
        let mut pool = BoundedResource::full(4.0);
        assert!(pool.is_full());
        pool.set(0.0);
        assert!(pool.is_empty());
        pool.refill();
        assert!(pool.is_full());
    }
}
