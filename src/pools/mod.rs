//! Bounded resource pools
//!
//! Every budget a unit carries (heat, stress, structure, hit points,
//! overshield, repairs) is a `BoundedResource`.

pub mod resource;

pub use resource::{deserialize_hit_points, BoundedResource, ClampPolicy};
