//! Follow-up actions attached to escalation outcomes

pub mod descriptor;

pub use descriptor::{ActionDescriptor, FollowUp, Operation, Stat};
