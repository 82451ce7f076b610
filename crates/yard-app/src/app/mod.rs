//! Application use cases

pub mod planning_service;

pub use planning_service::{AreaBreakdown, PlanningServiceError, YardPlanningService};
