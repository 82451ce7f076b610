//! Yard planning domain: grid model, occupancy statistics, projection

pub mod model;
pub mod repository;
pub mod service;
