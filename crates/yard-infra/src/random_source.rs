//! Seeded random occupancy source standing in for live yard data

use std::cell::RefCell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use yard_domain::model::{SlotOccupancy, YardArea};
use yard_domain::repository::OccupancySource;
use yard_domain::service::{generate_area_slots, GenerationPolicy};
use yard_types::Error;

/// Fills areas with random containers that obey the stacking rule.
///
/// With a fixed seed, the same sequence of fetches yields the same data.
pub struct RandomOccupancySource {
    rng: RefCell<ChaCha8Rng>,
    policy: GenerationPolicy,
    seed: Option<u64>,
}

impl RandomOccupancySource {
    /// Seed from `seed` when given, otherwise from OS entropy
    pub fn new(policy: GenerationPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng: RefCell::new(rng),
            policy,
            seed,
        }
    }

    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl OccupancySource for RandomOccupancySource {
    fn fetch_occupancy(&self, area: &YardArea) -> Result<Vec<SlotOccupancy>, Error> {
        let mut rng = self.rng.borrow_mut();
        Ok(generate_area_slots(area, &self.policy, &mut *rng))
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
