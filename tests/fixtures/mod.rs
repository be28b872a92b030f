//! Test fixtures for route-viz.
//!
//! Provides:
//! - Builders for instances and solutions
//! - A recording surface that tracks attached wheel listeners
//! - A solver-shaped JSON payload

pub mod payloads;
pub mod surface;

pub use payloads::*;
pub use surface::*;

use route_viz::model::{Customer, CustomerId, Instance, Location, Route, Solution};

/// Builder for test instances with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestInstance {
    depot: Location,
    customers: Vec<Customer>,
}

impl TestInstance {
    pub fn new(depot_x: f64, depot_y: f64) -> Self {
        Self {
            depot: Location::new(depot_x, depot_y),
            customers: Vec::new(),
        }
    }

    pub fn customer(mut self, id: CustomerId, x: f64, y: f64) -> Self {
        self.customers.push(Customer::new(id, Location::new(x, y), 1.0));
        self
    }

    pub fn build(self) -> Instance {
        Instance::new(self.depot, self.customers)
    }
}

/// Customers at (0,0) and (10,10) with the depot in between.
pub fn diagonal_instance() -> Instance {
    TestInstance::new(5.0, 5.0)
        .customer(1, 0.0, 0.0)
        .customer(2, 10.0, 10.0)
        .build()
}

/// One route per sequence, vehicle ids numbered from zero.
pub fn solution(sequences: &[&[CustomerId]]) -> Solution {
    Solution::new(
        sequences
            .iter()
            .enumerate()
            .map(|(vehicle, sequence)| Route::new(vehicle as u32, sequence.to_vec()))
            .collect(),
    )
}
