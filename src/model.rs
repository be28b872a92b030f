//! Problem and solution data as delivered by the solver service.
//!
//! These types are read-only input to the renderer. They mirror the solver's
//! JSON payloads; fields the renderer does not need are optional so partial
//! payloads still deserialize.

use serde::{Deserialize, Serialize};

/// Customer identifier, unique within an instance.
pub type CustomerId = u32;

/// A point in the unbounded 2D domain space of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A customer to be served, with its demand and optional time window data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub location: Location,
    #[serde(default)]
    pub demand: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_time: Option<f64>,
}

impl Customer {
    pub fn new(id: CustomerId, location: Location, demand: f64) -> Self {
        Self {
            id,
            location,
            demand,
            ready_time: None,
            due_time: None,
            service_time: None,
        }
    }
}

/// A CVRP instance: one depot plus the customers to visit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub depot: Location,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vehicles: Option<u32>,
}

impl Instance {
    pub fn new(depot: Location, customers: Vec<Customer>) -> Self {
        Self {
            depot,
            customers,
            ..Self::default()
        }
    }

    /// Looks a customer up by id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// All locations of the instance, depot first.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        std::iter::once(self.depot).chain(self.customers.iter().map(|customer| customer.location))
    }
}

/// One vehicle's visit sequence. Starts and ends at the depot implicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    pub vehicle_id: u32,
    #[serde(default)]
    pub customer_sequence: Vec<CustomerId>,
    #[serde(default)]
    pub total_demand: f64,
    #[serde(default)]
    pub total_distance: f64,
}

impl Route {
    pub fn new(vehicle_id: u32, customer_sequence: Vec<CustomerId>) -> Self {
        Self {
            vehicle_id,
            customer_sequence,
            ..Self::default()
        }
    }
}

/// A solver result: the ordered routes plus run metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computation_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
}

impl Solution {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }
}
