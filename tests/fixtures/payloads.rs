//! Solver-shaped JSON payloads.

pub const CLUSTERED_INSTANCE_JSON: &str = r#"{
    "id": "c-12",
    "name": "clustered-6",
    "description": "two clusters around a central depot",
    "depot": {"x": 50.0, "y": 50.0},
    "customers": [
        {"id": 1, "location": {"x": 12.0, "y": 80.0}, "demand": 4},
        {"id": 2, "location": {"x": 18.0, "y": 88.0}, "demand": 7},
        {"id": 3, "location": {"x": 9.0, "y": 91.0}, "demand": 2},
        {"id": 4, "location": {"x": 85.0, "y": 15.0}, "demand": 5},
        {"id": 5, "location": {"x": 91.0, "y": 22.0}, "demand": 3},
        {"id": 6, "location": {"x": 80.0, "y": 8.0}, "demand": 6}
    ],
    "vehicle_capacity": 15,
    "max_vehicles": 3
}"#;

pub const CLUSTERED_SOLUTION_JSON: &str = r#"{
    "id": "sol-1",
    "instance_id": "c-12",
    "algorithm": "neurogen",
    "routes": [
        {"vehicle_id": 0, "customer_sequence": [1, 2, 3], "total_demand": 13, "total_distance": 101.4},
        {"vehicle_id": 1, "customer_sequence": [4, 5, 6], "total_demand": 14, "total_distance": 98.2},
        {"vehicle_id": 2, "customer_sequence": [], "total_demand": 0, "total_distance": 0}
    ],
    "total_cost": 199.6,
    "computation_time": 1.25,
    "is_valid": true
}"#;
