use serde::{Deserialize, Serialize};

/// One accepted pair, named for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentReport {
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "addressName")]
    pub address_name: String,
    pub score: f64,
}

/// Assignments in resolution order plus their total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub assignments: Vec<AssignmentReport>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
}
