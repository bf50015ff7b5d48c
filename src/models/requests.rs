use serde::{Deserialize, Serialize};
use validator::Validate;

/// Address record as parsed from an input line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAddress {
    #[validate(length(min = 1))]
    pub name: String,
}

/// Driver record as parsed from an input line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDriver {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "vowelCount")]
    pub vowel_count: u32,
    #[serde(rename = "consonantCount")]
    pub consonant_count: u32,
}
