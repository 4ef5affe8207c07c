use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub brand: String,
    pub price: String,
    pub description: String,
    /// Public URLs of the form `/images/<file>`.
    pub images: Vec<String>,
    pub year: Option<i32>,
    pub fuel_type: String,
    pub mileage: String,
    pub transmission: String,
    pub engine_capacity: String,
    pub seating_capacity: String,
    pub body_type: String,
    pub safety_features: Vec<String>,
    pub boot_space: String,
    pub features: Vec<String>,
    pub warranty: String,
    pub created_at: DateTime<Utc>,
}

/// Listing fields as submitted by the admin form, before images are attached.
#[derive(Debug, Clone, Default)]
pub struct CarDetails {
    pub model: String,
    pub brand: String,
    pub price: String,
    pub description: String,
    pub year: Option<i32>,
    pub fuel_type: String,
    pub mileage: String,
    pub transmission: String,
    pub engine_capacity: String,
    pub seating_capacity: String,
    pub body_type: String,
    pub safety_features: Vec<String>,
    pub boot_space: String,
    pub features: Vec<String>,
    pub warranty: String,
}

/// Splits a comma-separated form value into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_trims_entries() {
        assert_eq!(
            split_list("ABS, Airbags ,  ESC"),
            vec!["ABS", "Airbags", "ESC"]
        );
    }

    #[test]
    fn split_list_drops_blanks() {
        assert!(split_list("").is_empty());
        assert_eq!(split_list("Sunroof,,"), vec!["Sunroof"]);
    }
}
