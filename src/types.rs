use serde::{Deserialize, Serialize};

/// Transform applied to raw extracted text before it is returned.
/// Absent means identity.
pub type TextTransform = fn(&str) -> String;

/// One row of a key/value listing, e.g. a penalty name and its rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub name: String,
    pub rate: String,
}

/// Selectors and credentials for a standard login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub user_selector: String,
    pub username: String,
    pub password_selector: String,
    pub password: String,
    pub submit_selector: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_serializes_with_name_and_rate_fields() {
        let row = KeyValue {
            name: "Speeding".to_string(),
            rate: "$50".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();

        assert_eq!(json, r#"{"name":"Speeding","rate":"$50"}"#);
    }
}
