use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Greeting used when no row matches the requested language
pub const DEFAULT_GREETING: &str = "Привет";

/// A stored greeting. `language` is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub id: i64,
    pub language: String,
    pub text: String,
}

/// How `SayHello` treats the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum GreetingPolicy {
    /// Read the greeting for the language, falling back to [`DEFAULT_GREETING`]
    #[default]
    Lookup,
    /// Record `(language, name)`, then answer with every known greeting
    InsertThenList,
    /// Record `(language, name)` and answer with a fixed template
    InsertOnly,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_parses_snake_case() {
        assert_eq!(GreetingPolicy::from_str("lookup").unwrap(), GreetingPolicy::Lookup);
        assert_eq!(
            GreetingPolicy::from_str("insert_then_list").unwrap(),
            GreetingPolicy::InsertThenList
        );
        assert_eq!(GreetingPolicy::from_str("INSERT_ONLY").unwrap(), GreetingPolicy::InsertOnly);
        assert!(GreetingPolicy::from_str("shout").is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        let policy = GreetingPolicy::InsertThenList;
        assert_eq!(policy.to_string(), "insert_then_list");
        assert_eq!(GreetingPolicy::from_str(&policy.to_string()).unwrap(), policy);
    }

    #[test]
    fn test_default_policy_is_lookup() {
        assert_eq!(GreetingPolicy::default(), GreetingPolicy::Lookup);
    }
}
