use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
///
/// Hyphens are accepted in place of underscores (`in-progress`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use planner_core::enums::TaskStatus;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("in_progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn parses_hyphenated_and_uppercase_alias() {
        let status: TaskStatus = parse_enum("In-Progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn legacy_done_parses_as_completed() {
        let status: TaskStatus = parse_enum("done", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TaskStatus>("blocked", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'blocked'"));
    }
}
