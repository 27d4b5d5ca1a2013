use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value via serde, accepting `-` for `_` and any
/// letter case.
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
    use rcl_core::enums::{DedupPolicy, Revision};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let policy: DedupPolicy = parse_enum("keep_last", "dedup policy").expect("should parse");
        assert_eq!(policy, DedupPolicy::KeepLast);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let policy: DedupPolicy = parse_enum("keep-first", "dedup policy").expect("should parse");
        assert_eq!(policy, DedupPolicy::KeepFirst);
    }

    #[test]
    fn ignores_case() {
        let revision: Revision = parse_enum("V1", "revision").expect("should parse");
        assert_eq!(revision, Revision::V1);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Revision>("v3", "revision").expect_err("should fail");
        assert!(err.to_string().contains("invalid revision 'v3'"));
    }
}
