use rcl_config::ENV_PREFIX;

/// Config sections that accept `RECALL_<SECTION>__<FIELD>` overrides.
const SECTIONS: [&str; 4] = ["DATA", "SCORING", "LOCK", "GENERAL"];

/// Log filter variable read by the binary, not by figment.
const LOG_VAR: &str = "RECALL_LOG";

/// Emit warnings for `RECALL_*` env keys that figment silently ignores.
pub fn warn_mistyped_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && key != LOG_VAR)
        .collect::<Vec<_>>();
    keys.sort();

    let mut warnings = Vec::new();
    for key in keys {
        let rest = &key[ENV_PREFIX.len()..];
        match SECTIONS.iter().find(|section| rest.starts_with(*section)) {
            Some(section) => {
                let field = &rest[section.len()..];
                if !field.starts_with("__") {
                    let suggestion = field.trim_start_matches('_');
                    warnings.push(format!(
                        "{key} is ignored. Use double underscores (example: {ENV_PREFIX}{section}__{suggestion})."
                    ));
                }
            }
            None => warnings.push(format!(
                "{key} does not name a config section (data, scoring, lock, general) and is ignored."
            )),
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::collect_env_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_nesting() {
        let warnings = collect_env_warnings(env(&["RECALL_SCORING_DEDUP_POLICY"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("RECALL_SCORING__DEDUP_POLICY"));
    }

    #[test]
    fn warns_for_unknown_sections() {
        let warnings = collect_env_warnings(env(&["RECALL_STORAGE__DIR"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("does not name a config section"));
    }

    #[test]
    fn accepts_well_formed_keys_and_log_filter() {
        let warnings = collect_env_warnings(env(&[
            "RECALL_DATA__DIR",
            "RECALL_LOCK__WAIT_TIMEOUT_SECS",
            "RECALL_LOG",
            "HOME",
        ]));
        assert!(warnings.is_empty());
    }
}
