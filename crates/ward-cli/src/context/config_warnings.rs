use ward_config::WardConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &WardConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WardConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = WardConfig::default();

    let mut warnings = Vec::new();

    if config.storage == defaults.storage && has_single_underscore_key(&env_keys, "WARD_STORAGE") {
        warnings.push(
            "Storage config appears default while WARD_STORAGE_* env vars exist. Use double underscores (example: WARD_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    if config.rollback == defaults.rollback && has_single_underscore_key(&env_keys, "WARD_ROLLBACK")
    {
        warnings.push(
            "Rollback config appears default while WARD_ROLLBACK_* env vars exist. Use double underscores (example: WARD_ROLLBACK__WINDOW)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use ward_config::WardConfig;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_unconfigured_warnings(
            &WardConfig::default(),
            env(&["WARD_STORAGE_DATA_DIR", "WARD_ROLLBACK_WINDOW"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("WARD_STORAGE__DATA_DIR"));
        assert!(warnings[1].contains("WARD_ROLLBACK__WINDOW"));
    }

    #[test]
    fn no_warning_for_well_formed_keys() {
        let warnings = collect_unconfigured_warnings(
            &WardConfig::default(),
            env(&["WARD_STORAGE__DATA_DIR", "WARD_LOG", "PATH"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_warning_when_section_is_configured() {
        let mut config = WardConfig::default();
        config.rollback.window = 5;
        let warnings = collect_unconfigured_warnings(&config, env(&["WARD_ROLLBACK_WINDOW"]));
        assert!(warnings.is_empty());
    }
}
