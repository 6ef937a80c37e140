use anyhow::Context;
use ward_config::WardConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<WardConfig> {
    let mut config = WardConfig::load_with_dotenv().context("failed to load ward configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut WardConfig, flags: &GlobalFlags) {
    if let Some(data_dir) = &flags.data_dir {
        tracing::debug!(data_dir = %data_dir.display(), "data directory overridden by flag");
        config.storage.data_dir.clone_from(data_dir);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use ward_config::WardConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(data_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            data_dir: data_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn data_dir_flag_wins_over_config() {
        let mut config = WardConfig::default();
        config.storage.data_dir = PathBuf::from("/from/config");
        apply_overrides(&mut config, &flags(Some("/from/flag")));
        assert_eq!(config.storage.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(
            config.storage.audit_log_path(),
            PathBuf::from("/from/flag/audit.log")
        );
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = WardConfig::default();
        config.storage.data_dir = PathBuf::from("/from/config");
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.storage.data_dir, PathBuf::from("/from/config"));
    }
}
