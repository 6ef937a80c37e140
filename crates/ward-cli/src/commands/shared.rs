use crate::cli::GlobalFlags;

/// Resolve `--limit`, falling back to `default` when unset.
pub fn limit_or(flags: &GlobalFlags, default: usize) -> usize {
    flags
        .limit
        .map_or(default, |limit| usize::try_from(limit).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::limit_or;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
            data_dir: None,
        }
    }

    #[test]
    fn explicit_limit_wins() {
        assert_eq!(limit_or(&flags(Some(5)), 20), 5);
    }

    #[test]
    fn default_applies_without_flag() {
        assert_eq!(limit_or(&flags(None), 20), 20);
    }
}
