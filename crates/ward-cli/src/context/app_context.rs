use anyhow::Context;
use ward_config::WardConfig;
use ward_records::WardService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: WardService,
    pub config: WardConfig,
}

impl AppContext {
    /// Open the record stores under the configured data directory.
    pub fn init(config: WardConfig) -> anyhow::Result<Self> {
        let service = WardService::open(&config).with_context(|| {
            format!(
                "failed to open ward records in {}",
                config.storage.data_dir.display()
            )
        })?;

        tracing::debug!(
            data_dir = %config.storage.data_dir.display(),
            rollback_window = config.rollback.window,
            "app context ready"
        );
        Ok(Self { service, config })
    }
}
