use std::path::PathBuf;

use figment::Jail;
use ward_config::{LOCAL_CONFIG_FILE, WardConfig};

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("WARD_STORAGE__DATA_DIR", "/tmp/ward-data");
        jail.set_env("WARD_ROLLBACK__WINDOW", "7");

        let config = WardConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/ward-data"));
        assert_eq!(config.rollback.window, 7);
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[storage]
audit_log_file = "from-toml.log"
"#,
        )?;
        jail.set_env("WARD_STORAGE__AUDIT_LOG_FILE", "from-env.log");

        let config = WardConfig::load().expect("config loads");
        assert_eq!(config.storage.audit_log_file, "from-env.log");
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "WARD_STORAGE__PATIENTS_FILE=dotenv-patients.csv\n")?;

        let config = WardConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.storage.patients_file, "dotenv-patients.csv");
        Ok(())
    });
}
