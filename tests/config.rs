#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use takt::libs::config::{Config, StorageBackend, StorageConfig};
    use takt::libs::storage::StorageTarget;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the application data directory at a temp dir so each test
    /// starts without a configuration file.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.storage.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default.
        let config = Config::read().unwrap();
        assert!(config.storage.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
                path: Some(PathBuf::from("/tmp/custom.sqlite")),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.storage, config.storage);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_target_is_flat_file(_ctx: &mut ConfigTestContext) {
        let target = Config::default().storage_target().unwrap();
        match target {
            StorageTarget::FlatFile(path) => {
                assert_eq!(path.file_name().unwrap(), "tasks.csv");
            }
            other => panic!("expected flat-file target, got {:?}", other),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_custom_path_wins_over_default(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
                path: Some(PathBuf::from("/tmp/custom.sqlite")),
            }),
        };
        let target = config.storage_target().unwrap();
        assert_eq!(target, StorageTarget::Sqlite(PathBuf::from("/tmp/custom.sqlite")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_sqlite_backend_default_path(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
                path: None,
            }),
        };
        match config.storage_target().unwrap() {
            StorageTarget::Sqlite(path) => {
                assert_eq!(path.file_name().unwrap(), "tasks.sqlite");
            }
            other => panic!("expected sqlite target, got {:?}", other),
        }
    }
}
