#[cfg(test)]
mod tests {
    use std::path::{ Path, PathBuf };

    use tempfile::TempDir;

    use crate::config::{ CalcEstateConfig, ConfigError };
    use crate::errors::{ CalcEstateError, ErrorSeverity, RecoverableError };
    use crate::implementations::favorites::LIKED_RATIOS_KEY;
    use crate::implementations::property_store::PROPERTIES_KEY;

    #[test]
    fn defaults_use_the_standard_storage_keys() {
        let config = CalcEstateConfig::default();
        assert_eq!(config.properties_key, PROPERTIES_KEY);
        assert_eq!(config.liked_ratios_key, LIKED_RATIOS_KEY);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calcestate.yaml");
        std::fs::write(&path, "data_dir: /srv/calcestate\nlog_level: debug\n").unwrap();

        let config = CalcEstateConfig::from_file(&path).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/calcestate")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.properties_key, PROPERTIES_KEY);
    }

    #[test]
    fn missing_and_malformed_files_are_errors() {
        let dir = TempDir::new().unwrap();
        let missing = CalcEstateConfig::from_file(&dir.path().join("absent.yaml"));
        assert!(matches!(missing, Err(ConfigError::FileReadError(_))));

        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "data_dir: [unclosed\n").unwrap();
        assert!(matches!(CalcEstateConfig::from_file(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn command_line_directory_wins_over_config_file() {
        let config = CalcEstateConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..CalcEstateConfig::default()
        };

        let resolved = config.resolve_data_dir(Some(Path::new("/from/flag"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/flag"));

        let resolved = config.resolve_data_dir_from(None, None, Some("/home/user")).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/config"));
    }

    #[test]
    fn environment_directory_wins_over_config_file() {
        let config = CalcEstateConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..CalcEstateConfig::default()
        };

        let resolved = config
            .resolve_data_dir_from(None, Some("/from/env"), Some("/home/user"))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/from/env"));

        let resolved = config
            .resolve_data_dir_from(Some(Path::new("/from/flag")), Some("/from/env"), None)
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/from/flag"));

        // A blank variable is ignored
        let resolved = config.resolve_data_dir_from(None, Some("  "), None).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/config"));
    }

    #[test]
    fn home_directory_is_the_last_resort() {
        let config = CalcEstateConfig::default();

        let resolved = config.resolve_data_dir_from(None, None, Some("/home/user")).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/.calcestate"));

        let unresolved = config.resolve_data_dir_from(None, None, None);
        assert!(matches!(unresolved, Err(ConfigError::NoDataDir(_))));
    }

    #[test]
    fn load_reports_config_failures_as_crate_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "data_dir: [unclosed\n").unwrap();

        let err = CalcEstateConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CalcEstateError::ConfigError(_)));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(err.recovery_strategy().unwrap().contains("--data-dir"));

        // The conversion survives a trip through anyhow
        let wrapped = anyhow::Error::from(err);
        assert!(wrapped.downcast_ref::<CalcEstateError>().is_some());

        assert_eq!(CalcEstateConfig::load(None).unwrap(), CalcEstateConfig::default());
    }
}
