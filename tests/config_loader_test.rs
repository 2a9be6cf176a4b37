use atlas::ConfigLoader;
use std::fs;
use tempfile::TempDir;

const ATLAS_VARS: [&str; 4] = [
    "ATLAS_BASE_URL",
    "ATLAS_API_KEY",
    "ATLAS_TIMEOUT_SECS",
    "ATLAS_LOGGING__LEVEL",
];

fn without_atlas_env<F: FnOnce()>(f: F) {
    temp_env::with_vars_unset(ATLAS_VARS, f);
}

fn write_project_config(dir: &TempDir, file: &str, contents: &str) {
    let atlas_dir = dir.path().join(".atlas");
    fs::create_dir_all(&atlas_dir).unwrap();
    fs::write(atlas_dir.join(file), contents).unwrap();
}

#[test]
fn test_defaults_without_files() {
    let dir = TempDir::new().unwrap();

    without_atlas_env(|| {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.api_key.is_none());
        assert!(config.timeout_secs.is_none());
    });
}

#[test]
fn test_local_yaml_overrides_project_yaml() {
    let dir = TempDir::new().unwrap();
    write_project_config(
        &dir,
        "config.yaml",
        "base_url: https://atlas.example.com\napi_key: project-key\n",
    );
    write_project_config(&dir, "local.yaml", "api_key: local-key\ntimeout_secs: 20\n");

    without_atlas_env(|| {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.base_url, "https://atlas.example.com");
        assert_eq!(config.api_key.as_deref(), Some("local-key"));
        assert_eq!(config.timeout_secs, Some(20));
    });
}

#[test]
fn test_env_overrides_files() {
    let dir = TempDir::new().unwrap();
    write_project_config(
        &dir,
        "config.yaml",
        "base_url: https://atlas.example.com\nlogging:\n  level: info\n",
    );

    temp_env::with_vars(
        [
            ("ATLAS_BASE_URL", Some("https://staging.atlas.example.com")),
            ("ATLAS_API_KEY", Some("env-key")),
            ("ATLAS_TIMEOUT_SECS", None),
            ("ATLAS_LOGGING__LEVEL", Some("debug")),
        ],
        || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert_eq!(config.base_url, "https://staging.atlas.example.com");
            assert_eq!(config.api_key.as_deref(), Some("env-key"));
            assert_eq!(config.logging.level, "debug");
        },
    );
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("atlas.yaml");
    fs::write(
        &path,
        "base_url: https://atlas.example.com\ntimeout_secs: 3\nlogging:\n  format: json\n",
    )
    .unwrap();

    without_atlas_env(|| {
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.base_url, "https://atlas.example.com");
        assert_eq!(config.timeout_secs, Some(3));
        assert_eq!(config.logging.format, "json");
    });
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = ConfigLoader::load_from_file(dir.path().join("nope.yaml")).unwrap_err();

    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_loading_defers_validation() {
    let dir = TempDir::new().unwrap();
    write_project_config(&dir, "config.yaml", "base_url: ftp://atlas.example.com\n");

    without_atlas_env(|| {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.base_url, "ftp://atlas.example.com");

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    });
}

#[test]
fn test_numeric_api_key_from_env() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(
        [
            ("ATLAS_BASE_URL", None),
            ("ATLAS_API_KEY", Some("1234567890")),
            ("ATLAS_TIMEOUT_SECS", None),
            ("ATLAS_LOGGING__LEVEL", None),
        ],
        || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert_eq!(config.api_key.as_deref(), Some("1234567890"));
        },
    );
}

#[test]
fn test_api_key_from_env_keeps_leading_zeros() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(
        [
            ("ATLAS_BASE_URL", None),
            ("ATLAS_API_KEY", Some("0042")),
            ("ATLAS_TIMEOUT_SECS", None),
            ("ATLAS_LOGGING__LEVEL", None),
        ],
        || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert_eq!(config.api_key.as_deref(), Some("0042"));
        },
    );
}

#[test]
fn test_numeric_api_key_from_yaml() {
    let dir = TempDir::new().unwrap();
    write_project_config(&dir, "config.yaml", "api_key: 1234567890\n");

    without_atlas_env(|| {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("1234567890"));
    });
}
