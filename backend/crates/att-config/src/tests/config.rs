use crate::tests::{EnvGuard, setup_config_dir, valid_env};
use crate::{Config, PolicyMode, SessionMode};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.port, 8000);
    assert_that!(config.database.path.as_str(), eq("attendance.db"));
    assert_eq!(config.token.ttl_secs, 1800);
    assert_eq!(config.handler.call_timeout_ms, 5000);
    assert_that!(config.auth.mode, eq(SessionMode::Jwt));
    assert_that!(config.policy.mode, eq(PolicyMode::Remote));
}

#[test]
#[serial]
fn given_defaults_without_secrets_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_required_secrets_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = valid_env();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_read_and_env_overrides_win() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9100

            [token]
            ttl_secs = 600

            [policy]
            mode = "remote"
            read_url = "http://keto:4466"
        "#,
    )
    .unwrap();
    let _port = EnvGuard::set("ATT_SERVER_PORT", "9200");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.port, 9200);
    assert_eq!(config.token.ttl_secs, 600);
    assert_that!(config.policy.read_url.as_deref(), eq(Some("http://keto:4466")));
    assert_that!(
        config.policy.effective_write_url(),
        eq(Some("http://keto:4466"))
    );
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_invalid_auth_mode_env_when_load_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _mode = EnvGuard::set("ATT_AUTH_MODE", "oauth");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_database_path_escaping_config_dir_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = valid_env();
    let _path = EnvGuard::set("ATT_DATABASE_PATH", "../outside.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = valid_env();
    let _port = EnvGuard::set("ATT_SERVER_PORT", "80");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
