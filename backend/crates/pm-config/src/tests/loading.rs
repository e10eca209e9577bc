use crate::tests::{ScopedEnv, TestConfigDir};
use crate::{Config, ReorderMode};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_empty_config_dir_when_load_then_defaults_are_valid() {
    // Given
    let dir = TestConfigDir::new();

    // When
    let config = dir.load();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.security.csrf_enabled, eq(true));
    assert_that!(config.client.reorder_mode, eq(ReorderMode::PerRow));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_file_when_load_then_sections_read() {
    // Given
    let dir = TestConfigDir::with_file(
        r#"
            [server]
            port = 9000

            [security]
            csrf_enabled = false

            [client]
            server_url = "http://sprints.local:9000"
            request_timeout_secs = 5
            reorder_mode = "batch"
        "#,
    );

    // When
    let config = dir.load();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.security.csrf_enabled, eq(false));
    assert_that!(
        config.client.server_url.as_str(),
        eq("http://sprints.local:9000")
    );
    assert_that!(config.client.request_timeout().as_secs(), eq(5));
    assert_that!(config.client.reorder_mode, eq(ReorderMode::Batch));
}

#[test]
#[serial]
fn given_env_and_file_when_load_then_env_wins() {
    // Given
    let dir = TestConfigDir::with_file("[server]\nport = 9000\n");
    let _env = ScopedEnv::default()
        .set("PM_SERVER_PORT", "9100")
        .set("PM_REORDER_MODE", "batch")
        .set("PM_CSRF_ENABLED", "0");

    // When
    let config = dir.load();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(config.client.reorder_mode, eq(ReorderMode::Batch));
    assert_that!(config.security.csrf_enabled, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_values_when_load_then_previous_values_kept() {
    let dir = TestConfigDir::new();
    let _env = ScopedEnv::default()
        .set("PM_SERVER_PORT", "eighty")
        .set("PM_REORDER_MODE", "sideways");

    let config = dir.load();

    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.client.reorder_mode, eq(ReorderMode::PerRow));
}

#[test]
#[serial]
fn given_unknown_log_level_in_file_when_load_then_info() {
    let dir = TestConfigDir::with_file("[logging]\nlevel = \"chatty\"\n");

    let config = dir.load();

    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_malformed_file_when_load_then_error_names_file() {
    // Given
    let _dir = TestConfigDir::with_file("this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_missing_directory_when_load_from_then_created() {
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".pm");

    let result = Config::load_from(&nested);

    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_default_database_when_resolved_then_inside_config_dir() {
    let dir = TestConfigDir::new();

    let config = dir.load();

    assert_that!(
        config.database_path().unwrap(),
        eq(&dir.path().join(crate::DEFAULT_DATABASE_FILENAME))
    );
}

#[test]
#[serial]
fn given_log_file_when_resolved_then_under_log_dir() {
    let dir = TestConfigDir::new();
    let _env = ScopedEnv::default().set("PM_LOG_FILE", "server.log");

    let config = dir.load();

    assert_that!(
        config.log_file_path().unwrap(),
        some(eq(&dir.path().join("log").join("server.log")))
    );
}

#[test]
#[serial]
fn given_no_log_file_when_resolved_then_none() {
    let dir = TestConfigDir::new();
    let _env = ScopedEnv::default().unset("PM_LOG_FILE");

    let config = dir.load();

    assert_that!(config.log_file_path().unwrap(), none());
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_joined() {
    let dir = TestConfigDir::new();
    let _env = ScopedEnv::default()
        .set("PM_SERVER_HOST", "0.0.0.0")
        .set("PM_SERVER_PORT", "8080");

    let config = dir.load();

    assert_that!(config.bind_addr().as_str(), eq("0.0.0.0:8080"));
}
