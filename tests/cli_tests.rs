use std::process::{Command, Output};
use std::str;
use tempfile::TempDir;

/// CLI interface tests, run against the built binary
#[cfg(test)]
mod cli_tests {
    use super::*;

    /// Run the binary with a configuration path that does not exist, so the
    /// user's own configuration never leaks into the tests.
    fn uhppote_cli(args: &[&str]) -> Output {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = temp_dir.path().join("missing.toml");

        Command::new(env!("CARGO_BIN_EXE_uhppote-cli"))
            .arg("--config")
            .arg(&config)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }

    fn stdout(output: &Output) -> &str {
        str::from_utf8(&output.stdout).expect("Invalid UTF-8")
    }

    fn stderr(output: &Output) -> &str {
        str::from_utf8(&output.stderr).expect("Invalid UTF-8")
    }

    #[test]
    fn test_cli_help_flag() {
        let output = Command::new(env!("CARGO_BIN_EXE_uhppote-cli"))
            .arg("--help")
            .output()
            .expect("Failed to execute command");

        let stdout = stdout(&output);
        assert!(output.status.success());
        assert!(stdout.contains("--config"));
        assert!(stdout.contains("--debug"));
        assert!(stdout.contains("--timeout"));
    }

    #[test]
    fn test_cli_help_command() {
        let output = uhppote_cli(&["help"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains("get-status"));
        assert!(stdout(&output).contains("set-pc-control"));
    }

    #[test]
    fn test_cli_command_help() {
        let output = uhppote_cli(&["help", "set-pc-control"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains("uhppote-cli set-pc-control 12345678"));
    }

    #[test]
    fn test_cli_version() {
        let output = uhppote_cli(&["version"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_invalid_command() {
        let output = uhppote_cli(&["frobnicate"]);

        assert_eq!(output.status.code(), Some(64));
        assert!(stderr(&output).contains("Invalid command: 'frobnicate'"));
        assert!(stdout(&output).contains("get-status"));
    }

    #[test]
    fn test_cli_no_command() {
        let output = uhppote_cli(&[]);

        assert!(!output.status.success());
        assert!(stdout(&output).contains("Commands:"));
    }

    #[test]
    fn test_cli_missing_argument() {
        let output = uhppote_cli(&["get-status"]);

        assert_eq!(output.status.code(), Some(64));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_cli_missing_config_file_is_quiet() {
        let output = uhppote_cli(&["get-status"]);

        assert_eq!(stderr(&output), "Missing serial number\n");
    }

    #[test]
    fn test_cli_invalid_command_with_bad_broadcast_address() {
        let output = uhppote_cli(&["--broadcast", "nonsense", "frobnicate"]);

        assert_eq!(output.status.code(), Some(64));
        assert_eq!(stderr(&output), "Invalid command: 'frobnicate'\n");
        assert!(stdout(&output).contains("get-status"));
    }

    #[test]
    fn test_cli_help_with_bad_bind_address() {
        let output = uhppote_cli(&["--bind", "nonsense", "help"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains("Commands:"));
    }

    #[test]
    fn test_cli_invalid_enable() {
        let output = uhppote_cli(&["set-pc-control", "12345678", "xtruey"]);

        assert_eq!(output.status.code(), Some(64));
        assert!(stderr(&output).contains("xtruey"));
    }

    #[test]
    fn test_cli_configuration_required() {
        let output = uhppote_cli(&["list-controllers"]);

        assert_eq!(output.status.code(), Some(78));
        assert!(stderr(&output).contains("'list-controllers' requires a configuration file"));
    }

    #[test]
    fn test_cli_list_controllers_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("uhppote.toml");
        std::fs::write(
            &config,
            "[[controllers]]\nserial_number = 405419896\naddress = \"192.168.1.100:60000\"\n",
        )
        .unwrap();

        let output = Command::new(env!("CARGO_BIN_EXE_uhppote-cli"))
            .arg("--config")
            .arg(&config)
            .arg("list-controllers")
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        assert!(stdout(&output).contains("405419896"));
        assert!(stdout(&output).contains("192.168.1.100:60000"));
    }

    fn with_malformed_config(args: &[&str]) -> Output {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("uhppote.toml");
        std::fs::write(&config, "timeout_ms = \"soon\"\n").unwrap();

        Command::new(env!("CARGO_BIN_EXE_uhppote-cli"))
            .arg("--config")
            .arg(&config)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }

    #[test]
    fn test_cli_malformed_config() {
        let output = with_malformed_config(&["get-status", "12345678"]);

        assert_eq!(output.status.code(), Some(78));
        assert!(stderr(&output).contains("Failed to parse config file"));
    }

    #[test]
    fn test_cli_builtins_ignore_malformed_config() {
        let output = with_malformed_config(&["help"]);
        assert!(output.status.success());

        let output = with_malformed_config(&["version"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }
}
