//! Tests for validated configuration.

use std::net::SocketAddr;
use std::time::Duration;

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["repo-facade"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod defaults_applied {
    use super::*;

    #[test]
    fn no_sources_yields_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None, None).unwrap();

        assert_eq!(config.listen, defaults::LISTEN.parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_url.as_str(), defaults::API_URL);
        assert_eq!(config.timeout.as_secs(), defaults::TIMEOUT_SECS);
        assert_eq!(config.user_agent, defaults::USER_AGENT);
        assert!(config.token.is_empty());
        assert!(!config.verbose);
    }

    #[test]
    fn verbose_flag_is_carried() {
        let config = ValidatedConfig::from_raw(&cli(&["-v"]), None, None).unwrap();

        assert!(config.verbose);
    }
}

mod precedence {
    use super::*;

    const FILE: &str = r#"
        [server]
        listen = "0.0.0.0:7000"

        [github]
        token = "from-file"
        api_url = "https://file.example.com/user/repos"
        timeout = 5
        user_agent = "file-agent"
    "#;

    #[test]
    fn toml_overrides_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml(FILE)), None).unwrap();

        assert_eq!(config.listen.port(), 7000);
        assert_eq!(config.token, "from-file");
        assert_eq!(config.api_url.host_str(), Some("file.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "file-agent");
    }

    #[test]
    fn env_token_overrides_toml() {
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml(FILE)), Some("from-env")).unwrap();

        assert_eq!(config.token, "from-env");
    }

    #[test]
    fn cli_overrides_env_and_toml() {
        let cli = cli(&[
            "--listen",
            "127.0.0.1:9999",
            "--token",
            "from-cli",
            "--api-url",
            "https://cli.example.com/user/repos",
            "--timeout",
            "60",
            "--user-agent",
            "cli-agent",
        ]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml(FILE)), Some("from-env")).unwrap();

        assert_eq!(config.listen.port(), 9999);
        assert_eq!(config.token, "from-cli");
        assert_eq!(config.api_url.host_str(), Some("cli.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "cli-agent");
    }

    #[test]
    fn token_is_trimmed() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None, Some("abc123\n")).unwrap();

        assert_eq!(config.token, "abc123");
    }
}

mod validation {
    use super::*;

    #[test]
    fn invalid_listen_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--listen", "localhost"]), None, None);

        assert!(matches!(result, Err(ConfigError::InvalidListen { .. })));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--api-url", "not a url"]), None, None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--api-url", "ftp://example.com/repos"]), None, None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--timeout", "0"]), None, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--token", "abc\u{7}123"]), None, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn empty_user_agent_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--user-agent", " "]), None, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { .. })
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_never_prints_token() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--token", "ghp_supersecret"]), None, None).unwrap();

        let text = config.to_string();

        assert!(!text.contains("ghp_supersecret"));
        assert!(text.contains("token: set"));
    }

    #[test]
    fn display_reports_empty_token() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None, None).unwrap();

        assert!(config.to_string().contains("token: empty"));
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github]\ntimeout = 12").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["--config", &path])).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = ValidatedConfig::load(&cli(&["--config", "/nonexistent/repo-facade.toml"]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let result = ValidatedConfig::load(&cli(&["--config", &path]));

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repo-facade.toml");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("repo-facade.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
