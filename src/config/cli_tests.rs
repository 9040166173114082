//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["repo-facade"]);

        assert!(cli.command.is_none());
        assert!(cli.listen.is_none());
        assert!(cli.token.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::parse_from_iter([
            "repo-facade",
            "--listen",
            "0.0.0.0:9000",
            "--token",
            "abc123",
            "--api-url",
            "https://github.example.com/api/v3/user/repos",
            "--timeout",
            "10",
            "--user-agent",
            "my-agent",
            "--config",
            "facade.toml",
            "--verbose",
        ]);

        assert_eq!(cli.listen.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(cli.token.as_deref(), Some("abc123"));
        assert_eq!(
            cli.api_url.as_deref(),
            Some("https://github.example.com/api/v3/user/repos")
        );
        assert_eq!(cli.timeout, Some(10));
        assert_eq!(cli.user_agent.as_deref(), Some("my-agent"));
        assert_eq!(cli.config, Some(PathBuf::from("facade.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["repo-facade", "-c", "x.toml", "-v"]);

        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["repo-facade", "--timeout", "soon"]);

        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["repo-facade", "init"]);

        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(output, PathBuf::from("repo-facade.toml"));
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["repo-facade", "init", "--output", "custom.toml"]);

        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(output, PathBuf::from("custom.toml"));
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["repo-facade"]);

        assert!(cli.command.is_none());
    }
}
