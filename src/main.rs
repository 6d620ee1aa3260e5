//! Command-line interface for the contributor wall generator.
//!
//! Settings come from an optional YAML file and command-line flags (flags
//! win); the API token is read from `--token` or the `GH_TOKEN` environment
//! variable. Any failure, including a malformed command line, is printed to
//! stderr and ends the process with exit status 1.

use std::{path::PathBuf, process};

use clap::Parser;
use contrib_feed::{Error, FeedConfig, FeedReport, FeedSettings, load_config, run_feed};
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering a contributor wall.
#[derive(Debug, Parser,)]
#[command(
    name = "contrib-feed",
    version,
    about = "Render a repository's GitHub contributors as an SVG avatar wall"
)]
struct Cli
{
    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Account that owns the repository.
    #[arg(long = "owner", value_name = "OWNER")]
    owner: Option<String,>,

    /// Repository whose contributors are rendered.
    #[arg(long = "repo", alias = "repository", value_name = "REPO")]
    repo: Option<String,>,

    /// Destination of the SVG document [default: contributors.svg].
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Base URL of the GitHub REST API [default: https://api.github.com].
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String,>,

    /// Client label sent as User-Agent [default: contributors-script].
    #[arg(long = "user-agent", value_name = "LABEL")]
    user_agent: Option<String,>,

    /// Connect and read timeout for API requests.
    #[arg(long = "timeout-secs", value_name = "SECONDS")]
    timeout_secs: Option<u64,>,

    /// GitHub API token.
    #[arg(long = "token", env = "GH_TOKEN", hide_env_values = true)]
    token: Option<String,>,
}

impl Cli
{
    fn overrides(&self,) -> FeedConfig
    {
        FeedConfig {
            owner:        self.owner.clone(),
            repository:   self.repo.clone(),
            output:       self.output.clone(),
            api_url:      self.api_url.clone(),
            user_agent:   self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    let cli = match Cli::try_parse() {
        Ok(cli,) => cli,
        Err(error,) if !error.use_stderr() => error.exit(),
        Err(error,) => {
            let _ = error.print();
            process::exit(1,);
        }
    };

    init_tracing();

    if let Err(error,) = run(cli,).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),
        )
        .with_writer(std::io::stderr,)
        .with_target(false,)
        .init();
}

/// Resolves settings and runs the pipeline.
///
/// # Errors
///
/// Propagates configuration, upstream and I/O errors.
async fn run(cli: Cli,) -> Result<FeedReport, Error,>
{
    let settings = resolve_settings(&cli,)?;
    let report = run_feed(&settings, cli.token.as_deref(),).await?;
    println!("{report}");
    Ok(report,)
}

fn resolve_settings(cli: &Cli,) -> Result<FeedSettings, Error,>
{
    let file = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => FeedConfig::default(),
    };

    FeedSettings::resolve(file.merge(cli.overrides(),),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, path::Path};

    use clap::Parser;
    use tempfile::tempdir;

    use super::{Cli, resolve_settings, run};

    #[test]
    fn cli_accepts_flags()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--owner",
            "octocat",
            "--repo",
            "hello-world",
            "-o",
            "out/wall.svg",
            "--timeout-secs",
            "10",
        ],)
        .expect("failed to parse CLI",);

        assert_eq!(cli.owner.as_deref(), Some("octocat"));
        assert_eq!(cli.repo.as_deref(), Some("hello-world"));
        assert_eq!(cli.output.as_deref(), Some(Path::new("out/wall.svg")));
        assert_eq!(cli.timeout_secs, Some(10));
    }

    #[test]
    fn cli_accepts_repository_alias()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--owner",
            "octocat",
            "--repository",
            "hello-world",
        ],)
        .expect("failed to parse CLI",);

        assert_eq!(cli.repo.as_deref(), Some("hello-world"));
    }

    #[test]
    fn malformed_flag_is_a_usage_error()
    {
        let error =
            Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--timeout-secs", "abc",],)
                .expect_err("expected usage error",);

        assert!(error.use_stderr());
    }

    #[test]
    fn version_flag_is_not_a_usage_error()
    {
        let error = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--version",],)
            .expect_err("version short-circuits parsing",);

        assert!(!error.use_stderr());
    }

    #[test]
    fn flags_override_settings_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("feed.yaml",);
        fs::write(&config_path, "owner: from-file\nrepository: repo\noutput: file.svg\n",)
            .expect("failed to write settings",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--config",
            config_path.to_str().expect("utf8",),
            "--owner",
            "from-cli",
        ],)
        .expect("failed to parse CLI",);

        let settings = resolve_settings(&cli,).expect("settings should resolve",);
        assert_eq!(settings.repository.to_string(), "from-cli/repo");
        assert_eq!(settings.output, Path::new("file.svg"));
    }

    #[tokio::test]
    async fn missing_token_is_a_configuration_error()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let output = temp.path().join("contributors.svg",);
        let mut cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--owner",
            "octocat",
            "--repo",
            "hello-world",
            "--output",
            output.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);
        cli.token = None;

        let error = run(cli,).await.expect_err("expected configuration error",);

        match error {
            contrib_feed::Error::Configuration {
                message,
            } => assert_eq!(message, "GH_TOKEN env var is required"),
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(!output.exists());
    }
}
