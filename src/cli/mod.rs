pub mod eligible;
pub mod generate;
pub mod review;
pub mod schema;

use crate::catalog::ChildProfile;
use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(
    author,
    version,
    about = "Four-week activity plans from a child's profile and a topic catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for one child
    Generate(GenerateArgs),

    /// List catalog topics a child is eligible for
    Eligible(EligibleArgs),

    /// Check that a plan JSON file is structurally complete
    Review(ReviewArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ProfileArgs {
    /// Child profile JSON file ({"child_age": 7, "interests": [...]})
    #[arg(long, conflicts_with = "age")]
    pub profile: Option<PathBuf>,

    /// Child's age, instead of --profile
    #[arg(long)]
    pub age: Option<u32>,

    /// Interest niche (repeat or comma-separate)
    #[arg(long = "interest", value_delimiter = ',')]
    pub interests: Vec<String>,

    /// Child's name, used with --age
    #[arg(long)]
    pub name: Option<String>,
}

impl ProfileArgs {
    pub fn resolve(&self) -> anyhow::Result<ChildProfile> {
        if let Some(ref path) = self.profile {
            info!("Loading profile from {:?}", path);
            return Ok(ChildProfile::load(path)?);
        }

        let Some(age) = self.age else {
            anyhow::bail!("No profile provided. Use --profile, or --age with --interest");
        };

        let mut profile = ChildProfile::new(age, &self.interests);
        if let Some(ref name) = self.name {
            profile.name = name.clone();
        }
        Ok(profile)
    }
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,

    /// Override the topic catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Skip the ranking model and sample topics at random
    #[arg(long)]
    pub offline: bool,

    /// Seed for random sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the per-attempt ranking timeout
    #[arg(long)]
    pub timeout_sec: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct EligibleArgs {
    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,

    /// Override the topic catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Parser, Clone)]
pub struct ReviewArgs {
    /// Plan JSON: a `generate` response or a bare weekly plan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Load config if it exists, otherwise use defaults
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = if path.exists() {
        info!("Loading config from {:?}", path);
        Config::load(path)?
    } else {
        info!("No config found, using defaults");
        Config::default()
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_generate_with_inline_profile() {
        let cli = parse(&[
            "weekplan", "generate", "--age", "7", "--interest", "AI,Space", "--interest", "Dance",
            "--offline", "--seed", "3",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.offline);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.format, OutputFormat::Json);

        let profile = args.profile.resolve().unwrap();
        assert_eq!(profile.age, 7);
        assert_eq!(profile.interests.len(), 3);
    }

    #[test]
    fn test_profile_required() {
        let cli = parse(&["weekplan", "eligible"]);
        let Commands::Eligible(args) = cli.command else {
            panic!("expected eligible");
        };
        assert!(args.profile.resolve().is_err());
    }

    #[test]
    fn test_profile_file_conflicts_with_age() {
        assert!(Cli::try_parse_from([
            "weekplan", "generate", "--profile", "p.json", "--age", "5"
        ])
        .is_err());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("weekplan.yaml")).unwrap();
        assert_eq!(config.topics_per_plan, 4);
    }
}
