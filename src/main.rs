use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use git_release_date::config::load_config;
use git_release_date::git::Git2Repository;
use git_release_date::{logging, ui, VersionPointResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

#[derive(clap::Parser)]
#[command(
    name = "git-release-date",
    version,
    about = "Find the release date a commit's version originates from"
)]
struct Args {
    #[arg(default_value = "HEAD", help = "Commit to resolve (sha, branch, HEAD, ...)")]
    commit: String,

    #[arg(
        short,
        long,
        default_value_t = 1,
        help = "Patch component of the version calculated for the commit"
    )]
    patch: u32,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path inside the repository")]
    repo: PathBuf,

    #[arg(long, help = "Branch whose tip anchors the search (overrides config)")]
    main_branch: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Log resolution steps")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref()).context("Error loading config")?;
    if let Some(branch) = args.main_branch {
        config.main_branch = branch;
    }

    logging::init(&config.log.level, args.verbose)?;

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Not in a git repository: {}", args.repo.display()))?;
    let commit = repo.resolve_commit(&args.commit)?;

    let resolver = VersionPointResolver::from_config(&repo, &config)?;
    let (release_date, point) = resolver
        .resolve_with_point(commit.id, args.patch)
        .with_context(|| format!("Failed to resolve release date of {}", commit.short_id()))?;

    match args.format {
        OutputFormat::Text => ui::display_release_date(&release_date, point.as_ref()),
        OutputFormat::Toml => print!("{}", ui::render_toml(&release_date, point.as_ref())?),
    }

    Ok(())
}
