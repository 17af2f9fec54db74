// backfill/src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use backfill::args::CommandLineArgs;
use backfill::{run, CommitWriter, CountingWriter, Git};

fn configure_tracing(args: &CommandLineArgs) -> Result<()> {
  let level_filter = if args.quiet {
    LevelFilter::WARN
  } else {
    match args.verbose {
      0 => LevelFilter::INFO,
      1 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  // RUST_LOG overrides the level chosen by -v/-q
  let env_filter = EnvFilter::builder()
    .with_default_directive(level_filter.into())
    .from_env()
    .context("Failed to parse filters from RUST_LOG environment variable")?;

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_ansi(std::io::stderr().is_terminal())
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
  Ok(())
}

fn try_main(args: &CommandLineArgs) -> Result<()> {
  configure_tracing(args)?;

  let schedule = args.schedule()?;
  let identity = args.identity();
  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  info!(
    "Filling {} through {} with {}-{} commits a day at {}",
    schedule.start(),
    schedule.end(),
    schedule.commits_per_day().start(),
    schedule.commits_per_day().end(),
    schedule.time_of_day()
  );
  match &identity {
    Some(identity) => info!("Author and committer: {identity}"),
    None => info!("Using git's configured identity"),
  }

  let mut writer: Box<dyn CommitWriter> = if args.dry_run {
    warn!("Dry run: no commits will be written");
    Box::new(CountingWriter::default())
  } else {
    let git = Git::new(&args.repo);
    git
      .ensure_work_tree()
      .with_context(|| format!("{} is not a git working tree", args.repo.display()))?;
    Box::new(git)
  };

  let summary = run(&schedule, identity.as_ref(), &mut rng, writer.as_mut())
    .context("Stopped before the schedule finished")?;

  println!("\n{summary}.");
  if !args.dry_run {
    println!("Run: git push origin main");
  }
  Ok(())
}

fn main() {
  dotenvy::dotenv().ok(); // Load .env before clap reads BACKFILL_* variables

  let args = CommandLineArgs::parse();
  if let Err(e) = try_main(&args) {
    if args.verbose > 0 {
      eprintln!("Error: {e:?}");
    } else {
      eprintln!("Error: {e:#}");
    }
    std::process::exit(2);
  }
}
