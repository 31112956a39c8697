//! Command line front-end for the boot asset checksum manifest.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use boot_checksums::models::AssetStatus;
use boot_checksums::{
  ChecksumConfig, ChecksumLayout, ChecksumUpdater, GenerationReport, VerificationReport,
};
use clap::Parser;
use serde::Serialize;

/// Generate or verify checksums for the EFI boot assets.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  /// Verify the assets against the existing manifest instead of regenerating it.
  #[arg(long)]
  verify: bool,
  /// Print the report as JSON instead of status lines.
  #[arg(long)]
  json: bool,
  /// Install root holding the manifest (overrides EFI_BOOT_PATH).
  #[arg(long, value_name = "DIR")]
  install_root: Option<PathBuf>,
  /// Directory searched for development copies of the assets.
  #[arg(long, value_name = "DIR")]
  source_root: Option<PathBuf>,
  /// Explicit configuration file instead of ./checksums.config.json.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .target(env_logger::Target::Stdout)
    .init();

  let cli = Cli::parse();
  let outcome = run(&cli);
  if let Err(err) = &outcome {
    println!("Error: {err:#}");
  }
  ExitCode::from(exit_status(&outcome))
}

/// Process status for a run: 0 only when the requested mode succeeded.
fn exit_status(outcome: &Result<bool>) -> u8 {
  match outcome {
    Ok(true) => 0,
    Ok(false) | Err(_) => 1,
  }
}

fn run(cli: &Cli) -> Result<bool> {
  let updater = ChecksumUpdater::new(load_layout(cli)?);

  if cli.verify {
    Ok(run_verify(&updater, cli.json))
  } else {
    Ok(run_generate(&updater, cli.json))
  }
}

fn run_verify(updater: &ChecksumUpdater, json: bool) -> bool {
  if !json {
    println!("Verifying existing checksums...");
  }
  let ok = match updater.verify() {
    Ok(report) => {
      print!("{}", render_verification(&report, json));
      report.is_valid()
    }
    Err(err) => {
      println!("{err}");
      false
    }
  };
  if !json {
    if ok {
      println!("\nAll checksums are valid!");
    } else {
      println!("\nChecksum verification failed!");
    }
  }
  ok
}

fn run_generate(updater: &ChecksumUpdater, json: bool) -> bool {
  if !json {
    println!("Updating checksums...");
  }
  let ok = match updater.generate() {
    Ok(report) => {
      print!("{}", render_generation(&report, json));
      true
    }
    Err(err) => {
      println!("Failed to update checksums: {err}");
      false
    }
  };
  if !json {
    if ok {
      println!("\nChecksum update completed successfully!");
    } else {
      println!("\nChecksum update failed!");
    }
  }
  ok
}

fn load_layout(cli: &Cli) -> Result<ChecksumLayout> {
  let config = match &cli.config {
    Some(path) => ChecksumConfig::from_path(path)
      .ok_or_else(|| anyhow!("failed to load config {}", path.display()))?,
    None => {
      let cwd = std::env::current_dir().context("failed to read working directory")?;
      ChecksumConfig::discover(&cwd)
    }
  };

  Ok(config.resolve_layout(
    |key| std::env::var(key).ok(),
    cli.install_root.clone(),
    cli.source_root.clone(),
  ))
}

/// Pretty JSON for `report`, or `None` when it cannot be represented (non UTF-8 paths).
fn to_json<T: Serialize>(report: &T) -> Option<String> {
  match serde_json::to_string_pretty(report) {
    Ok(text) => Some(format!("{text}\n")),
    Err(err) => {
      log::warn!("cannot render JSON report, falling back to status lines: {err}");
      None
    }
  }
}

fn render_generation(report: &GenerationReport, json: bool) -> String {
  if let Some(text) = json.then(|| to_json(report)).flatten() {
    return text;
  }

  let mut out = String::new();
  for asset in &report.assets {
    out.push_str(&format!("✓ Generated checksum for {}\n", asset.description));
  }
  out.push_str(&format!(
    "\nChecksums successfully written to {}\n",
    report.manifest_path.display()
  ));
  out
}

fn render_verification(report: &VerificationReport, json: bool) -> String {
  if let Some(text) = json.then(|| to_json(report)).flatten() {
    return text;
  }

  let mut out = String::new();
  for asset in &report.assets {
    let line = match &asset.status {
      AssetStatus::Valid => format!("✓ Valid checksum for {}", asset.file_name),
      AssetStatus::Mismatch => format!("❌ Checksum mismatch for {}", asset.file_name),
      AssetStatus::Missing { .. } => {
        format!("❌ Cannot verify {} - file not found", asset.file_name)
      }
      AssetStatus::Unreadable { reason } => {
        format!("❌ Cannot verify {} - {reason}", asset.file_name)
      }
    };
    out.push_str(&line);
    out.push('\n');
  }
  out
}
