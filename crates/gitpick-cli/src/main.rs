//! gitpick - filtered git clones and remote tag listing.
//!
//! Usage:
//!   gitpick clone <url> <output-dir> --branch main --path docs/
//!   gitpick tags <url>
//!
//! `RUST_LOG` controls tracing verbosity; `--json` prints the structured
//! result instead of human-readable output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitpick::{
    CloneReport, CloneRequest, RemoteUrl, TagListReport, clone_filtered, list_remote_tags,
};

#[derive(Parser, Debug)]
#[command(name = "gitpick")]
#[command(version, about = "Filtered git clones and remote tag listing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone one branch of a remote, restricting the checkout to path prefixes
    Clone {
        /// Remote repository URL
        url: String,

        /// Directory to clone into
        output_dir: PathBuf,

        /// Branch to check out
        #[arg(short, long, default_value = "main")]
        branch: String,

        /// Path prefix to include in the checkout (repeatable; none = all paths)
        #[arg(short, long = "path", value_name = "PREFIX")]
        paths: Vec<String>,

        /// Skip resolving the branch tip commit id
        #[arg(long)]
        no_commit_id: bool,

        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the tags a remote advertises, without cloning
    Tags {
        /// Remote repository URL
        url: String,

        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Clone {
            url,
            output_dir,
            branch,
            paths,
            no_commit_id,
            json,
        } => {
            let request = CloneRequest {
                url: RemoteUrl::parse(url)?,
                branch,
                path_filters: paths,
                output_dir,
                resolve_commit: !no_commit_id,
            };
            let report = CloneReport::from(clone_filtered(&request));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.success {
                match &report.commit_id {
                    Some(id) => println!("{} {id}", style("cloned").green().bold()),
                    None => println!("{}", style("cloned").green().bold()),
                }
            } else {
                eprintln!("{} {}", style("error:").red().bold(), report.error_message);
            }
            Ok(exit_for(report.success))
        }
        Commands::Tags { url, json } => {
            let report = TagListReport::from(list_remote_tags(&RemoteUrl::parse(url)?));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.success {
                for tag in &report.tags {
                    println!("{}  {}", tag.commit_sha, tag.tag_name);
                }
            } else {
                eprintln!("{} {}", style("error:").red().bold(), report.error_message);
            }
            Ok(exit_for(report.success))
        }
    }
}

fn exit_for(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
