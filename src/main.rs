use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use git_semver::cli::orchestration::{self, Overrides, WorkflowArgs};
use git_semver::scanner::Bump;
use git_semver::{telemetry, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "A tool for bumping semantic versions based on git tags"
)]
struct Args {
    #[arg(long, global = true, default_value = "./", help = "Path to git repository")]
    repo: PathBuf,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Only consider tags with this prefix")]
    prefix: Option<String>,

    #[arg(long, global = true, help = "Only look at tags below version")]
    below: Option<String>,

    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        help = "Bump rc version, bumping other parts too if an rc does not already exist"
    )]
    rc: Option<bool>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log output (-v info, -vv debug)"
    )]
    verbose: u8,

    #[arg(long, help = "Bump major version")]
    major: bool,

    #[arg(long, help = "Bump minor version")]
    minor: bool,

    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        help = "Bump patch version"
    )]
    patch: bool,

    #[arg(long, help = "Set snapshot version")]
    snapshot: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print history since last tag
    History {
        #[arg(long, help = "Use a prefix for the messages")]
        msg_prefix: Option<String>,
    },
    /// Print the highest version without incrementing it
    Current,
    /// Print version information
    Version,
}

fn main() {
    let args = Args::parse();
    telemetry::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut workflow = WorkflowArgs {
        repo: args.repo,
        config_path: args.config,
        overrides: Overrides {
            prefix: args.prefix,
            below: args.below,
            release_candidates: args.rc,
            line_prefix: None,
        },
    };

    match args.command {
        Some(Command::Version) => {
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Command::Current) => {
            println!("{}", orchestration::current_version(&workflow)?);
        }
        Some(Command::History { msg_prefix }) => {
            workflow.overrides.line_prefix = msg_prefix;
            print!("{}", orchestration::history(&workflow)?);
        }
        None => {
            let bump = Bump {
                major: args.major,
                minor: args.minor,
                patch: args.patch,
                snapshot: args.snapshot,
                release_candidate: args.rc.unwrap_or(false),
            };

            let change = orchestration::next_version(&workflow, bump)?;
            if args.verbose > 0 {
                ui::display_version_change(&change.highest.to_string(), &change.next.to_string());
            }
            println!("{}", change.next);
        }
    }

    Ok(())
}
