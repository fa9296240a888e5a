use anyhow::Result;
use clap::Parser;

use scm_version::config;
use scm_version::git::Git2Repository;
use scm_version::orchestration;
use scm_version::resolver::OutputMode;
use scm_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "scm-version",
    about = "Derive the version of the current checkout from git tag metadata"
)]
struct Args {
    #[arg(
        long,
        help = "Emit a PEP 440 development version instead of a semantic one"
    )]
    pep440: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mode = if args.pep440 {
        OutputMode::Pep440
    } else {
        OutputMode::Semantic
    };

    // Load configuration
    let config = match config::load_config(None) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Nothing can be derived without a repository
    let repo = match Git2Repository::discover(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let version = match orchestration::derive_version(&repo, &config, mode) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    println!("{}", version);

    Ok(())
}
