use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod anchor;
mod color;
mod commands;
mod config;
mod manifest;
mod output;
mod project;
mod prompt;
mod render;
mod tonal;

use commands::add::AddOptions;
use project::DiskTree;

#[derive(Parser)]
#[command(name = "themegen")]
#[command(version, about = "Derive tonal color palettes and wire them into a web project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate palettes for a project and patch its files
    Add {
        /// Name of the target project (optional, will prompt if not provided)
        name: Option<String>,
        /// Primary seed color, hex with a leading '#'
        #[arg(short, long)]
        primary: Option<String>,
        /// Accent seed color, hex with a leading '#'
        #[arg(short, long)]
        accent: Option<String>,
        /// Also insert the dark-theme block into the global stylesheet
        #[arg(long)]
        dark: bool,
        /// Root directory of the target project
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
    /// Print the derived palettes without touching any files
    Preview {
        /// Primary seed color, hex with a leading '#'
        #[arg(short, long)]
        primary: Option<String>,
        /// Accent seed color, hex with a leading '#'
        #[arg(short, long)]
        accent: Option<String>,
    },
}

fn main() -> Result<()> {
    let Cli { command } = Cli::parse();

    match command {
        Commands::Add {
            name,
            primary,
            accent,
            dark,
            project_dir,
        } => {
            let name = match name {
                Some(n) => n,
                None => prompt::project_name()?,
            };
            let primary = match primary {
                Some(c) => c,
                None => prompt::seed_color("primary", "#3f51b5")?,
            };
            let accent = match accent {
                Some(c) => c,
                None => prompt::seed_color("accent", "#ff4081")?,
            };

            let mut tree = DiskTree::new(project_dir);
            commands::add::execute(
                &AddOptions {
                    project_name: name,
                    primary,
                    accent,
                    dark,
                },
                &mut tree,
            )?;
        }
        Commands::Preview { primary, accent } => {
            let primary = match primary {
                Some(c) => c,
                None => prompt::seed_color("primary", "#3f51b5")?,
            };
            let accent = match accent {
                Some(c) => c,
                None => prompt::seed_color("accent", "#ff4081")?,
            };
            commands::preview::execute(&primary, &accent)?;
        }
    }

    Ok(())
}
