//! Surface CLI tool
//!
//! Inspects the wrapper classes declared by `surface-api` and drives them
//! against the in-memory host from `surface-sim`.

mod commands;
mod output;
mod path;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use surface_sim::{HostFixture, SimRuntime};
use tracing_subscriber::EnvFilter;

use crate::output::{resolve_color_choice, StyledOutput};

#[derive(Parser)]
#[command(name = "surface")]
#[command(about = "Inspect and exercise controller surface wrappers", long_about = None)]
#[command(version)]
struct Cli {
    /// Colored output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List wrapper classes and their effective method maps
    Classes {
        /// Only show this class
        #[arg(long)]
        class: Option<String>,
    },

    /// Navigate a dotted call path from the host root
    Walk {
        /// Call path, e.g. 'createTrackBank(8, 2, 0).getTrack(1).getVolume()'
        path: String,
        /// Fixture file (.toml or .json); defaults to the built-in host
        #[arg(short, long)]
        fixture: Option<PathBuf>,
        /// Call the final step twice and report whether the wrapper is reused
        #[arg(short, long)]
        repeat: bool,
    },

    /// Compare declared cache policies with fixture behaviour
    Audit {
        /// Fixture file (.toml or .json); defaults to the built-in host
        #[arg(short, long)]
        fixture: Option<PathBuf>,
    },
}

/// Install the log subscriber.
///
/// `SURFACE_LOG` takes precedence over `RUST_LOG`; without either only
/// warnings are shown.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SURFACE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_fixture(path: Option<&Path>) -> anyhow::Result<HostFixture> {
    let fixture = match path {
        Some(path) => HostFixture::from_file(path)
            .with_context(|| format!("loading fixture {}", path.display()))?,
        None => HostFixture::default_fixture()?,
    };
    tracing::debug!(root = %fixture.root, kinds = fixture.objects.len(), "fixture loaded");
    Ok(fixture)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut out = StyledOutput::new(resolve_color_choice(cli.color.as_deref()));
    let registry = surface_api::registry();

    match cli.command {
        Commands::Classes { class } => {
            commands::classes::execute(&registry, class.as_deref(), &mut out)?;
        }

        Commands::Walk {
            path,
            fixture,
            repeat,
        } => {
            let rt = SimRuntime::from_fixture(load_fixture(fixture.as_deref())?);
            commands::walk::execute(&rt, &path, repeat, &mut out)?;
        }

        Commands::Audit { fixture } => {
            let fixture = load_fixture(fixture.as_deref())?;
            let mismatches = commands::audit::execute(&registry, &fixture, &mut out);
            if mismatches > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "root = \"Host\"\n[objects.Host.methods]\ngetHostVendor = {{ returns = \"Acme\" }}"
        )
        .unwrap();

        let fixture = load_fixture(Some(file.path())).unwrap();
        assert_eq!(fixture.root, "Host");
        assert_eq!(fixture.objects.len(), 1);
    }

    #[test]
    fn test_load_fixture_error_names_path() {
        let err = load_fixture(Some(Path::new("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("loading fixture missing.toml"));
    }

    #[test]
    fn test_cli_parses_walk() {
        let cli = Cli::parse_from(["surface", "--color", "never", "walk", "getProject()", "-r"]);
        assert_eq!(cli.color.as_deref(), Some("never"));
        match cli.command {
            Commands::Walk { path, repeat, fixture } => {
                assert_eq!(path, "getProject()");
                assert!(repeat);
                assert!(fixture.is_none());
            }
            _ => panic!("expected walk"),
        }
    }
}
