//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Config file looked up when `-C` is not given. It may be absent.
pub const DEFAULT_CONFIG: &str = "stadiumport.toml";

/// Structured-data and head metadata synthesis for stadiumport
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: stadiumport.toml, optional)
    #[arg(short = 'C', long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Lookup-table file, overrides `[data].path`
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override the deployed site url.
    ///
    /// Useful for previews where the origin differs from production:
    ///   stadiumport-seo --site-url "https://preview.stadiumport.com" head /
    #[arg(long = "site-url")]
    pub site_url: Option<String>,

    /// Suppress log output (stdout only carries command output)
    #[arg(short, long)]
    pub quiet: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Navigate through the given paths in order and print the resulting <head>
    Head {
        /// Pathnames to navigate, e.g. /world-cup-2026-stadiums/sofi-stadium
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print the head after every navigation instead of only the last
        #[arg(short, long)]
        each: bool,
    },

    /// Print the page entity each path resolves to, as JSON
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Write a sitemap listing every route known to the lookup tables
    Sitemap {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_head(&self) -> bool {
        matches!(self.command, Commands::Head { .. })
    }
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
    pub const fn is_sitemap(&self) -> bool {
        matches!(self.command, Commands::Sitemap { .. })
    }
}

impl Cli {
    /// Whether `--config` points at the default, optional file.
    pub fn uses_default_config(&self) -> bool {
        self.config == Path::new(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_head_command() {
        let cli = Cli::try_parse_from([
            "stadiumport-seo",
            "--site-url",
            "https://example.com",
            "head",
            "--each",
            "/",
            "/world-cup-2026-stadiums",
        ])
        .unwrap();

        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.config, PathBuf::from("stadiumport.toml"));
        match cli.command {
            Commands::Head { paths, each } => {
                assert!(each);
                assert_eq!(paths, vec!["/", "/world-cup-2026-stadiums"]);
            }
            _ => panic!("expected head command"),
        }
    }

    #[test]
    fn test_explicit_config_is_not_default() {
        let cli = Cli::try_parse_from(["stadiumport-seo", "resolve", "/"]).unwrap();
        assert!(cli.uses_default_config());

        let cli =
            Cli::try_parse_from(["stadiumport-seo", "-C", "preview.toml", "resolve", "/"]).unwrap();
        assert!(!cli.uses_default_config());
    }

    #[test]
    fn test_head_requires_paths() {
        assert!(Cli::try_parse_from(["stadiumport-seo", "head"]).is_err());
    }

    #[test]
    fn test_parse_sitemap_output() {
        let cli = Cli::try_parse_from(["stadiumport-seo", "-q", "sitemap", "-o", "out.xml"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.is_sitemap());
        match cli.command {
            Commands::Sitemap { output } => assert_eq!(output, Some(PathBuf::from("out.xml"))),
            _ => panic!("expected sitemap command"),
        }
    }
}
