//! stadiumport-seo - structured data and head metadata for stadiumport pages.

mod cli;
mod config;
mod data;
mod generator;
mod logger;
mod seo;
mod utils;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use data::{SiteData, load_site_data};
use generator::sitemap::write_sitemap;
use seo::head::HeadNode;
use seo::navigate::NavState;
use seo::{MemoryHead, Navigator, RouteContext, resolve};
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_quiet(cli.quiet);

    let config = load_config(&cli)?;
    let data = load_site_data(&config)?;

    match &cli.command {
        Commands::Head { paths, each } => print_head(&config, &data, paths, *each),
        Commands::Resolve { paths } => print_entities(&config, paths),
        Commands::Sitemap { output } => write_sitemap(config.base_url(), &data, output.as_deref()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// Only the default config file may be missing, in which case the defaults
/// describe the production site. An explicit `-C` path must exist.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = if cli.config.exists() {
        SiteConfig::from_path(&cli.config)?
    } else if cli.uses_default_config() {
        SiteConfig::default()
    } else {
        bail!("Config file not found: {}", cli.config.display())
    };
    config.update_with_cli(cli);
    config.validate()?;
    Ok(config)
}

/// Navigate through `paths` in order over one head, like a client-side
/// router would, and print the head.
fn print_head(config: &SiteConfig, data: &SiteData, paths: &[String], each: bool) -> Result<()> {
    // Static part of the served `index.html` head
    let mut head = MemoryHead::with_nodes(vec![HeadNode::Title(config.site.name.clone())]);
    let mut navigator = Navigator::new(&config.site, data);
    let mut out = stdout().lock();

    for (i, path) in paths.iter().enumerate() {
        let report = navigator
            .on_route_change(&mut head, path)
            .with_context(|| format!("Failed to reconcile head for `{path}`"))?;
        debug_assert_eq!(navigator.state(), &NavState::Idle);

        log!(
            "head";
            "{} -> {} ({} graphs at {}{})",
            report.route.pathname,
            entity_label(&report.entity),
            report.emitted.len(),
            report.stamp,
            if report.retracted.is_empty() {
                String::new()
            } else {
                format!(", retracted {}", report.retracted.join(", "))
            }
        );

        if each || i + 1 == paths.len() {
            writeln!(out, "{}", head.render()?)?;
        }
    }
    Ok(())
}

fn print_entities(config: &SiteConfig, paths: &[String]) -> Result<()> {
    let resolved: Vec<_> = paths
        .iter()
        .map(|path| {
            let route = RouteContext::new(&config.site.url, path);
            let entity = resolve(&route.pathname);
            serde_json::json!({
                "pathname": route.pathname,
                "url": route.full_url,
                "entity": entity,
            })
        })
        .collect();

    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, &resolved)?;
    writeln!(out)?;
    Ok(())
}

const fn entity_label(entity: &seo::PageEntity) -> &'static str {
    match entity {
        seo::PageEntity::Home => "home",
        seo::PageEntity::CityGuide { .. } => "city guide",
        seo::PageEntity::StadiumGuide { .. } => "stadium guide",
        seo::PageEntity::CollectionIndex { .. } => "collection",
        seo::PageEntity::Article { .. } => "article",
        seo::PageEntity::Generic => "generic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["stadiumport-seo"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let config = load_config(&cli(&["resolve", "/"])).unwrap();
        assert_eq!(config.site.url, "https://stadiumport.com");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config(&cli(&["-C", path.to_str().unwrap(), "resolve", "/"])).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.toml");
        fs::write(&path, "[site]\nname = \"Preview\"\n").unwrap();

        let config = load_config(&cli(&["-C", path.to_str().unwrap(), "resolve", "/"])).unwrap();
        assert_eq!(config.site.name, "Preview");
    }
}
