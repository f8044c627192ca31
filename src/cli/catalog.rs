//! Catalog discovery commands (`glyphscan catalog ...`).

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glyphscan::{CatalogFile, CatalogRegistry};

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List all built-in catalogs.
    List,
    /// Print every glyph of a built-in catalog.
    Show(CatalogShowArgs),
}

/// Arguments for `glyphscan catalog show`.
#[derive(Args, Debug)]
pub struct CatalogShowArgs {
    /// Catalog name to display.
    pub name: String,
    /// Print the catalog as a JSON catalog file instead.
    #[arg(long)]
    pub json: bool,
}

/// Execute a catalog command.
pub fn handle(command: CatalogCommand) -> Result<()> {
    match command {
        CatalogCommand::List => list(),
        CatalogCommand::Show(args) => show(args),
    }
}

fn list() -> Result<()> {
    println!("Available catalogs:");
    for builtin in CatalogRegistry::list() {
        println!(
            "  - {} ({} rows): {}",
            builtin.name, builtin.height, builtin.description
        );
    }
    Ok(())
}

fn show(args: CatalogShowArgs) -> Result<()> {
    let builtin = CatalogRegistry::get(&args.name)
        .with_context(|| format!("catalog '{}' not found", args.name))?;
    let catalog = builtin.build()?;
    if args.json {
        let json = serde_json::to_string_pretty(&CatalogFile::from_catalog(&catalog))
            .context("failed to serialize catalog")?;
        println!("{}", json);
        return Ok(());
    }
    println!("Catalog: {}", builtin.name);
    println!("{}", builtin.description);
    for (ch, image) in catalog.entries() {
        println!();
        println!("'{}' ({}x{})", ch, image.width(), image.height());
        for row in image.to_string().lines() {
            println!("  |{}|", row);
        }
    }
    Ok(())
}
