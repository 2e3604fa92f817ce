//! Cache command implementation

use crate::cache::{cache_stats, list_cached_assets};
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::commands::helpers::Context;
use crate::error::Result;

pub fn run(context: &Context, args: CacheArgs) -> Result<()> {
    let cache_dir = context.cache_dir()?;

    let stats = cache_stats(&cache_dir)?;
    println!("Cache Statistics:");
    println!("  Location: {}", cache_dir.display());
    println!("  Jars: {}", stats.assets);
    println!("  Size: {}", stats.formatted_size());

    match args.command {
        Some(CacheSubcommand::List) => {
            println!();
            let assets = list_cached_assets(&cache_dir)?;
            if assets.is_empty() {
                println!("No cached jars.");
                return Ok(());
            }
            println!("Cached jars ({}):", assets.len());
            for asset in &assets {
                println!("  {} ({})", asset.name, asset.formatted_size());
            }
        }
        None if stats.assets == 0 => println!("\nCache is empty."),
        None => println!("\nRun 'sledge cache list' to list cached jars."),
    }

    Ok(())
}
