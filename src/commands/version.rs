//! Version command implementation

use crate::brand::{BRAND, LAUNCHER_VERSION};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("sledge {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  {BRAND} launcher version: {LAUNCHER_VERSION}");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
