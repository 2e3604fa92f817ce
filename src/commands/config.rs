//! Config command implementation

use console::Style;

use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::commands::helpers::Context;
use crate::error::{Result, config::write_failed};

pub fn run(mut context: Context, args: ConfigArgs) -> Result<()> {
    match args.command.unwrap_or(ConfigSubcommand::Show) {
        ConfigSubcommand::Show => show(&context),
        ConfigSubcommand::Path => {
            println!("{}", context.config_path.display());
            Ok(())
        }
        ConfigSubcommand::Set { key, value } => {
            context.config.set(&key, &value)?;
            context.config.save(&context.config_path)?;
            println!("Set {key} = {value}");
            Ok(())
        }
    }
}

fn show(context: &Context) -> Result<()> {
    let json = serde_json::to_string_pretty(&context.config)
        .map_err(|e| write_failed(&context.config_path, e.to_string()))?;
    println!(
        "{} {}",
        Style::new().bold().apply_to("Configuration:"),
        context.config_path.display()
    );
    println!("{json}");
    Ok(())
}
