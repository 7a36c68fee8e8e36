//! Configuration view and validation commands: `grind config`.

use anyhow::Result;

use grind::config::Config;
use grind::grind_config::CONFIG_FILE;
use grind::ui::icons::{CHECK, WARN};

use super::super::ConfigCommands;

pub fn cmd_config(config: &Config, command: Option<ConfigCommands>) -> Result<()> {
    let config_path = config.root.join(CONFIG_FILE);

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Grind Configuration");
            println!("===================");
            println!();

            if config_path.exists() {
                println!("Config file: {}", config_path.display());
            } else {
                println!("No {} found, using defaults", CONFIG_FILE);
            }
            println!();

            let toml = config.toml();
            println!("[paths]");
            println!("  registry = \"{}\"", toml.paths.registry);
            println!("  readme = \"{}\"", toml.paths.readme);
            println!("  index = \"{}\"", toml.paths.index);
            println!("  python_dir = \"{}\"", toml.paths.python_dir);
            println!("  sql_dir = \"{}\"", toml.paths.sql_dir);
            println!();
            println!("[links]");
            println!("  problem_base = \"{}\"", toml.links.problem_base);
            println!();
            println!("Repository root: {}", config.root.display());
            println!();
        }
        Some(ConfigCommands::Validate) => {
            let warnings = config.toml().validate();

            if warnings.is_empty() {
                println!("{}Configuration is valid.", CHECK);
            } else {
                println!("{}Configuration warnings:", WARN);
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
        }
    }

    Ok(())
}
