use anyhow::Result;
use clap::Parser;

use adplan::cli::{Cli, Commands};
use adplan::commands::{estimate, init, tui};
use adplan::config;
use adplan::formatting::FormattingConfig;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { mode, theme } => {
            let defaults = config::get_config();
            let tui_config = tui::TuiConfig {
                mode: mode.map(Into::into).unwrap_or(defaults.calculator.mode),
                theme: theme.map(Into::into).unwrap_or(defaults.calculator.theme),
            };
            tui::run_calculator(tui_config)
        }

        Commands::Estimate {
            target_sales,
            click_to_meeting,
            meeting_to_sale,
            cost_per_click,
            avg_order_value,
            format,
            output,
            plain,
        } => {
            let defaults = config::get_config();
            let estimate_config = estimate::EstimateConfig {
                target_sales,
                click_to_meeting,
                meeting_to_sale,
                cost_per_click,
                avg_order_value,
                format: format
                    .map(Into::into)
                    .unwrap_or(defaults.output.default_format),
                output,
                formatting: create_formatting_config(plain),
            };
            estimate::handle_estimate(estimate_config)
        }

        Commands::Init { force } => init::init_config(force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
