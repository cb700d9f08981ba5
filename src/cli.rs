use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::RecalcMode;
use crate::io::output::OutputFormat;
use crate::tui::theme::ThemeMode;

#[derive(Parser, Debug)]
#[command(name = "adplan")]
#[command(about = "Advertising funnel and campaign budget calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive calculator
    Tui {
        /// Recalculation trigger mode
        #[arg(long, value_enum)]
        mode: Option<RecalcModeArg>,

        /// Color theme
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Compute campaign metrics from funnel assumptions
    ///
    /// Values that fail to parse as numbers fall back to zero instead of
    /// being rejected, matching the interactive form.
    Estimate {
        /// Number of sales the campaign must close
        #[arg(long, default_value = "0")]
        target_sales: String,

        /// Percentage of clicks that become meetings
        #[arg(long, default_value = "0")]
        click_to_meeting: String,

        /// Percentage of meetings that convert to sales
        #[arg(long, default_value = "0")]
        meeting_to_sale: String,

        /// Average cost per click in rupees
        #[arg(long, default_value = "0")]
        cost_per_click: String,

        /// Average value per sale in rupees
        #[arg(long, default_value = "0")]
        avg_order_value: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and decorations
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecalcModeArg {
    /// Recompute outputs on every edit
    Reactive,
    /// Recompute only when calculate is triggered
    Deferred,
}

impl From<RecalcModeArg> for RecalcMode {
    fn from(arg: RecalcModeArg) -> Self {
        match arg {
            RecalcModeArg::Reactive => RecalcMode::Reactive,
            RecalcModeArg::Deferred => RecalcMode::Deferred,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Terminal,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}
