use anyhow::Result;

use crate::core::RecalcMode;
use crate::tui::theme::ThemeMode;
use crate::tui::CalculatorTui;

/// Configuration for the interactive calculator.
pub struct TuiConfig {
    pub mode: RecalcMode,
    pub theme: ThemeMode,
}

pub fn run_calculator(config: TuiConfig) -> Result<()> {
    let mut tui = CalculatorTui::new(config.mode, config.theme)?;
    tui.run()
}
