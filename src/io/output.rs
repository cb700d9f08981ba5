//! Report writers for the estimate command.
//!
//! Formatting decisions stay here and in `formatting`; the report itself
//! carries raw numbers only.

use crate::core::{input_field_spec, EstimateReport, InputField, OUTPUT_SPECS};
use crate::formatting::{
    accent_text, display_or_dash, format_metric, ColoredFormatter, FormattingConfig,
    OutputFormatter, PlainFormatter,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &EstimateReport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &EstimateReport) -> Result<()> {
        writeln!(self.writer, "# Campaign Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_assumptions(&mut self, report: &EstimateReport) -> Result<()> {
        writeln!(self.writer, "## Assumptions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;

        for field in InputField::ALL {
            let spec = input_field_spec(field);
            writeln!(
                self.writer,
                "| {} | {} |",
                spec.label,
                format_metric(spec.kind, report.inputs.get(field))
            )?;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &EstimateReport) -> Result<()> {
        writeln!(self.writer, "## Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Notes |")?;
        writeln!(self.writer, "|--------|-------|-------|")?;

        for spec in &OUTPUT_SPECS {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                spec.title,
                display_or_dash(spec.kind, spec.value(&report.outputs)),
                spec.description
            )?;
        }

        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> Result<()> {
        self.write_header(report)?;
        self.write_assumptions(report)?;
        self.write_metrics(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        let formatter: Box<dyn OutputFormatter> = if config.color.should_use_color() {
            Box::new(ColoredFormatter::new(config))
        } else {
            Box::new(PlainFormatter)
        };

        Self { writer, formatter }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Campaign Estimate"))?;
        writeln!(self.writer, "{}", self.formatter.header("================="))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Assumptions:"))?;
        for field in InputField::ALL {
            let spec = input_field_spec(field);
            writeln!(
                self.writer,
                "  {}: {}",
                spec.label,
                format_metric(spec.kind, report.inputs.get(field))
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Metrics:"))?;
        for spec in &OUTPUT_SPECS {
            let value = display_or_dash(spec.kind, spec.value(&report.outputs));
            writeln!(
                self.writer,
                "  {}: {}  {}",
                spec.title,
                accent_text(self.formatter.as_ref(), spec.accent, &value),
                self.formatter.dim(spec.description)
            )?;
        }

        Ok(())
    }
}

/// Build a boxed writer for the requested format and destination.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
    formatting: FormattingConfig,
) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, formatting)),
    })
}
