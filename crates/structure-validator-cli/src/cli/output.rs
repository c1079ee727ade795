//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! validation results.

use colored::Colorize;
use std::io::Write;
use structure_validator_core::config::Preset;
use structure_validator_core::{Finding, Severity, ValidationResult};

/// Width of the horizontal rules in the human report.
const RULE_WIDTH: usize = 50;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Writes a validation result as pretty-printed JSON.
///
/// Keys are camelCase and absent optional finding fields are omitted.
pub fn write_json<W: Write>(writer: &mut W, result: &ValidationResult) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    fn write_rule(&mut self) -> std::io::Result<()> {
        let rule = "─".repeat(RULE_WIDTH);
        if self.use_colors {
            writeln!(self.writer, "{}", rule.dimmed())
        } else {
            writeln!(self.writer, "{}", rule)
        }
    }

    fn write_detail(&mut self, label: &str, value: &str) -> std::io::Result<()> {
        let line = format!("   {}: {}", label, value);
        if self.use_colors {
            writeln!(self.writer, "{}", line.dimmed())
        } else {
            writeln!(self.writer, "{}", line)
        }
    }

    /// Writes the report header with scan counts.
    pub fn write_header(&mut self, result: &ValidationResult) -> std::io::Result<()> {
        let title = "Project Structure Validation Results";
        if self.use_colors {
            writeln!(self.writer, "\n{}", title.bold())?;
        } else {
            writeln!(self.writer, "\n{}", title)?;
        }
        self.write_rule()?;

        let counts = [
            format!("Files scanned: {}", result.files_scanned),
            format!("Directories scanned: {}", result.directories_scanned),
        ];
        for line in counts {
            if self.use_colors {
                writeln!(self.writer, "{}", line.dimmed())?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }
        writeln!(self.writer)
    }

    /// Writes a section heading for errors or warnings.
    pub fn write_section_header(&mut self, severity: Severity, count: usize) -> std::io::Result<()> {
        let heading = match severity {
            Severity::Error => format!("✗ {} Error{}", count, plural(count)),
            Severity::Warning => format!("⚠ {} Warning{}", count, plural(count)),
        };
        if self.use_colors {
            let heading = match severity {
                Severity::Error => heading.red().bold(),
                Severity::Warning => heading.yellow().bold(),
            };
            writeln!(self.writer, "{}", heading)?;
        } else {
            writeln!(self.writer, "{}", heading)?;
        }
        writeln!(self.writer)
    }

    /// Writes a single numbered finding with its details.
    pub fn write_finding(&mut self, index: usize, finding: &Finding) -> std::io::Result<()> {
        let title = format!("{}. {}", index, finding.message);
        if self.use_colors {
            let title = match finding.severity {
                Severity::Error => title.red(),
                Severity::Warning => title.yellow(),
            };
            writeln!(self.writer, "{}", title)?;
        } else {
            writeln!(self.writer, "{}", title)?;
        }

        if let Some(file) = &finding.file {
            self.write_detail("File", file)?;
        }
        if let Some(directory) = &finding.directory {
            self.write_detail("Directory", directory)?;
        }
        if let Some(actual) = &finding.actual {
            self.write_detail("Actual", actual)?;
        }
        if let Some(expected) = &finding.expected {
            self.write_detail("Expected", expected)?;
        }
        if let Some(suggestion) = &finding.suggestion {
            let line = format!("   💡 {}", suggestion);
            if self.use_colors {
                writeln!(self.writer, "{}", line.cyan())?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }

        writeln!(self.writer)
    }

    /// Writes the closing summary.
    pub fn write_summary(&mut self, result: &ValidationResult) -> std::io::Result<()> {
        let errors = result.errors.len();
        let warnings = result.warnings.len();

        if errors > 0 {
            let message = format!("\n✗ Validation failed with {} error{}", errors, plural(errors));
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "\n⚠ Validation passed with {} warning{}",
                warnings,
                plural(warnings)
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.yellow().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }
        writeln!(self.writer)
    }

    /// Writes the full report for a validation result.
    pub fn write_report(&mut self, result: &ValidationResult) -> std::io::Result<()> {
        self.write_header(result)?;

        if result.is_clean() {
            let message = "✓ No issues found!";
            if self.use_colors {
                writeln!(self.writer, "{}", message.green())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
            return writeln!(self.writer);
        }

        if result.has_errors() {
            self.write_section_header(Severity::Error, result.errors.len())?;
            for (i, finding) in result.errors.iter().enumerate() {
                self.write_finding(i + 1, finding)?;
            }
        }

        if result.has_warnings() {
            self.write_section_header(Severity::Warning, result.warnings.len())?;
            for (i, finding) in result.warnings.iter().enumerate() {
                self.write_finding(i + 1, finding)?;
            }
        }

        self.write_rule()?;
        self.write_summary(result)
    }

    /// Writes the problems found in a configuration.
    pub fn write_config_errors(&mut self, problems: &[String]) -> std::io::Result<()> {
        let heading = "\n✗ Configuration Errors";
        if self.use_colors {
            writeln!(self.writer, "{}", heading.red().bold())?;
        } else {
            writeln!(self.writer, "{}", heading)?;
        }
        for problem in problems {
            let line = format!("  • {}", problem);
            if self.use_colors {
                writeln!(self.writer, "{}", line.red())?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }
        writeln!(self.writer)
    }

    /// Writes the list of built-in presets.
    pub fn write_presets(&mut self, presets: &[Preset]) -> std::io::Result<()> {
        let heading = "\nAvailable presets:";
        if self.use_colors {
            writeln!(self.writer, "{}", heading.bold())?;
        } else {
            writeln!(self.writer, "{}", heading)?;
        }
        for preset in presets {
            writeln!(self.writer, "  • {} - {}", preset.name, preset.description)?;
        }
        writeln!(self.writer)
    }

    /// Writes a plain informational line.
    pub fn write_info(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
