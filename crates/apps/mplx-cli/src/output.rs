//! Output formatting for CLI.

use colored::Colorize;
use mplx_mcp::tools::DeriveRecipeAddressOutput;
use mplx_types::{ConversionStatus, EscrowValidation, FeeBreakdown, FeeCalculation, RecipeAnalysis};
use serde::Serialize;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn validity_line(is_valid: bool) -> String {
    if is_valid {
        format!("{} {}", "Valid:".bold(), "yes".green())
    } else {
        format!("{} {}", "Valid:".bold(), "no".red().bold())
    }
}

fn push_issues(lines: &mut Vec<String>, issues: &[String]) {
    if issues.is_empty() {
        return;
    }
    lines.push(format!("{}", "Issues:".yellow().bold()));
    for issue in issues {
        lines.push(format!("  - {}", issue));
    }
}

// =============================================================================
// Output Types
// =============================================================================

impl Render for RecipeAnalysis {
    fn render_human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Collection:".bold(), self.collection),
            format!("{} \"{}\"", "Name:".bold(), self.name),
            format!("{} {}", "URI:".bold(), self.uri),
            format!("{} {}..{}", "Index range:".bold(), self.min, self.max),
            format!("{} {}", "Swap amount:".bold(), self.amount),
            format!(
                "{} {} tokens / {} SOL",
                "Capture fee:".bold(),
                self.fee_amount_capture,
                self.sol_fee_amount_capture
            ),
            format!(
                "{} {} tokens / {} SOL",
                "Release fee:".bold(),
                self.fee_amount_release,
                self.sol_fee_amount_release
            ),
            format!("{} {}", "Path:".bold(), self.path),
            format!("{} {}", "Swaps:".bold(), self.count),
            validity_line(self.is_valid),
        ];
        push_issues(&mut lines, &self.issues);
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        to_json(self)
    }
}

impl Render for EscrowValidation {
    fn render_human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Escrow:".bold(), self.escrow),
            format!("{} {}", "Collection:".bold(), self.collection),
            format!("{} \"{}\"", "Name:".bold(), self.name),
            format!("{} {}", "URI:".bold(), self.uri),
            format!("{} {}..{}", "Index range:".bold(), self.min, self.max),
            format!("{} {}", "Swap amount:".bold(), self.amount),
            format!(
                "{} {} tokens / {} SOL",
                "Fee:".bold(),
                self.fee_amount,
                self.sol_fee_amount
            ),
            format!("{} {}", "Path:".bold(), self.path),
            format!("{} {}", "Swaps:".bold(), self.count),
            validity_line(self.is_valid),
        ];
        push_issues(&mut lines, &self.issues);
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        to_json(self)
    }
}

impl Render for ConversionStatus {
    fn render_human(&self) -> String {
        let state = if self.is_locked {
            "locked in escrow".yellow().bold()
        } else {
            "held by owner".green()
        };
        let mut lines = vec![
            format!("{} {}", "Asset:".bold(), self.asset),
            format!("{} {}", "Status:".bold(), state),
            format!("{} {}", "Owner:".bold(), self.current_owner),
        ];
        if let Some(escrow) = &self.escrow_account {
            lines.push(format!("{} {}", "Escrow:".bold(), escrow));
        }
        if let Some(amount) = self.token_amount {
            lines.push(format!("{} {}", "Token amount:".bold(), amount));
        }
        if let Some(op) = self.last_operation {
            lines.push(format!("{} {}", "Last operation:".bold(), op));
        }
        if let Some(ts) = self.timestamp {
            lines.push(format!("{} {}", "Timestamp:".bold(), ts));
        }
        if let Some(issues) = &self.issues {
            push_issues(&mut lines, issues);
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        to_json(self)
    }
}

fn breakdown_line(label: &str, fees: &FeeBreakdown) -> String {
    format!(
        "{} protocol {}, project {}, total {}",
        label.bold(),
        fees.protocol,
        fees.project,
        fees.total.to_string().cyan()
    )
}

impl Render for FeeCalculation {
    fn render_human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Operation:".bold(), self.operation),
            format!("{} {}", "Amount:".bold(), self.amount),
            breakdown_line("Token fees:", &self.token_fees),
            breakdown_line("SOL fees:", &self.sol_fees),
            validity_line(self.is_valid),
        ];
        push_issues(&mut lines, &self.issues);
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        to_json(self)
    }
}

impl Render for DeriveRecipeAddressOutput {
    fn render_human(&self) -> String {
        [
            format!("{} {}", "Recipe:".green().bold(), self.recipe),
            format!("{} {}", "Bump:".bold(), self.bump),
            format!("{} {}", "Collection:".bold(), self.collection),
            format!("{} {}", "Program:".bold(), self.program_id),
        ]
        .join("\n")
    }

    fn render_json(&self) -> String {
        to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_types::Operation;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_fee_calculation_json_uses_camel_case() {
        let calc = FeeCalculation {
            operation: Operation::Release,
            amount: 10.0,
            token_fees: FeeBreakdown {
                protocol: 0.5,
                project: 0.1,
                total: 0.6,
            },
            sol_fees: FeeBreakdown {
                protocol: 0.005,
                project: 0.0,
                total: 0.005,
            },
            is_valid: true,
            issues: vec![],
        };

        let json: serde_json::Value = serde_json::from_str(&calc.render(OutputFormat::Json)).unwrap();
        assert_eq!(json["operation"], "release");
        assert_eq!(json["tokenFees"]["total"], 0.6);
        assert_eq!(json["isValid"], true);
    }

    #[test]
    fn test_human_output_lists_issues() {
        colored::control::set_override(false);
        let status = ConversionStatus {
            asset: "asset".to_string(),
            is_locked: false,
            current_owner: String::new(),
            escrow_account: None,
            token_amount: None,
            last_operation: None,
            timestamp: None,
            issues: Some(vec!["Failed to check conversion status: boom".to_string()]),
        };

        let text = status.render(OutputFormat::Human);
        assert!(text.contains("Status: held by owner"));
        assert!(text.contains("Issues:"));
        assert!(text.contains("  - Failed to check conversion status: boom"));
        assert!(!text.contains("Escrow:"));
    }
}
