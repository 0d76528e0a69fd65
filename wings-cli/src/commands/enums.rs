//! Enumeration command handlers
//!
//! Lists the closed enumerations and checks values against their symbol sets.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use wings_beans::{EnumKind, Symbol};

/// Enumeration subcommands
#[derive(Subcommand)]
pub enum EnumCommands {
    /// List every enumeration kind
    List,
    /// Show the symbols of one enumeration
    Show {
        /// Enumeration kind (e.g., execution-status)
        kind: String,
    },
    /// Check that a value is a declared symbol
    Check {
        /// Enumeration kind (e.g., execution-status)
        kind: String,

        /// Value to check, compared case-sensitively
        value: String,
    },
}

/// Handle enumeration commands
pub fn handle_enum_command(command: EnumCommands) -> Result<()> {
    match command {
        EnumCommands::List => {
            list_enums();
            Ok(())
        }
        EnumCommands::Show { kind } => show_enum(&kind),
        EnumCommands::Check { kind, value } => check_value(&kind, &value),
    }
}

fn lookup(kind: &str) -> Result<EnumKind> {
    EnumKind::lookup(kind).with_context(|| {
        format!(
            "Unknown enumeration `{}` (try `wings enums list`)",
            kind
        )
    })
}

/// List every enumeration kind
fn list_enums() {
    println!(
        "{}",
        format!("Found {} enumeration(s):", EnumKind::all().len()).bold()
    );
    println!();
    for kind in EnumKind::all() {
        println!(
            "  {} {} {}",
            "▸".cyan(),
            kind.as_str().bold(),
            format!("({} symbols)", kind.symbols().len()).dimmed()
        );
    }
}

/// Show the symbols of one enumeration
fn show_enum(kind: &str) -> Result<()> {
    let kind = lookup(kind)?;

    println!("{}", format!("{}:", kind.as_str()).bold());
    for line in symbol_lines(kind) {
        println!("  {}", line);
    }

    Ok(())
}

/// One line per symbol, with the label when it differs
fn symbol_lines(kind: EnumKind) -> Vec<String> {
    kind.symbols()
        .into_iter()
        .map(|(symbol, label)| {
            if symbol == label {
                symbol.to_string()
            } else {
                format!("{:<28} {}", symbol, label)
            }
        })
        .collect()
}

/// Check a value against an enumeration
fn check_value(kind: &str, value: &str) -> Result<()> {
    let kind = lookup(kind)?;
    let symbol = kind.parse(value)?;

    println!(
        "{}",
        format!("✓ {} is a valid {}", symbol, kind.as_str())
            .green()
            .bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lines_show_labels() {
        let lines = symbol_lines(EnumKind::EnvironmentType);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PROD"));
        assert!(lines[0].ends_with("Production"));
        assert_eq!(lines[2], "ALL");
    }

    #[test]
    fn test_check_value() {
        assert!(check_value("execution-strategy", "SERIAL").is_ok());
        assert!(check_value("execution-strategy", "serial").is_err());
        assert!(check_value("no-such-kind", "SERIAL").is_err());
    }

    #[test]
    fn test_show_unknown_kind() {
        let err = show_enum("colour").unwrap_err();
        assert!(err.to_string().contains("Unknown enumeration"));
    }
}
