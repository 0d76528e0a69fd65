//! Bean command handlers
//!
//! Validates JSON payloads against a record kind and prints them in
//! canonical form.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use wings_beans::{BeanKind, Symbol};

/// Bean subcommands
#[derive(Subcommand)]
pub enum BeanCommands {
    /// List every record kind
    Kinds,
    /// Validate a JSON payload and print its canonical form
    Validate {
        /// Record kind (e.g., web-hook-response)
        kind: String,

        /// Path to a JSON file, or `-` for stdin
        input: String,
    },
}

/// Handle bean commands
pub fn handle_bean_command(command: BeanCommands) -> Result<()> {
    match command {
        BeanCommands::Kinds => {
            list_kinds();
            Ok(())
        }
        BeanCommands::Validate { kind, input } => {
            let json = read_input(&input)?;
            let canonical = canonical_json(&kind, &json)?;
            println!("{}", canonical);
            Ok(())
        }
    }
}

/// List every record kind
fn list_kinds() {
    println!(
        "{}",
        format!("Found {} record kind(s):", BeanKind::all().len()).bold()
    );
    println!();
    for kind in BeanKind::all() {
        println!("  {} {}", "▸".cyan(), kind.as_str());
    }
}

/// Read a payload from a file or stdin
pub(super) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read payload file: {}", input))
}

/// Validate `json` as `kind` and render it pretty-printed
fn canonical_json(kind: &str, json: &str) -> Result<String> {
    let bean_kind = BeanKind::lookup(kind)
        .with_context(|| format!("Unknown record kind `{}` (try `wings bean kinds`)", kind))?;

    tracing::debug!(kind = bean_kind.as_str(), "Validating payload");

    let value = bean_kind
        .canonicalize(json)
        .with_context(|| format!("Payload is not a valid {}", bean_kind.as_str()))?;

    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_drops_nulls() {
        let output = canonical_json(
            "web-hook-response",
            r#"{"requestId":"r1","status":"SUCCESS","error":null}"#,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"requestId": "r1", "status": "SUCCESS"})
        );
    }

    #[test]
    fn test_canonical_json_reports_missing_field() {
        let err = canonical_json("url-info", r#"{"title":"Docs","url":""}"#).unwrap_err();
        assert!(err.to_string().contains("not a valid url-info"));
        assert!(format!("{:#}", err).contains("missing required field"));
    }

    #[test]
    fn test_canonical_json_unknown_kind() {
        let err = canonical_json("spaceship", "{}").unwrap_err();
        assert!(err.to_string().contains("Unknown record kind"));
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input("/nonexistent/payload.json").is_err());
    }
}
