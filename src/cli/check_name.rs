//! Slot name checking.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::core::SlottyError;
use crate::slot::{base_slot_name, is_extension_slot, is_valid_slot_name};

/// Check one or more slot names.
///
/// ```bash
/// slotty check-name header nav:after "bad name"
/// ```
#[derive(Args, Debug)]
pub struct CheckNameCommand {
    /// Slot names to check.
    #[arg(required = true)]
    names: Vec<String>,
}

/// Result of checking a single name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReport {
    /// The name as given.
    pub name: String,
    /// Whether it matches the naming rules.
    pub valid: bool,
    /// Base slot name, when valid.
    pub base: Option<String>,
}

impl CheckNameCommand {
    /// Check each name and print a line per name.
    ///
    /// # Errors
    ///
    /// [`SlottyError::InvalidSlotName`] for the first invalid name.
    pub fn execute(self) -> Result<()> {
        let reports = check_names(&self.names);

        for report in &reports {
            match (report.valid, report.base.as_deref()) {
                (true, Some(base)) if is_extension_slot(&report.name) => {
                    println!("{} {} (extends '{}')", "✓".green(), report.name, base);
                }
                (true, _) => println!("{} {}", "✓".green(), report.name),
                (false, _) => println!("{} {}", "✗".red(), report.name),
            }
        }

        match reports.iter().find(|report| !report.valid) {
            Some(invalid) => Err(SlottyError::invalid_slot_name(invalid.name.as_str()).into()),
            None => Ok(()),
        }
    }
}

/// Check `names` in order.
#[must_use]
pub fn check_names(names: &[String]) -> Vec<NameReport> {
    names
        .iter()
        .map(|name| {
            let valid = is_valid_slot_name(name);
            let base = if valid {
                base_slot_name(name).ok().map(str::to_string)
            } else {
                None
            };
            NameReport {
                name: name.clone(),
                valid,
                base,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_names() {
        let names = ["header", "nav:after", "1st"].map(String::from);
        let reports = check_names(&names);

        assert!(reports[0].valid);
        assert_eq!(reports[0].base.as_deref(), Some("header"));
        assert_eq!(reports[1].base.as_deref(), Some("nav"));
        assert!(!reports[2].valid);
        assert_eq!(reports[2].base, None);
    }

    #[test]
    fn test_execute_fails_on_first_invalid_name() {
        let cmd = CheckNameCommand {
            names: ["ok", "bad name", "also bad!"].map(String::from).to_vec(),
        };
        let err = cmd.execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SlottyError>(),
            Some(&SlottyError::invalid_slot_name("bad name"))
        );
    }

    #[test]
    fn test_execute_succeeds_for_valid_names() {
        let cmd = CheckNameCommand {
            names: vec!["main".to_string(), "main:before".to_string()],
        };
        assert!(cmd.execute().is_ok());
    }
}
