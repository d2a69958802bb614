//! Steps command - Print the step catalogue

use crate::domain::{possible_successors, FieldKind};
use crate::errors::{IntakeError, Result};
use crate::schemas::StepId;
use serde::Serialize;

/// One catalogue row
#[derive(Debug, Clone, Serialize)]
pub struct StepEntry {
    pub id: StepId,
    pub heading: &'static str,
    pub kind: &'static str,
    /// Answer key or key prefix the step writes to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'static str>,
    pub successors: Vec<StepId>,
}

/// Build the catalogue in declaration order
pub fn catalogue() -> Vec<StepEntry> {
    StepId::ALL
        .iter()
        .map(|&step| {
            let prompt = step.prompt();
            let (kind, key) = match prompt.field {
                FieldKind::SingleChoice { key, .. } => ("single", Some(key)),
                FieldKind::MultiChoice { prefix, .. } => ("multi", Some(prefix)),
                FieldKind::FreeText { key, .. } => ("text", Some(key)),
                FieldKind::Practical => ("practical", None),
                FieldKind::Contact => ("contact", None),
                FieldKind::Success => ("success", None),
            };
            StepEntry {
                id: step,
                heading: prompt.heading,
                kind,
                key,
                successors: possible_successors(step).to_vec(),
            }
        })
        .collect()
}

/// Plain text table, one step per line
pub fn format_catalogue(entries: &[StepEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.id.as_str().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let successors = if entry.successors.is_empty() {
                "-".to_string()
            } else {
                entry
                    .successors
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!(
                "{:<width$}  {:<9}  {}  -> {}",
                entry.id.as_str(),
                entry.kind,
                entry.heading,
                successors,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the step catalogue
pub async fn run(json: bool) -> Result<()> {
    let entries = catalogue();
    if json {
        let output = serde_json::to_string_pretty(&entries)
            .map_err(|e| IntakeError::InvalidJson(e.to_string()))?;
        println!("{}", output);
    } else {
        println!("{}", format_catalogue(&entries));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_covers_every_step() {
        let entries = catalogue();
        assert_eq!(entries.len(), StepId::ALL.len());
        assert_eq!(entries[0].id, StepId::INITIAL);
    }

    #[test]
    fn test_catalogue_kinds() {
        let entries = catalogue();
        let find = |id: StepId| entries.iter().find(|e| e.id == id).unwrap();

        assert_eq!(find(StepId::Main).kind, "single");
        assert_eq!(find(StepId::Main).key, Some("main-service"));
        assert_eq!(find(StepId::Instruments).key, Some("instrument-"));
        assert_eq!(find(StepId::Contact).kind, "contact");
        assert!(find(StepId::Success).successors.is_empty());
    }

    #[test]
    fn test_format_catalogue_lines() {
        let text = format_catalogue(&catalogue());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), StepId::ALL.len());
        assert!(lines[0].starts_with("main "));
        assert!(lines[0].contains("-> live-type, studio-type"));
        assert!(lines.last().unwrap().ends_with("-> -"));
    }

    #[test]
    fn test_catalogue_serializes_kebab_case_ids() {
        let json = serde_json::to_value(catalogue()).unwrap();
        assert_eq!(json[0]["id"], "main");
        assert_eq!(json[0]["successors"][0], "live-type");
        assert!(json[25].get("key").is_none());
    }
}
