//! Console rendering of a finished [`Report`].

use std::io::Write;

use anyhow::{Context, Result};

use crate::report::runner::{Report, StepOutcome, StepOutput, StepRecord};
use crate::utils::json;

fn header(record: &StepRecord) -> String {
    match record.outcome {
        StepOutcome::Ok(StepOutput::IndexCreated(_)) => {
            format!("{}. {}...", record.number, record.label)
        }
        _ => format!("{}. {}:", record.number, record.label),
    }
}

/// Writes one labelled section per step to `out`. A failed step keeps its
/// header on `out` and writes the error to `err`.
pub fn render_text(report: &Report, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for record in &report.steps {
        match &record.outcome {
            StepOutcome::Ok(output) => {
                writeln!(out)?;
                writeln!(out, "{}", header(record))?;
                match output {
                    StepOutput::Documents(docs) => {
                        let text = json::to_pretty_string(&json::documents_to_json(docs))?;
                        writeln!(out, "{text}")?;
                    }
                    StepOutput::Plan(plan) => {
                        let text = json::to_pretty_string(&json::document_to_json(plan))?;
                        writeln!(out, "{text}")?;
                    }
                    StepOutput::IndexCreated(name) => writeln!(out, "Created index {name}")?,
                }
            }
            StepOutcome::Failed(message) => {
                writeln!(out)?;
                writeln!(out, "{}", header(record))?;
                out.flush().context("Failed to flush report output")?;
                writeln!(err, "{}. {}: FAILED: {}", record.number, record.label, message)?;
            }
        }
    }
    out.flush().context("Failed to flush report output")?;
    Ok(())
}

pub fn render_json(report: &Report, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}
