//! Runs the report steps in order against a [`BookStore`].

use anyhow::Result;
use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use serde::Serialize;
use uuid::Uuid;

use crate::config::FailurePolicy;
use crate::report::steps::{Operation, Step};
use crate::store::BookStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepOutput {
    Documents(Vec<Document>),
    IndexCreated(String),
    Plan(Document),
}

impl StepOutput {
    /// Number of documents returned, for logging.
    pub fn len(&self) -> usize {
        match self {
            StepOutput::Documents(docs) => docs.len(),
            StepOutput::IndexCreated(_) | StepOutput::Plan(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: Step,
    pub number: u8,
    pub label: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Ok(StepOutput),
    Failed(String),
}

impl StepRecord {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, StepOutcome::Ok(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub run_id: Uuid,
    pub database: String,
    pub collection: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
    /// Set when [`FailurePolicy::Abort`] cut the run short.
    pub aborted: Option<String>,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|r| !r.is_ok())
    }
}

pub async fn run_step<S: BookStore + ?Sized>(store: &S, step: Step) -> Result<StepOutput> {
    let output = match step.operation() {
        Operation::Find(query) => StepOutput::Documents(store.find(&query).await?),
        Operation::Aggregate(pipeline) => StepOutput::Documents(store.aggregate(pipeline).await?),
        Operation::CreateIndex(keys) => StepOutput::IndexCreated(store.create_index(keys).await?),
        Operation::Explain(filter) => StepOutput::Plan(store.explain(filter).await?),
    };
    Ok(output)
}

/// Runs every step without releasing the store.
pub async fn run_steps<S: BookStore + ?Sized>(store: &S, policy: FailurePolicy) -> Report {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let database = store.database_name().to_string();
    let collection = store.collection_name().to_string();
    let mut steps = Vec::with_capacity(Step::ALL.len());
    let mut aborted = None;

    tracing::info!(%run_id, %database, %collection, ?policy, "starting report");

    for step in Step::ALL {
        tracing::debug!(%run_id, ?step, "running step");
        let outcome = match run_step(store, step).await {
            Ok(output) => {
                tracing::info!(%run_id, ?step, results = output.len(), "step complete");
                StepOutcome::Ok(output)
            }
            Err(err) => {
                let message = format!("{err:#}");
                tracing::error!(%run_id, ?step, error = %message, "step failed");
                StepOutcome::Failed(message)
            }
        };

        let abort = match &outcome {
            StepOutcome::Failed(message) if policy == FailurePolicy::Abort => Some(message.clone()),
            _ => None,
        };
        steps.push(StepRecord {
            step,
            number: step.number(),
            label: step.label(),
            outcome,
        });
        if abort.is_some() {
            aborted = abort;
            break;
        }
    }

    Report {
        run_id,
        database,
        collection,
        started_at,
        finished_at: Utc::now(),
        steps,
        aborted,
    }
}

/// Runs the report and releases the store afterwards, whatever the outcome.
pub async fn run<S: BookStore>(store: S, policy: FailurePolicy) -> Report {
    let report = run_steps(&store, policy).await;
    store.close().await;
    tracing::info!(
        run_id = %report.run_id,
        steps = report.steps.len(),
        failures = report.failures().count(),
        "connection closed"
    );
    report
}
