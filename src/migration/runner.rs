use crate::builder::StatementBuilder;
use crate::catalog::TargetKind;
use crate::db::Executor;
use crate::migration::{MigrationPlan, MigrationStep};
use crate::progress::StepReporter;
use crate::render::Safety;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of one executed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub description: String,
    pub sql: String,
    pub safety: Safety,
    pub elapsed: Duration,
    pub rows_affected: u64,
}

/// Renders plan steps and hands them to an [`Executor`] one at a time
pub struct MigrationRunner<E: Executor> {
    builder: StatementBuilder,
    executor: E,
    reporter: StepReporter,
    default_kind: TargetKind,
}

impl<E: Executor> MigrationRunner<E> {
    pub fn new(builder: StatementBuilder, executor: E, default_kind: TargetKind) -> Self {
        Self {
            builder: builder.default_kind(default_kind),
            executor,
            reporter: StepReporter::default(),
            default_kind,
        }
    }

    pub fn with_reporter(mut self, reporter: StepReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Render and execute a single step.
    ///
    /// Rendering failures are returned before anything is printed or sent to
    /// the executor.
    pub async fn run_step(&self, step: &MigrationStep) -> Result<StepReport> {
        let description = step.describe(self.default_kind);
        let rendered = self
            .builder
            .build(step)
            .with_context(|| format!("Cannot {}", description))?;

        self.reporter.start_step(&description);
        debug!("Executing: {}", rendered.sql);
        let start = Instant::now();

        match self.executor.execute(&rendered.sql).await {
            Ok(outcome) => {
                let elapsed = start.elapsed();
                self.reporter.complete_step(elapsed);
                Ok(StepReport {
                    description,
                    sql: rendered.sql,
                    safety: rendered.safety,
                    elapsed,
                    rows_affected: outcome.rows_affected,
                })
            }
            Err(e) => {
                self.reporter.fail_step(&e);
                Err(e.context(format!("Failed to {}", description)))
            }
        }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// The whole plan is rendered up front, so a step that fails validation
    /// prevents any statement from running.
    pub async fn run_plan(&self, plan: &MigrationPlan) -> Result<Vec<StepReport>> {
        info!("Running migration plan with {} steps", plan.steps.len());
        for (index, step) in plan.steps.iter().enumerate() {
            self.builder.build(step).with_context(|| {
                format!(
                    "Step {} of {} is invalid ({})",
                    index + 1,
                    plan.steps.len(),
                    step.describe(self.default_kind)
                )
            })?;
        }

        let start = Instant::now();
        let mut reports = Vec::with_capacity(plan.steps.len());

        for (index, step) in plan.steps.iter().enumerate() {
            let report = self
                .run_step(step)
                .await
                .with_context(|| format!("Step {} of {} failed", index + 1, plan.steps.len()))?;
            reports.push(report);
        }

        self.reporter.plan_summary(reports.len(), start.elapsed());
        Ok(reports)
    }
}
