//! Ordered step executor
//!
//! A pipeline is a list of [`Step`] descriptors run one after another.
//! Each step is gated first by its skip predicate, then by its enabled
//! predicate; the first failing action aborts everything after it.

use crate::config::Options;
use crate::error::{ScaffoldError, StepError, StepResult};
use crate::runner::Context;

type Action<'a> = Box<dyn Fn(&Options, &Context) -> StepResult + 'a>;
type EnabledFn<'a> = Box<dyn Fn(&Options) -> bool + 'a>;
type SkipFn<'a> = Box<dyn Fn(&Options) -> Option<String> + 'a>;

/// Decision taken for a step before its action runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Run,
    Skip(String),
    Disabled,
}

/// Where a step is in its lifecycle
#[derive(Debug)]
pub enum StepStatus {
    Pending,
    Running,
    Succeeded,
    Failed(StepError),
    Skipped(String),
    Disabled,
}

impl StepStatus {
    /// Stable lowercase name of the status
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed(_) => "failed",
            StepStatus::Skipped(_) => "skipped",
            StepStatus::Disabled => "disabled",
        }
    }

    /// Skip reason or failure message, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            StepStatus::Failed(err) => Some(err.to_string()),
            StepStatus::Skipped(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}

/// A named unit of work with optional gating predicates
pub struct Step<'a> {
    name: String,
    action: Action<'a>,
    enabled: EnabledFn<'a>,
    skip: SkipFn<'a>,
}

impl<'a> Step<'a> {
    /// Create an always-enabled, never-skipped step
    pub fn new<F>(name: &str, action: F) -> Self
    where
        F: Fn(&Options, &Context) -> StepResult + 'a,
    {
        Step {
            name: name.to_string(),
            action: Box::new(action),
            enabled: Box::new(|_| true),
            skip: Box::new(|_| None),
        }
    }

    /// Only run the step when the predicate holds; otherwise it is disabled
    pub fn enabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Options) -> bool + 'a,
    {
        self.enabled = Box::new(predicate);
        self
    }

    /// Skip the step with the returned reason
    pub fn skip_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Options) -> Option<String> + 'a,
    {
        self.skip = Box::new(predicate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate skip, then enabled
    pub fn gate(&self, options: &Options) -> Gate {
        if let Some(reason) = (self.skip)(options) {
            return Gate::Skip(reason);
        }
        if !(self.enabled)(options) {
            return Gate::Disabled;
        }
        Gate::Run
    }
}

/// Final status of one step
#[derive(Debug)]
pub struct StepOutcome {
    pub name: String,
    pub status: StepStatus,
}

/// Per-step outcomes of a finished run, in pipeline order
#[derive(Debug)]
pub struct PipelineReport {
    pub outcomes: Vec<StepOutcome>,
}

impl PipelineReport {
    /// True unless some step failed
    pub fn is_success(&self) -> bool {
        self.first_failure().is_none()
    }

    /// Name and error of the step that aborted the run
    pub fn first_failure(&self) -> Option<(&str, &StepError)> {
        self.outcomes.iter().find_map(|o| match &o.status {
            StepStatus::Failed(err) => Some((o.name.as_str(), err)),
            _ => None,
        })
    }

    /// Status of the named step
    pub fn status(&self, name: &str) -> Option<&StepStatus> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.status)
    }

    /// Convert into an error carrying the first failure
    pub fn into_result(self) -> Result<(), ScaffoldError> {
        for outcome in self.outcomes {
            if let StepStatus::Failed(source) = outcome.status {
                return Err(ScaffoldError::StepFailed {
                    step: outcome.name,
                    source,
                });
            }
        }
        Ok(())
    }
}

/// Ordered list of steps
#[derive(Default)]
pub struct Pipeline<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Pipeline { steps: Vec::new() }
    }

    /// Append a step
    pub fn step(mut self, step: Step<'a>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Run every step in order, stopping at the first failure
    pub fn run(&self, options: &Options, ctx: &Context) -> PipelineReport {
        for step in &self.steps {
            ctx.report_step(&step.name, &StepStatus::Pending);
        }

        let mut outcomes = Vec::with_capacity(self.steps.len());
        let mut remaining = self.steps.iter();

        for step in remaining.by_ref() {
            let status = match step.gate(options) {
                Gate::Skip(reason) => StepStatus::Skipped(reason),
                Gate::Disabled => StepStatus::Disabled,
                Gate::Run => {
                    ctx.report_step(&step.name, &StepStatus::Running);
                    match (step.action)(options, ctx) {
                        Ok(()) => StepStatus::Succeeded,
                        Err(err) => StepStatus::Failed(err),
                    }
                }
            };

            ctx.report_step(&step.name, &status);
            let failed = matches!(status, StepStatus::Failed(_));
            outcomes.push(StepOutcome {
                name: step.name.clone(),
                status,
            });

            if failed {
                break;
            }
        }

        // Steps after an abort never leave pending
        outcomes.extend(remaining.map(|step| StepOutcome {
            name: step.name.clone(),
            status: StepStatus::Pending,
        }));

        PipelineReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_options;
    use crate::ui::MemoryReporter;
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    fn recording_context() -> (Context, Arc<MemoryReporter>) {
        let reporter = Arc::new(MemoryReporter::new());
        let ctx = Context::new().with_reporter(reporter.clone());
        (ctx, reporter)
    }

    #[test]
    fn test_runs_steps_in_order() {
        let order = RefCell::new(Vec::new());
        let pipeline = Pipeline::new()
            .step(Step::new("one", |_, _| {
                order.borrow_mut().push("one");
                Ok(())
            }))
            .step(Step::new("two", |_, _| {
                order.borrow_mut().push("two");
                Ok(())
            }));

        let (ctx, _) = recording_context();
        let report = pipeline.run(&test_options("/tmp/x"), &ctx);

        assert!(report.is_success());
        assert_eq!(*order.borrow(), vec!["one", "two"]);
        assert_eq!(report.status("two").unwrap().label(), "succeeded");
    }

    #[test]
    fn test_failure_aborts_remaining_steps() {
        let later_ran = Cell::new(false);
        let pipeline = Pipeline::new()
            .step(Step::new("git", |_, _| {
                Err(StepError::GitInit("exit code 128".to_string()))
            }))
            .step(Step::new("install", |_, _| {
                later_ran.set(true);
                Ok(())
            }));

        let (ctx, reporter) = recording_context();
        let report = pipeline.run(&test_options("/tmp/x"), &ctx);

        assert!(!later_ran.get());
        assert!(!report.is_success());
        let (name, err) = report.first_failure().unwrap();
        assert_eq!(name, "git");
        assert!(matches!(err, StepError::GitInit(_)));
        assert_eq!(report.status("install").unwrap().label(), "pending");
        assert_eq!(reporter.step_labels("install"), vec!["pending"]);
        assert_eq!(reporter.step_labels("git"), vec!["pending", "running", "failed"]);
    }

    #[test]
    fn test_skip_wins_over_enabled() {
        let ran = Cell::new(false);
        let step = Step::new("install", |_, _| {
            ran.set(true);
            Ok(())
        })
        .enabled_when(|_| false)
        .skip_when(|_| Some("Pass --install".to_string()));

        assert_eq!(
            step.gate(&test_options("/tmp/x")),
            Gate::Skip("Pass --install".to_string())
        );

        let pipeline = Pipeline::new().step(step);
        let (ctx, reporter) = recording_context();
        let report = pipeline.run(&test_options("/tmp/x"), &ctx);

        assert!(!ran.get());
        assert!(report.is_success());
        assert_eq!(reporter.step_labels("install"), vec!["pending", "skipped"]);
    }

    #[test]
    fn test_disabled_step_does_not_run() {
        let ran = Cell::new(false);
        let pipeline = Pipeline::new().step(
            Step::new("git", |_, _| {
                ran.set(true);
                Ok(())
            })
            .enabled_when(|opts| opts.git_enabled),
        );

        let (ctx, reporter) = recording_context();
        let report = pipeline.run(&test_options("/tmp/x"), &ctx);

        assert!(!ran.get());
        assert!(report.is_success());
        assert!(matches!(report.status("git"), Some(StepStatus::Disabled)));
        assert_eq!(reporter.step_labels("git"), vec!["pending", "disabled"]);
    }

    #[test]
    fn test_into_result_carries_first_failure() {
        let pipeline = Pipeline::new()
            .step(Step::new("copy", |_, _| Ok(())))
            .step(Step::new("broken", |_, _| Err(StepError::Other("boom".to_string()))));

        let (ctx, _) = recording_context();
        let err = pipeline
            .run(&test_options("/tmp/x"), &ctx)
            .into_result()
            .unwrap_err();

        match err {
            ScaffoldError::StepFailed { step, source } => {
                assert_eq!(step, "broken");
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_pipeline_succeeds() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        let (ctx, _) = recording_context();
        assert!(pipeline.run(&test_options("/tmp/x"), &ctx).is_success());
    }
}
