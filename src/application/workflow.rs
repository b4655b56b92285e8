//! Step runner shared by the lifecycle workflows
//!
//! Init and deploy stop at the first failing step. Clean keeps going and
//! reports every failure at the end. The asymmetry is a per-workflow
//! [`FailurePolicy`], not something each step decides.
//!
//! An operator interrupt received while a step runs is acted on once the
//! step returns, so guards inside the step have already unwound.

use crate::domain::ports::{InterruptSignal, WorkflowEvent, WorkflowEventSink};
use crate::error::{ErrorKind, ManagerError, ManagerResult};

/// What happens after a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the remaining steps and return the error
    FailFast,
    /// Record the failure and continue with the next step
    BestEffort,
}

/// Final state of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: &'static str,
    pub outcome: StepOutcome,
}

/// Ordered record of what a workflow did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    pub workflow: &'static str,
    pub steps: Vec<StepRecord>,
}

impl WorkflowReport {
    pub fn completed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Completed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Skipped(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome(&self, step: &str) -> Option<&StepOutcome> {
        self.steps.iter().find(|r| r.step == step).map(|r| &r.outcome)
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.steps.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Runs named steps, emitting events and applying the failure policy.
pub struct StepRunner<'a> {
    policy: FailurePolicy,
    events: &'a dyn WorkflowEventSink,
    interrupt: &'a dyn InterruptSignal,
    report: WorkflowReport,
}

/// Keeps the interrupt hold open for the duration of one step.
struct Hold<'a>(&'a dyn InterruptSignal);

impl<'a> Hold<'a> {
    fn open(signal: &'a dyn InterruptSignal) -> Self {
        signal.hold();
        Self(signal)
    }
}

impl Drop for Hold<'_> {
    fn drop(&mut self) {
        self.0.release();
    }
}

impl<'a> StepRunner<'a> {
    pub fn new(
        workflow: &'static str,
        policy: FailurePolicy,
        planned_steps: usize,
        events: &'a dyn WorkflowEventSink,
        interrupt: &'a dyn InterruptSignal,
    ) -> Self {
        events.on_event(WorkflowEvent::Started {
            workflow,
            steps: planned_steps,
        });
        Self {
            policy,
            events,
            interrupt,
            report: WorkflowReport {
                workflow,
                steps: Vec::new(),
            },
        }
    }

    /// Run one step.
    ///
    /// Returns `Ok(Some(value))` on success. Under `BestEffort` a failure
    /// yields `Ok(None)`; an operator interrupt always propagates, including
    /// one that arrived while a step succeeded.
    pub fn run<T>(
        &mut self,
        step: &'static str,
        label: impl Into<String>,
        f: impl FnOnce() -> ManagerResult<T>,
    ) -> ManagerResult<Option<T>> {
        if self.interrupt.is_requested() {
            return self.interrupted(step);
        }
        self.events.on_event(WorkflowEvent::StepStarted {
            step,
            label: label.into(),
        });

        let result = {
            let _hold = Hold::open(self.interrupt);
            f()
        };
        match result {
            Ok(value) => {
                self.events.on_event(WorkflowEvent::StepCompleted { step });
                self.push(step, StepOutcome::Completed);
                if self.interrupt.is_requested() {
                    return self.interrupted(step);
                }
                Ok(Some(value))
            }
            Err(err) => {
                tracing::warn!(step, error = %err, "step failed");
                self.events.on_event(WorkflowEvent::StepFailed {
                    step,
                    error: err.to_string(),
                });
                self.push(step, StepOutcome::Failed(err.to_string()));
                if self.policy == FailurePolicy::FailFast || err.kind() == ErrorKind::Interrupted {
                    self.finish_events();
                    Err(err)
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn interrupted<T>(&self, step: &'static str) -> ManagerResult<T> {
        tracing::warn!(step, "stopping workflow on interrupt");
        self.finish_events();
        Err(ManagerError::Interrupted)
    }

    /// Record a step that was not attempted.
    pub fn skip(&mut self, step: &'static str, reason: impl Into<String>) {
        let reason = reason.into();
        self.events.on_event(WorkflowEvent::StepSkipped {
            step,
            reason: reason.clone(),
        });
        self.push(step, StepOutcome::Skipped(reason));
    }

    pub fn finish(self) -> WorkflowReport {
        self.finish_events();
        self.report
    }

    fn push(&mut self, step: &'static str, outcome: StepOutcome) {
        self.report.steps.push(StepRecord { step, outcome });
    }

    fn finish_events(&self) {
        self.events.on_event(WorkflowEvent::Finished {
            workflow: self.report.workflow,
            completed: self.report.completed(),
            failed: self.report.failed(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::application::testing::RecordingSink;
    use crate::domain::ports::NeverInterrupted;

    /// Fires once `after` holds have been opened.
    #[derive(Default)]
    struct InterruptAfter {
        after: usize,
        holds: Cell<usize>,
        open: Cell<usize>,
    }

    impl InterruptSignal for InterruptAfter {
        fn is_requested(&self) -> bool {
            self.holds.get() >= self.after
        }

        fn hold(&self) {
            self.holds.set(self.holds.get() + 1);
            self.open.set(self.open.get() + 1);
        }

        fn release(&self) {
            self.open.set(self.open.get() - 1);
        }
    }

    fn boom() -> ManagerResult<()> {
        Err(ManagerError::InvalidArgument("boom".to_string()))
    }

    #[test]
    fn fail_fast_returns_first_error() {
        let sink = RecordingSink::default();
        let mut runner = StepRunner::new(
            "deploy",
            FailurePolicy::FailFast,
            2,
            &sink,
            &NeverInterrupted,
        );

        assert_eq!(runner.run("a", "A", || Ok(1)).unwrap(), Some(1));
        assert!(runner.run("b", "B", boom).is_err());

        assert!(matches!(
            sink.events().last(),
            Some(WorkflowEvent::Finished { completed: 1, failed: 1, .. })
        ));
    }

    #[test]
    fn best_effort_continues_after_failure() {
        let sink = RecordingSink::default();
        let mut runner = StepRunner::new(
            "clean",
            FailurePolicy::BestEffort,
            3,
            &sink,
            &NeverInterrupted,
        );

        assert_eq!(runner.run("a", "A", boom).unwrap(), None);
        runner.skip("b", "not deployed");
        runner.run("c", "C", || Ok(())).unwrap();
        let report = runner.finish();

        assert_eq!(report.completed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_success());
        assert_eq!(
            report.outcome("b"),
            Some(&StepOutcome::Skipped("not deployed".to_string()))
        );
    }

    #[test]
    fn best_effort_still_propagates_interrupt() {
        let sink = RecordingSink::default();
        let mut runner = StepRunner::new(
            "clean",
            FailurePolicy::BestEffort,
            1,
            &sink,
            &NeverInterrupted,
        );

        let err = runner
            .run("a", "A", || -> ManagerResult<()> { Err(ManagerError::Interrupted) })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Interrupted);
    }

    #[test]
    fn interrupt_during_step_stops_after_it_returns() {
        let sink = RecordingSink::default();
        let signal = InterruptAfter {
            after: 1,
            ..InterruptAfter::default()
        };
        let mut runner = StepRunner::new("clean", FailurePolicy::BestEffort, 2, &sink, &signal);
        let ran_second = Cell::new(false);

        let err = runner.run("a", "A", || Ok(())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Interrupted);
        assert_eq!(signal.open.get(), 0);

        let err = runner
            .run("b", "B", || {
                ran_second.set(true);
                Ok(())
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Interrupted);
        assert!(!ran_second.get());
    }

    #[test]
    fn hold_is_released_when_step_fails() {
        let sink = RecordingSink::default();
        let signal = InterruptAfter {
            after: usize::MAX,
            ..InterruptAfter::default()
        };
        let mut runner = StepRunner::new("deploy", FailurePolicy::FailFast, 1, &sink, &signal);

        assert!(runner.run("a", "A", boom).is_err());
        assert_eq!(signal.holds.get(), 1);
        assert_eq!(signal.open.get(), 0);
    }
}
