//! Test doubles shared by the use-case tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use crate::application::WorkflowContext;
use crate::config::Config;
use crate::domain::ports::{
    CommandGateway, CommandOutput, CommandSpec, ConfirmStyle, ConfirmationProvider,
    GatewayError, LedgerStore, TypedAnswer, WorkflowEvent, WorkflowEventSink,
};
use crate::domain::value_objects::ProjectDescriptor;
use crate::infrastructure::{InterruptFlag, JsonLedgerStore, LocalFs};

/// Sink that keeps every event in order.
#[derive(Default)]
pub(crate) struct RecordingSink {
    events: RefCell<Vec<WorkflowEvent>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<WorkflowEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::Warning { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl WorkflowEventSink for RecordingSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }
}

enum Reaction {
    Respond(String),
    Fail,
    Missing,
    Timeout,
    Interrupt,
    /// Write `content` to the path found at `args[index]`
    WriteArg { index: usize, content: String },
}

struct Rule {
    prefix: String,
    reaction: Reaction,
}

/// Gateway that records every invocation and answers from a script.
///
/// Rules match on the `program args...` prefix; the first matching rule wins
/// and unmatched invocations succeed with empty output.
///
/// Like the process gateway, nothing runs once an interrupt is pending.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    rules: Vec<Rule>,
    specs: RefCell<Vec<CommandSpec>>,
    interrupt: InterruptFlag,
    /// Ctrl+C arrives as a matching command finishes
    interrupt_after: Vec<String>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn rule(mut self, prefix: &str, reaction: Reaction) -> Self {
        self.rules.push(Rule {
            prefix: prefix.to_string(),
            reaction,
        });
        self
    }

    pub(crate) fn respond(self, prefix: &str, stdout: &str) -> Self {
        self.rule(prefix, Reaction::Respond(stdout.to_string()))
    }

    pub(crate) fn fail(self, prefix: &str) -> Self {
        self.rule(prefix, Reaction::Fail)
    }

    /// Every invocation of `program` reports the tool as missing.
    pub(crate) fn missing(self, program: &str) -> Self {
        self.rule(program, Reaction::Missing)
    }

    pub(crate) fn time_out(self, prefix: &str) -> Self {
        self.rule(prefix, Reaction::Timeout)
    }

    pub(crate) fn interrupt(self, prefix: &str) -> Self {
        self.rule(prefix, Reaction::Interrupt)
    }

    pub(crate) fn interrupt_after(mut self, prefix: &str) -> Self {
        self.interrupt_after.push(prefix.to_string());
        self
    }

    pub(crate) fn writes_arg(self, prefix: &str, index: usize, content: &str) -> Self {
        self.rule(
            prefix,
            Reaction::WriteArg {
                index,
                content: content.to_string(),
            },
        )
    }

    pub(crate) fn specs(&self) -> Vec<CommandSpec> {
        self.specs.borrow().clone()
    }

    /// Display form of every invocation, in order
    pub(crate) fn commands(&self) -> Vec<String> {
        self.specs.borrow().iter().map(CommandSpec::display).collect()
    }

    pub(crate) fn ran(&self, prefix: &str) -> bool {
        self.commands().iter().any(|c| c.starts_with(prefix))
    }

    pub(crate) fn position(&self, prefix: &str) -> Option<usize> {
        self.commands().iter().position(|c| c.starts_with(prefix))
    }

    fn matches(rule: &Rule, spec: &CommandSpec) -> bool {
        match rule.reaction {
            Reaction::Missing => spec.program == rule.prefix,
            _ => spec.display().starts_with(&rule.prefix),
        }
    }
}

impl CommandGateway for ScriptedGateway {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, GatewayError> {
        let program = spec.program.clone();
        if self.interrupt.is_requested() && !spec.cleanup {
            return Err(GatewayError::Interrupted { program });
        }
        self.specs.borrow_mut().push(spec.clone());

        let result = self.react(spec, program);
        let display = spec.display();
        if self.interrupt_after.iter().any(|p| display.starts_with(p)) {
            self.interrupt.request();
        }
        result
    }
}

impl ScriptedGateway {
    fn react(&self, spec: &CommandSpec, program: String) -> Result<CommandOutput, GatewayError> {
        let Some(rule) = self.rules.iter().find(|r| Self::matches(r, spec)) else {
            return Ok(CommandOutput::default());
        };
        match &rule.reaction {
            Reaction::Respond(stdout) => Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Reaction::Fail => Err(GatewayError::Failed {
                program,
                code: Some(1),
                output: "scripted failure".to_string(),
            }),
            Reaction::Missing => Err(GatewayError::ToolNotFound { program }),
            Reaction::Timeout => Err(GatewayError::Timeout {
                program,
                after: Duration::from_secs(1),
            }),
            Reaction::Interrupt => Err(GatewayError::Interrupted { program }),
            Reaction::WriteArg { index, content } => {
                if let Some(path) = spec.args.get(*index) {
                    std::fs::write(path, content).map_err(|source| GatewayError::Io {
                        program: program.clone(),
                        source,
                    })?;
                }
                Ok(CommandOutput::default())
            }
        }
    }
}

/// Confirmer answering from queues; an exhausted queue declines or aborts.
#[derive(Default)]
pub(crate) struct ScriptedConfirmer {
    confirms: RefCell<VecDeque<bool>>,
    typed: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn answer(self, yes: bool) -> Self {
        self.confirms.borrow_mut().push_back(yes);
        self
    }

    pub(crate) fn typed(self, line: &str) -> Self {
        self.typed.borrow_mut().push_back(line.to_string());
        self
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmationProvider for ScriptedConfirmer {
    fn confirm(&self, prompt: &str, _style: ConfirmStyle) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    fn type_to_confirm(&self, prompt: &str, expected: &str) -> TypedAnswer {
        self.prompts.borrow_mut().push(prompt.to_string());
        let line = self.typed.borrow_mut().pop_front();
        TypedAnswer::classify(line.as_deref(), expected)
    }
}

/// A project directory named `my-app` inside a temp dir, wired to a real
/// JSON ledger and local file system with scripted collaborators.
pub(crate) struct TestProject {
    _tmp: TempDir,
    pub(crate) config: Config,
    pub(crate) project: ProjectDescriptor,
    pub(crate) ledger: JsonLedgerStore,
    pub(crate) fs: LocalFs,
    pub(crate) gateway: ScriptedGateway,
    pub(crate) confirm: ScriptedConfirmer,
    pub(crate) events: RecordingSink,
    pub(crate) interrupt: InterruptFlag,
}

impl TestProject {
    pub(crate) fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-app");
        std::fs::create_dir_all(&root).unwrap();
        let config = Config::default();
        let project = config.descriptor(&root);
        let ledger = JsonLedgerStore::new(project.ledger_file());
        let interrupt = InterruptFlag::new();
        Self {
            _tmp: tmp,
            config,
            project,
            ledger,
            fs: LocalFs::new(),
            gateway: ScriptedGateway {
                interrupt: interrupt.clone(),
                ..ScriptedGateway::default()
            },
            confirm: ScriptedConfirmer::new(),
            events: RecordingSink::default(),
            interrupt,
        }
    }

    pub(crate) fn with_gateway(mut self, mut gateway: ScriptedGateway) -> Self {
        gateway.interrupt = self.interrupt.clone();
        self.gateway = gateway;
        self
    }

    pub(crate) fn with_confirmer(mut self, confirm: ScriptedConfirmer) -> Self {
        self.confirm = confirm;
        self
    }

    pub(crate) fn with_config(mut self, config: Config) -> Self {
        self.project = config.descriptor(self.project.root());
        self.ledger = JsonLedgerStore::new(self.project.ledger_file());
        self.config = config;
        self
    }

    pub(crate) fn root(&self) -> &Path {
        self.project.root()
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Names of the logged operations, oldest first
    pub(crate) fn operations(&self) -> Vec<String> {
        self.ledger
            .read_all()
            .unwrap()
            .operations()
            .iter()
            .map(|r| r.operation().to_string())
            .collect()
    }

    pub(crate) fn ctx(&self) -> WorkflowContext<'_> {
        WorkflowContext {
            config: &self.config,
            project: &self.project,
            ledger: &self.ledger,
            gateway: &self.gateway,
            fs: &self.fs,
            confirm: &self.confirm,
            events: &self.events,
            interrupt: &self.interrupt,
        }
    }
}
