use minic_config::DeclarationMode;
use minic_core::{AnalysisResult, Stage};
use thiserror::Error;

/// Which stage, if any, may run next for the loaded source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No source has been loaded yet.
    #[default]
    Idle,
    LexReady,
    SyntaxReady,
    SemanticReady,
    /// The syntax stage failed; nothing runs until new source is loaded.
    Blocked,
    Done,
}

impl PipelineState {
    pub fn runnable(self) -> Option<Stage> {
        match self {
            PipelineState::LexReady => Some(Stage::Lexical),
            PipelineState::SyntaxReady => Some(Stage::Syntax),
            PipelineState::SemanticReady => Some(Stage::Semantic),
            PipelineState::Idle | PipelineState::Blocked | PipelineState::Done => None,
        }
    }

    fn after_run(self, passed: bool) -> PipelineState {
        match (self, passed) {
            (PipelineState::LexReady, true) => PipelineState::SyntaxReady,
            (PipelineState::LexReady, false) => PipelineState::LexReady,
            (PipelineState::SyntaxReady, true) => PipelineState::SemanticReady,
            (PipelineState::SyntaxReady, false) => PipelineState::Blocked,
            (PipelineState::SemanticReady, _) => PipelineState::Done,
            (state, _) => state,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("no source loaded")]
    NoSource,
    #[error("{requested} analysis is not available (state: {state:?})")]
    StageUnavailable {
        requested: Stage,
        state: PipelineState,
    },
    #[error("no stage is left to run (state: {state:?})")]
    Finished { state: PipelineState },
}

/// Result of running one stage. Only the lexical stage carries a payload, the lexemes in scan
/// order; the other stages pass with an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct StageReport {
    pub stage: Stage,
    pub result: AnalysisResult<Vec<String>>,
}

/// One source buffer moving through the gated stages.
///
/// Every session owns its state; analysing several buffers means using several sessions.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<String>,
    state: PipelineState,
    mode: DeclarationMode,
    reports: Vec<StageReport>,
}

impl Session {
    pub fn new(mode: DeclarationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replaces the source, forgets previous reports and re-opens the lexical stage.
    pub fn load(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
        self.reports.clear();
        self.state = PipelineState::LexReady;
        tracing::debug!("source loaded");
    }

    pub fn clear(&mut self) {
        self.load(String::new());
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn runnable(&self) -> Option<Stage> {
        self.state.runnable()
    }

    /// Reports produced since the source was loaded, in run order.
    pub fn reports(&self) -> &[StageReport] {
        &self.reports
    }

    pub fn run(&mut self, stage: Stage) -> Result<&StageReport, PipelineError> {
        let Some(source) = self.source.as_deref() else { return Err(PipelineError::NoSource) };

        if self.state.runnable() != Some(stage) {
            return Err(PipelineError::StageUnavailable {
                requested: stage,
                state: self.state,
            });
        }

        let result = match stage {
            Stage::Lexical => minic_token::tokenize(source)
                .map(|tokens| tokens.iter().map(ToString::to_string).collect()),
            Stage::Syntax => minic_syntax::check_balance(source).map(|()| Vec::new()),
            Stage::Semantic => {
                minic_semantic::check_semantics_with(source, self.mode).map(|()| Vec::new())
            }
        };

        let passed = result.is_pass();
        self.state = self.state.after_run(passed);
        tracing::info!(%stage, passed, state = ?self.state, "stage finished");

        self.reports.push(StageReport { stage, result });
        Ok(&self.reports[self.reports.len() - 1])
    }

    /// Runs whatever stage the gate allows next.
    pub fn run_next(&mut self) -> Result<&StageReport, PipelineError> {
        match self.runnable() {
            Some(stage) => self.run(stage),
            None if self.source.is_none() => Err(PipelineError::NoSource),
            None => Err(PipelineError::Finished { state: self.state }),
        }
    }

    /// Runs stages in order up to and including `last`, stopping after the first failure.
    pub fn run_through(&mut self, last: Stage) -> Result<&[StageReport], PipelineError> {
        while let Some(stage) = self.runnable() {
            if stage > last {
                break;
            }

            if !self.run(stage)?.result.is_pass() {
                break;
            }
        }

        Ok(self.reports())
    }
}
