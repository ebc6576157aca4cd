use widget_logging::widget_debug;

use crate::file::FileHandle;
use crate::view_model::{describe, ViewDescriptor};
use crate::WidgetConfig;

/// One stage of the guided flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Quiz1,
    Quiz2,
    Quiz3,
    Uploader,
    Results,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Quiz1,
        Step::Quiz2,
        Step::Quiz3,
        Step::Uploader,
        Step::Results,
    ];

    /// Maps a raw step index to a step. Out-of-range values fall back to `Quiz1`.
    pub fn from_index(index: usize) -> Step {
        Self::ALL.get(index).copied().unwrap_or(Step::Quiz1)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_quiz(self) -> bool {
        matches!(self, Step::Quiz1 | Step::Quiz2 | Step::Quiz3)
    }

    fn next_quiz(self) -> Option<Step> {
        match self {
            Step::Quiz1 => Some(Step::Quiz2),
            Step::Quiz2 => Some(Step::Quiz3),
            Step::Quiz3 => Some(Step::Uploader),
            Step::Uploader | Step::Results => None,
        }
    }
}

/// Progress of the accepted file inside the uploader step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Encoding,
    Analyzing,
}

/// Result text returned by the scoring service (or the simulation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult(String);

impl AnalysisResult {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Complete mutable state of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowState {
    current_step: Step,
    is_drag_over: bool,
    selected_file: Option<FileHandle>,
    last_encoded_payload: Option<String>,
    phase: UploadPhase,
    result: Option<AnalysisResult>,
    dirty: bool,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn is_drag_over(&self) -> bool {
        self.is_drag_over
    }

    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.selected_file.as_ref()
    }

    pub fn last_encoded_payload(&self) -> Option<&str> {
        self.last_encoded_payload.as_deref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// True while a file is being encoded or analyzed.
    pub fn is_busy(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    pub fn view(&self, config: &WidgetConfig) -> ViewDescriptor {
        describe(self, config)
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Quiz1 -> Quiz2 -> Quiz3 -> Uploader. No-op on any other step.
    pub fn advance_quiz(&mut self) -> bool {
        match self.current_step.next_quiz() {
            Some(next) => {
                widget_debug!("advance_quiz {:?} -> {:?}", self.current_step, next);
                self.current_step = next;
                self.mark_dirty();
                true
            }
            None => {
                widget_debug!("advance_quiz ignored in {:?}", self.current_step);
                false
            }
        }
    }

    /// Sets the hover flag. Only meaningful in the uploader step.
    pub fn set_drag_over(&mut self, active: bool) -> bool {
        if self.current_step != Step::Uploader {
            widget_debug!("set_drag_over({}) ignored in {:?}", active, self.current_step);
            return false;
        }
        if self.is_drag_over != active {
            self.is_drag_over = active;
            self.mark_dirty();
        }
        true
    }

    /// Stores `file` as the selection and starts encoding it.
    ///
    /// Ignored outside the uploader step, while a previous file is still in
    /// flight, or when the file fails [`FileHandle::is_acceptable`].
    pub fn accept_file(&mut self, file: FileHandle) -> bool {
        if self.current_step != Step::Uploader {
            widget_debug!("accept_file ignored in {:?}", self.current_step);
            return false;
        }
        if self.is_busy() {
            widget_debug!("accept_file ignored while {:?}", self.phase);
            return false;
        }
        if !file.is_acceptable() {
            widget_debug!(
                "accept_file skipped unacceptable file name_len={} bytes={}",
                file.name.len(),
                file.byte_size
            );
            return false;
        }
        self.selected_file = Some(file);
        self.last_encoded_payload = None;
        self.is_drag_over = false;
        self.phase = UploadPhase::Encoding;
        self.mark_dirty();
        true
    }

    /// Stores the encoded preview payload for the accepted file.
    pub fn record_encoded(&mut self, payload: String) -> bool {
        if self.current_step != Step::Uploader || self.phase != UploadPhase::Encoding {
            widget_debug!(
                "record_encoded ignored in {:?}/{:?}",
                self.current_step,
                self.phase
            );
            return false;
        }
        self.last_encoded_payload = Some(payload);
        self.phase = UploadPhase::Analyzing;
        self.mark_dirty();
        true
    }

    /// Moves to the results step. Requires an accepted and encoded file.
    pub fn complete_analysis(&mut self, result: AnalysisResult) -> bool {
        if self.current_step != Step::Uploader
            || self.phase != UploadPhase::Analyzing
            || self.selected_file.is_none()
            || self.last_encoded_payload.is_none()
        {
            widget_debug!(
                "complete_analysis ignored in {:?}/{:?}",
                self.current_step,
                self.phase
            );
            return false;
        }
        self.result = Some(result);
        self.current_step = Step::Results;
        self.phase = UploadPhase::Idle;
        self.is_drag_over = false;
        self.mark_dirty();
        true
    }

    /// Ends the in-flight work without leaving the uploader step.
    ///
    /// A failed read drops the preview; a failed analysis keeps it on screen.
    pub(crate) fn abandon_in_flight(&mut self, phase: UploadPhase) -> bool {
        if self.current_step != Step::Uploader || self.phase != phase {
            return false;
        }
        if phase == UploadPhase::Encoding {
            self.last_encoded_payload = None;
        }
        self.phase = UploadPhase::Idle;
        self.mark_dirty();
        true
    }
}
