use crate::{FlowState, Step, WidgetConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDescriptor {
    Quiz(QuizView),
    Uploader(UploaderView),
    Results(ResultsView),
}

/// A quiz question: a background image that advances the flow when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub step: Step,
    pub background_url: String,
    pub width: String,
    pub height: String,
}

/// Drop target with a preview that stays hidden until a payload exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderView {
    pub caption: String,
    pub drag_over: bool,
    pub preview: Option<String>,
    pub busy: bool,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub result: String,
    pub preview: Option<String>,
}

impl UploaderView {
    pub fn preview_hidden(&self) -> bool {
        self.preview.is_none()
    }
}

/// Maps the machine state to the view the host should draw. Pure and idempotent.
pub fn describe(state: &FlowState, config: &WidgetConfig) -> ViewDescriptor {
    match state.current_step() {
        step @ (Step::Quiz1 | Step::Quiz2 | Step::Quiz3) => {
            ViewDescriptor::Quiz(quiz_view(step, config))
        }
        Step::Uploader => ViewDescriptor::Uploader(UploaderView {
            caption: config.uploader_caption.clone(),
            drag_over: state.is_drag_over(),
            preview: state.last_encoded_payload().map(ToOwned::to_owned),
            busy: state.is_busy(),
            width: config.width.clone(),
            height: config.height.clone(),
        }),
        Step::Results => ViewDescriptor::Results(ResultsView {
            result: state
                .result()
                .map(|result| result.as_str().to_owned())
                .unwrap_or_default(),
            preview: state.last_encoded_payload().map(ToOwned::to_owned),
        }),
    }
}

fn quiz_view(step: Step, config: &WidgetConfig) -> QuizView {
    QuizView {
        step,
        background_url: config.background_for(step.index()),
        width: config.width.clone(),
        height: config.height.clone(),
    }
}
