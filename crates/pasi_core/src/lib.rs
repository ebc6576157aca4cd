//! PASI widget core: pure flow state machine and render descriptors.
mod config;
mod effect;
mod file;
mod msg;
mod state;
mod update;
mod view_model;

pub use config::{WidgetConfig, DEFAULT_UPLOADER_CAPTION};
pub use effect::{Effect, ANALYSIS_FAILED_NOTICE};
pub use file::{resolve_selection, FileHandle};
pub use msg::Msg;
pub use state::{AnalysisResult, FlowState, Step, UploadPhase};
pub use update::update;
pub use view_model::{describe, QuizView, ResultsView, UploaderView, ViewDescriptor};
