use crate::FileHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    EncodeFile { file: FileHandle },
    InvokeAnalysis { payload: String },
    NotifyUser { message: String },
}

/// Generic message shown when the scoring service could not be reached.
pub const ANALYSIS_FAILED_NOTICE: &str = "Sorry, the image could not be analyzed.";
