use crate::{AnalysisResult, FileHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the image on a quiz step.
    QuizClicked,
    /// A drag entered (or moved over) the drop target.
    DragEntered,
    /// A drag left the drop target.
    DragLeft,
    /// File picker change or drop event, carrying both candidate lists.
    FilesDropped {
        picker: Vec<FileHandle>,
        dropped: Vec<FileHandle>,
    },
    /// Engine finished encoding the accepted file.
    FileEncoded { payload: String },
    /// Engine could not read the accepted file.
    FileReadFailed { message: String },
    /// Engine returned a result for the encoded payload.
    AnalysisCompleted(AnalysisResult),
    /// Engine reported a failed analysis request.
    AnalysisFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
