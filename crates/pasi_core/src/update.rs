use widget_logging::{widget_debug, widget_warn};

use crate::effect::ANALYSIS_FAILED_NOTICE;
use crate::{resolve_selection, Effect, FlowState, Msg, UploadPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FlowState, msg: Msg) -> (FlowState, Vec<Effect>) {
    let effects = match msg {
        Msg::QuizClicked => {
            state.advance_quiz();
            Vec::new()
        }
        Msg::DragEntered => {
            state.set_drag_over(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_over(false);
            Vec::new()
        }
        Msg::FilesDropped { picker, dropped } => {
            // A drop is not a dragover, so the hover flag goes away either way.
            state.set_drag_over(false);
            match resolve_selection(&picker, &dropped) {
                Some(file) => {
                    if state.accept_file(file.clone()) {
                        vec![Effect::EncodeFile { file }]
                    } else {
                        Vec::new()
                    }
                }
                None => {
                    widget_debug!(
                        "no acceptable file among picker={} dropped={}",
                        picker.len(),
                        dropped.len()
                    );
                    Vec::new()
                }
            }
        }
        Msg::FileEncoded { payload } => {
            if state.record_encoded(payload.clone()) {
                vec![Effect::InvokeAnalysis { payload }]
            } else {
                Vec::new()
            }
        }
        Msg::FileReadFailed { message } => {
            if state.abandon_in_flight(UploadPhase::Encoding) {
                widget_warn!("file read failed: {}", message);
            }
            Vec::new()
        }
        Msg::AnalysisCompleted(result) => {
            state.complete_analysis(result);
            Vec::new()
        }
        Msg::AnalysisFailed { message } => {
            if state.abandon_in_flight(UploadPhase::Analyzing) {
                widget_warn!("analysis failed: {}", message);
                vec![Effect::NotifyUser {
                    message: ANALYSIS_FAILED_NOTICE.to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
