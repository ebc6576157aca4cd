//! PASI widget engine: file encoding, analysis invocation and effect execution.
mod analysis;
mod encode;
mod engine;
mod types;

pub use analysis::{
    build_invoker, synthetic_result, AnalysisInvoker, AnalysisMode, AnalysisSettings,
    RemoteAnalysisInvoker, SimulatedAnalysisInvoker, DEFAULT_ENDPOINT, SIMULATED_DELAY_MS,
};
pub use encode::{encode_data_uri, mime_for_name, FileEncoder, FsFileEncoder};
pub use engine::EngineHandle;
pub use types::{AnalysisFailure, EngineEvent, FailureKind, ReadFailure};
