use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Setup and control failures. None of these are retried: a visualization
/// that hits one during setup logs it and stays blank.
#[derive(Debug, Error)]
pub enum Error {
    #[error("WebGL2 is not supported")]
    ContextUnavailable,

    #[error("error compiling {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("error linking program: {0}")]
    ProgramLink(String),

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("unknown demo {0:?}")]
    UnknownDemo(String),

    #[error("demo {demo} has no parameter {name:?}")]
    UnknownParam { demo: &'static str, name: String },

    #[error("invalid value {value:?} for parameter {name:?}")]
    InvalidParam { name: String, value: String },

    #[error("{0}")]
    Js(String),
}
