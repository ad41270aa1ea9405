use quill_forms::SpecError;
use quill_host::HostError;

#[derive(Debug, thiserror::Error)]
pub enum FormRuntimeError {
    #[error("validation error: {0}")]
    Validation(#[from] SpecError),

    #[error("a form named '{name}' already exists; remove it before materializing again")]
    DuplicateForm { name: String },

    #[error("failed to create control '{control}': {source}")]
    ControlCreation { control: String, source: HostError },

    #[error("no materialized form named '{name}'")]
    UnknownForm { name: String },

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

pub type FormRuntimeResult<T> = Result<T, FormRuntimeError>;
