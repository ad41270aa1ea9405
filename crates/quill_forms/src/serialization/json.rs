use crate::control::ControlDescriptor;
use crate::spec::{FormSpec, SpecError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid form document: {0}")]
    Spec(#[from] SpecError),
}

pub type SerializationResult<T> = Result<T, SerializationError>;

/// On-disk shape of a form definition: the raw builder arguments, before
/// validation. Loading a document always runs it through `FormSpec::build`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDocument {
    pub name: String,
    pub caption: String,
    pub width: f64,
    pub height: f64,
    pub controls: Vec<ControlDescriptor>,
    #[serde(default = "default_standard_buttons")]
    pub include_standard_buttons: bool,
}

fn default_standard_buttons() -> bool {
    true
}

impl FormDocument {
    pub fn into_spec(self) -> Result<FormSpec, SpecError> {
        FormSpec::build(
            self.name,
            self.caption,
            self.width,
            self.height,
            self.controls,
            self.include_standard_buttons,
        )
    }
}

pub fn save_spec(spec: &FormSpec, path: impl AsRef<Path>) -> SerializationResult<()> {
    let json = serde_json::to_string_pretty(spec)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_spec(path: impl AsRef<Path>) -> SerializationResult<FormSpec> {
    let json = fs::read_to_string(path)?;
    let spec = serde_json::from_str(&json)?;
    Ok(spec)
}

/// Loads a raw form document and validates it into a spec.
pub fn load_document(path: impl AsRef<Path>) -> SerializationResult<FormSpec> {
    let json = fs::read_to_string(path)?;
    let doc: FormDocument = serde_json::from_str(&json)?;
    Ok(doc.into_spec()?)
}

pub fn spec_to_json(spec: &FormSpec) -> SerializationResult<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

pub fn spec_from_json(json: &str) -> SerializationResult<FormSpec> {
    Ok(serde_json::from_str(json)?)
}
