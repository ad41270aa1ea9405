use crate::value::ControlValue;
use quill_forms::{ControlDescriptor, ControlKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(Uuid);

impl ControlId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

/// One control as reported by enumeration. `kind` is `None` for
/// host-native controls outside the supported set; those are read
/// through the generic property probe instead of a per-kind rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRef {
    pub id: ControlId,
    pub name: String,
    pub kind: Option<ControlKind>,
}

/// How a modal display ended. Translating this into a cancelled flag is
/// the runtime's job; the host only reports what closed the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseSignal {
    /// The named control closed the dialog.
    Control(String),
    /// The dialog was closed through the window chrome.
    Dismissed,
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("unknown form handle")]
    UnknownForm,

    #[error("unknown control handle")]
    UnknownControl,

    #[error("control '{control}': host cannot instantiate kind {kind}")]
    UnsupportedKind { control: String, kind: String },

    #[error("control '{control}': property {property} unavailable")]
    PropertyUnavailable { control: String, property: String },

    #[error("display failure: {0}")]
    Display(String),
}

/// The entire contract between the form runtime and the application that
/// actually renders dialogs. Every dynamic host call goes through this
/// trait, so the runtime can be exercised against an in-memory host with
/// no native dependency.
pub trait HostSurface {
    /// Names of all forms the host currently holds.
    fn list_forms(&self) -> Vec<String>;

    fn create_form(
        &mut self,
        name: &str,
        caption: &str,
        width: f64,
        height: f64,
    ) -> Result<FormId, HostError>;

    fn add_control(
        &mut self,
        form: FormId,
        descriptor: &ControlDescriptor,
    ) -> Result<ControlId, HostError>;

    /// Displays the form and blocks the calling thread until the user
    /// closes it.
    fn show_modal(&mut self, form: FormId) -> Result<CloseSignal, HostError>;

    /// All controls currently attached to the form, in no guaranteed
    /// order.
    fn enumerate_controls(&self, form: FormId) -> Result<Vec<ControlRef>, HostError>;

    /// Reads the single collected value of a control using the per-kind
    /// rule: text for text-holding kinds, boolean for toggle kinds,
    /// selected item (or Null when nothing is selected) for lists.
    fn read_value(&self, control: ControlId, kind: ControlKind) -> Result<ControlValue, HostError>;

    /// Generic property probe for controls outside the supported kind
    /// set. Returns `Ok(None)` when the property does not exist or holds
    /// no scalar value.
    fn read_property(
        &self,
        control: ControlId,
        property: &str,
    ) -> Result<Option<ControlValue>, HostError>;

    /// Destroys the form and its controls, freeing the name for reuse.
    fn remove_form(&mut self, form: FormId) -> Result<(), HostError>;
}
