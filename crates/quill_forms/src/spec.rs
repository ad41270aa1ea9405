use crate::control::{Bounds, ControlDescriptor, ControlKind};
use serde::{Deserialize, Serialize};

/// Forms are never created smaller than this; undersized requests are
/// raised to the floor rather than rejected.
pub const MIN_FORM_WIDTH: f64 = 300.0;
pub const MIN_FORM_HEIGHT: f64 = 200.0;

/// Reserved names for the appended standard buttons. The runtime binds
/// closure semantics (confirm / cancel) to buttons carrying these names.
pub const CONFIRM_BUTTON_NAME: &str = "btnOK";
pub const CANCEL_BUTTON_NAME: &str = "btnCancel";

const STANDARD_BUTTON_WIDTH: f64 = 80.0;
const STANDARD_BUTTON_HEIGHT: f64 = 28.0;
const STANDARD_BUTTON_MARGIN: f64 = 20.0;
const STANDARD_BUTTON_GAP: f64 = 10.0;
const STANDARD_BUTTON_ROW_OFFSET: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("form name must not be empty")]
    EmptyFormName,
    #[error("control name must not be empty")]
    EmptyControlName,
    #[error("duplicate control name: {name}")]
    DuplicateControlName { name: String },
    #[error("control name '{name}' is reserved for the standard buttons")]
    ReservedControlName { name: String },
    #[error("control '{control}' has negative bounds")]
    NegativeBounds { control: String },
}

/// A validated, canonical description of a dialog and its controls.
/// Built once, consumed once by materialization; the durable artifact
/// afterwards is the live form owned by the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub name: String,
    pub caption: String,
    pub width: f64,
    pub height: f64,
    pub controls: Vec<ControlDescriptor>,
}

impl FormSpec {
    /// Validates and normalizes the caller-supplied description.
    ///
    /// Width/height are clamped up to 300x200. Control names must be
    /// unique (case-sensitive) and, when `include_standard_buttons` is
    /// set, must not collide with the reserved button names. The two
    /// standard buttons are appended after validation as a bottom-right
    /// aligned row computed from the clamped dimensions.
    ///
    /// Pure transform: no host call happens here, and nothing is
    /// constructed on failure.
    pub fn build(
        name: impl Into<String>,
        caption: impl Into<String>,
        width: f64,
        height: f64,
        controls: Vec<ControlDescriptor>,
        include_standard_buttons: bool,
    ) -> Result<Self, SpecError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SpecError::EmptyFormName);
        }

        let width = width.max(MIN_FORM_WIDTH);
        let height = height.max(MIN_FORM_HEIGHT);

        for (i, control) in controls.iter().enumerate() {
            if control.name.is_empty() {
                return Err(SpecError::EmptyControlName);
            }
            if !control.bounds.is_non_negative() {
                return Err(SpecError::NegativeBounds {
                    control: control.name.clone(),
                });
            }
            if include_standard_buttons
                && (control.name == CONFIRM_BUTTON_NAME || control.name == CANCEL_BUTTON_NAME)
            {
                return Err(SpecError::ReservedControlName {
                    name: control.name.clone(),
                });
            }
            if controls[..i].iter().any(|c| c.name == control.name) {
                return Err(SpecError::DuplicateControlName {
                    name: control.name.clone(),
                });
            }
        }

        let mut controls = controls;
        if include_standard_buttons {
            controls.extend(standard_buttons(width, height));
        }

        Ok(Self {
            name,
            caption: caption.into(),
            width,
            height,
            controls,
        })
    }
}

/// Default layout for the confirm/cancel row: two fixed-size buttons
/// right-aligned near the bottom edge. The exact margins are a layout
/// policy, not part of the caller contract.
fn standard_buttons(width: f64, height: f64) -> [ControlDescriptor; 2] {
    let top = height - STANDARD_BUTTON_ROW_OFFSET;
    let cancel_left = width - STANDARD_BUTTON_MARGIN - STANDARD_BUTTON_WIDTH;
    let ok_left = cancel_left - STANDARD_BUTTON_GAP - STANDARD_BUTTON_WIDTH;
    [
        ControlDescriptor::new(
            ControlKind::Button,
            CONFIRM_BUTTON_NAME,
            Bounds::new(ok_left, top, STANDARD_BUTTON_WIDTH, STANDARD_BUTTON_HEIGHT),
        )
        .with_caption("OK"),
        ControlDescriptor::new(
            ControlKind::Button,
            CANCEL_BUTTON_NAME,
            Bounds::new(cancel_left, top, STANDARD_BUTTON_WIDTH, STANDARD_BUTTON_HEIGHT),
        )
        .with_caption("Cancel"),
    ]
}
