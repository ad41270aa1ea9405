//! Materialization and modal data collection on top of a host surface.
//!
//! A `FormSession` owns the host plus a registry of forms it has
//! materialized, keyed by form name. Materialization turns a validated
//! `FormSpec` into a live dialog; `show_form_modal` blocks until the user
//! closes the dialog, then walks its controls and collects one scalar
//! value per data-bearing control.

use crate::error::{FormRuntimeError, FormRuntimeResult};
use quill_forms::{
    CANCEL_BUTTON_NAME, CONFIRM_BUTTON_NAME, ControlDescriptor, ControlKind, FormSpec,
};
use quill_host::{CloseSignal, ControlId, ControlValue, FormId, HostSurface};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties probed, in order, on controls outside the supported kind
/// set. The first one present wins; a control with none of them is
/// omitted from the collected data. This is a deliberate best-effort
/// chain, not an oversight.
const FALLBACK_PROPERTIES: [&str; 3] = ["Value", "Text", "Caption"];

/// Result of one modal display cycle. Key order is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedFormData {
    pub data: HashMap<String, ControlValue>,
    pub cancelled: bool,
}

/// Registry entry for a live form: the host handle plus the control
/// names closure semantics were bound to at materialize time.
#[derive(Debug, Clone)]
struct MaterializedForm {
    id: FormId,
    confirm: Option<String>,
    cancel: Option<String>,
}

pub struct FormSession<H: HostSurface> {
    host: H,
    forms: HashMap<String, MaterializedForm>,
}

impl<H: HostSurface> FormSession<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            forms: HashMap::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Names of all forms this session has materialized.
    pub fn form_names(&self) -> Vec<String> {
        self.forms.keys().cloned().collect()
    }

    /// Builds a specification from the raw arguments and materializes it.
    /// Does not show the form.
    pub fn create_form_with_controls(
        &mut self,
        name: impl Into<String>,
        caption: impl Into<String>,
        width: f64,
        height: f64,
        controls: Vec<ControlDescriptor>,
        include_standard_buttons: bool,
    ) -> FormRuntimeResult<()> {
        let spec = FormSpec::build(name, caption, width, height, controls, include_standard_buttons)?;
        self.materialize(spec)
    }

    /// Creates the form container and every control in specification
    /// order (creation order fixes default tab order).
    ///
    /// Materializing an already-used name is an error; nothing is
    /// overwritten. A control the host refuses leaves the container and
    /// its already-created siblings in place: authoring is best-effort,
    /// with no rollback. The partially built form stays registered, so
    /// `remove_form` can reclaim the name.
    pub fn materialize(&mut self, spec: FormSpec) -> FormRuntimeResult<()> {
        if self.forms.contains_key(&spec.name) || self.host.list_forms().contains(&spec.name) {
            return Err(FormRuntimeError::DuplicateForm { name: spec.name });
        }

        let id = self
            .host
            .create_form(&spec.name, &spec.caption, spec.width, spec.height)?;

        let mut confirm = None;
        let mut cancel = None;
        for control in &spec.controls {
            if let Err(source) = self.host.add_control(id, control) {
                // The container and earlier controls survive the failure;
                // register the form so remove_form can reclaim the name.
                self.forms
                    .insert(spec.name.clone(), MaterializedForm { id, confirm, cancel });
                return Err(FormRuntimeError::ControlCreation {
                    control: control.name.clone(),
                    source,
                });
            }
            if control.kind == ControlKind::Button {
                if control.name == CONFIRM_BUTTON_NAME {
                    confirm = Some(control.name.clone());
                } else if control.name == CANCEL_BUTTON_NAME {
                    cancel = Some(control.name.clone());
                }
            }
        }

        self.forms
            .insert(spec.name, MaterializedForm { id, confirm, cancel });
        Ok(())
    }

    /// Displays the form modally, blocking until the user closes it, then
    /// extracts one value per data-bearing control.
    ///
    /// `cancelled` is false only when the close signal names the bound
    /// confirm control; the cancel button, any other control, and a
    /// window-chrome dismissal all count as cancellation.
    ///
    /// A control whose extraction fails host-side is logged and skipped;
    /// partial data beats discarding what the user already entered.
    pub fn show_form_modal(&mut self, name: &str) -> FormRuntimeResult<CollectedFormData> {
        let entry = self
            .forms
            .get(name)
            .ok_or_else(|| FormRuntimeError::UnknownForm { name: name.to_string() })?;
        let form_id = entry.id;
        let confirm = entry.confirm.clone();
        let cancel = entry.cancel.clone();

        let signal = self.host.show_modal(form_id)?;
        let cancelled = match &signal {
            CloseSignal::Control(closer) if confirm.as_deref() == Some(closer.as_str()) => false,
            CloseSignal::Control(closer) => {
                if cancel.as_deref() != Some(closer.as_str()) {
                    // Ambiguous closure: an unrecognized closer cancels.
                    log::debug!("form '{name}' closed by unrecognized control '{closer}'");
                }
                true
            }
            CloseSignal::Dismissed => true,
        };

        let mut data = HashMap::new();
        for control in self.host.enumerate_controls(form_id)? {
            let value = match control.kind {
                Some(kind) if !kind.carries_user_data() => continue,
                Some(kind) => match self.host.read_value(control.id, kind) {
                    // A list with no selection reports as an empty string.
                    Ok(ControlValue::Null) if kind == ControlKind::ListBox => {
                        ControlValue::Text(String::new())
                    }
                    Ok(value) => value,
                    Err(err) => {
                        log::warn!("skipping control '{}': {err}", control.name);
                        continue;
                    }
                },
                None => match self.probe_fallback(control.id, &control.name) {
                    Some(value) => value,
                    None => continue,
                },
            };
            data.insert(control.name, value);
        }

        Ok(CollectedFormData { data, cancelled })
    }

    /// Destroys a materialized form, freeing the name for reuse.
    pub fn remove_form(&mut self, name: &str) -> FormRuntimeResult<()> {
        let entry = self
            .forms
            .remove(name)
            .ok_or_else(|| FormRuntimeError::UnknownForm { name: name.to_string() })?;
        self.host.remove_form(entry.id)?;
        Ok(())
    }

    /// Ordered Value/Text/Caption probe for host-native controls.
    fn probe_fallback(&self, control: ControlId, name: &str) -> Option<ControlValue> {
        for property in FALLBACK_PROPERTIES {
            match self.host.read_property(control, property) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("skipping control '{name}': {err}");
                    return None;
                }
            }
        }
        None
    }
}
