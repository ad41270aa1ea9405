//! In-memory host surface. Forms live as plain structs whose controls
//! are backed by property bags, and modal display is driven by a queued
//! script of user actions instead of a real event loop. Tests and the
//! CLI run the whole pipeline against this host.

use crate::surface::{CloseSignal, ControlId, ControlRef, FormId, HostError, HostSurface};
use crate::value::ControlValue;
use quill_forms::{ControlDescriptor, ControlKind, PropertyBag, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// One simulated user gesture, applied in order while the form is shown.
/// A `Click` or `Dismiss` ends the modal display; a script that runs out
/// without either counts as a window-chrome dismissal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    SetText { control: String, text: String },
    SetChecked { control: String, checked: bool },
    SelectItem { control: String, item: String },
    Click { control: String },
    Dismiss,
}

#[derive(Debug)]
struct LiveControl {
    id: ControlId,
    name: String,
    /// `None` marks a host-native control outside the supported set.
    kind: Option<ControlKind>,
    properties: PropertyBag,
    fail_reads: bool,
}

#[derive(Debug)]
struct LiveForm {
    id: FormId,
    name: String,
    caption: String,
    width: f64,
    height: f64,
    controls: Vec<LiveControl>,
    script: VecDeque<UserAction>,
}

impl LiveForm {
    fn control_by_name(&self, name: &str) -> Option<&LiveControl> {
        self.controls.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn control_by_name_mut(&mut self, name: &str) -> Option<&mut LiveControl> {
        self.controls.iter_mut().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    forms: Vec<LiveForm>,
    rejected_kinds: HashSet<ControlKind>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a kind the host refuses to instantiate, to simulate a host
    /// with a narrower control palette.
    pub fn reject_kind(&mut self, kind: ControlKind) {
        self.rejected_kinds.insert(kind);
    }

    /// Queues the user actions the next modal display will replay.
    pub fn queue_script(
        &mut self,
        form_name: &str,
        actions: Vec<UserAction>,
    ) -> Result<(), HostError> {
        let form = self.form_by_name_mut(form_name)?;
        form.script.extend(actions);
        Ok(())
    }

    /// Attaches a host-native control (no supported kind) with the given
    /// properties, as a real host might for controls created outside the
    /// form runtime.
    pub fn insert_native_control(
        &mut self,
        form_name: &str,
        control_name: &str,
        properties: PropertyBag,
    ) -> Result<ControlId, HostError> {
        let form = self.form_by_name_mut(form_name)?;
        let id = ControlId::new();
        form.controls.push(LiveControl {
            id,
            name: control_name.to_string(),
            kind: None,
            properties,
            fail_reads: false,
        });
        Ok(id)
    }

    /// Makes every read against the named control fail, to simulate a
    /// host-side extraction error.
    pub fn fail_reads(&mut self, form_name: &str, control_name: &str) -> Result<(), HostError> {
        let form = self.form_by_name_mut(form_name)?;
        let control = form
            .control_by_name_mut(control_name)
            .ok_or(HostError::UnknownControl)?;
        control.fail_reads = true;
        Ok(())
    }

    /// Caption and dimensions of a form, for inspection.
    pub fn form_chrome(&self, form_name: &str) -> Result<(String, f64, f64), HostError> {
        let form = self
            .forms
            .iter()
            .find(|f| f.name == form_name)
            .ok_or(HostError::UnknownForm)?;
        Ok((form.caption.clone(), form.width, form.height))
    }

    /// Names of the controls attached to a form, for inspection.
    pub fn control_names(&self, form_name: &str) -> Result<Vec<String>, HostError> {
        let form = self
            .forms
            .iter()
            .find(|f| f.name == form_name)
            .ok_or(HostError::UnknownForm)?;
        Ok(form.controls.iter().map(|c| c.name.clone()).collect())
    }

    /// Populates the item list of a ListBox/ComboBox control.
    pub fn set_list_items(
        &mut self,
        form_name: &str,
        control_name: &str,
        items: Vec<String>,
    ) -> Result<(), HostError> {
        let form = self.form_by_name_mut(form_name)?;
        let control = form
            .control_by_name_mut(control_name)
            .ok_or(HostError::UnknownControl)?;
        control
            .properties
            .set_raw("List", PropertyValue::StringArray(items));
        Ok(())
    }

    fn form(&self, id: FormId) -> Result<&LiveForm, HostError> {
        self.forms.iter().find(|f| f.id == id).ok_or(HostError::UnknownForm)
    }

    fn form_mut(&mut self, id: FormId) -> Result<&mut LiveForm, HostError> {
        self.forms
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(HostError::UnknownForm)
    }

    fn form_by_name_mut(&mut self, name: &str) -> Result<&mut LiveForm, HostError> {
        self.forms
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or(HostError::UnknownForm)
    }

    fn control(&self, id: ControlId) -> Result<&LiveControl, HostError> {
        self.forms
            .iter()
            .flat_map(|f| f.controls.iter())
            .find(|c| c.id == id)
            .ok_or(HostError::UnknownControl)
    }
}

/// Default properties for a freshly created control, by kind.
fn default_properties(descriptor: &ControlDescriptor) -> PropertyBag {
    let mut properties = PropertyBag::new();
    match descriptor.kind {
        ControlKind::TextBox => {
            properties.set("Text", "");
            properties.set("Enabled", true);
            properties.set("Visible", true);
        }
        ControlKind::Label => {
            properties.set("Caption", descriptor.effective_caption());
            properties.set("Visible", true);
        }
        ControlKind::Button => {
            properties.set("Caption", descriptor.effective_caption());
            properties.set("Enabled", true);
            properties.set("Visible", true);
        }
        ControlKind::CheckBox | ControlKind::OptionButton => {
            properties.set("Caption", descriptor.effective_caption());
            properties.set("Value", false);
            properties.set("Enabled", true);
            properties.set("Visible", true);
        }
        ControlKind::ComboBox => {
            properties.set_raw("List", PropertyValue::StringArray(vec![]));
            properties.set("Text", "");
            properties.set("Enabled", true);
            properties.set("Visible", true);
        }
        ControlKind::ListBox => {
            properties.set_raw("List", PropertyValue::StringArray(vec![]));
            properties.set("ListIndex", -1);
            properties.set("Enabled", true);
            properties.set("Visible", true);
        }
    }
    properties
}

impl HostSurface for MemoryHost {
    fn list_forms(&self) -> Vec<String> {
        self.forms.iter().map(|f| f.name.clone()).collect()
    }

    fn create_form(
        &mut self,
        name: &str,
        caption: &str,
        width: f64,
        height: f64,
    ) -> Result<FormId, HostError> {
        if self.forms.iter().any(|f| f.name == name) {
            return Err(HostError::Display(format!("form '{name}' already exists")));
        }
        let id = FormId::new();
        self.forms.push(LiveForm {
            id,
            name: name.to_string(),
            caption: caption.to_string(),
            width,
            height,
            controls: Vec::new(),
            script: VecDeque::new(),
        });
        Ok(id)
    }

    fn add_control(
        &mut self,
        form: FormId,
        descriptor: &ControlDescriptor,
    ) -> Result<ControlId, HostError> {
        if self.rejected_kinds.contains(&descriptor.kind) {
            return Err(HostError::UnsupportedKind {
                control: descriptor.name.clone(),
                kind: descriptor.kind.to_string(),
            });
        }
        let properties = default_properties(descriptor);
        let form = self.form_mut(form)?;
        let id = ControlId::new();
        form.controls.push(LiveControl {
            id,
            name: descriptor.name.clone(),
            kind: Some(descriptor.kind),
            properties,
            fail_reads: false,
        });
        Ok(id)
    }

    fn show_modal(&mut self, form: FormId) -> Result<CloseSignal, HostError> {
        let form = self.form_mut(form)?;
        let mut script = std::mem::take(&mut form.script);
        while let Some(action) = script.pop_front() {
            match action {
                UserAction::SetText { control, text } => {
                    let control = form.control_by_name_mut(&control).ok_or_else(|| {
                        HostError::Display(format!("script targets unknown control '{control}'"))
                    })?;
                    control.properties.set("Text", text);
                }
                UserAction::SetChecked { control, checked } => {
                    let control = form.control_by_name_mut(&control).ok_or_else(|| {
                        HostError::Display(format!("script targets unknown control '{control}'"))
                    })?;
                    control.properties.set("Value", checked);
                }
                UserAction::SelectItem { control, item } => {
                    let control = form.control_by_name_mut(&control).ok_or_else(|| {
                        HostError::Display(format!("script targets unknown control '{control}'"))
                    })?;
                    let mut items = control
                        .properties
                        .get_string_array("List")
                        .cloned()
                        .unwrap_or_default();
                    let index = match items.iter().position(|i| i == &item) {
                        Some(i) => i,
                        None => {
                            items.push(item.clone());
                            items.len() - 1
                        }
                    };
                    control
                        .properties
                        .set_raw("List", PropertyValue::StringArray(items));
                    control.properties.set("ListIndex", index as i32);
                    control.properties.set("Text", item);
                }
                UserAction::Click { control } => {
                    if form.control_by_name(&control).is_none() {
                        return Err(HostError::Display(format!(
                            "script clicks unknown control '{control}'"
                        )));
                    }
                    return Ok(CloseSignal::Control(control));
                }
                UserAction::Dismiss => return Ok(CloseSignal::Dismissed),
            }
        }
        // No explicit close in the script: the user closed the window.
        Ok(CloseSignal::Dismissed)
    }

    fn enumerate_controls(&self, form: FormId) -> Result<Vec<ControlRef>, HostError> {
        let form = self.form(form)?;
        Ok(form
            .controls
            .iter()
            .map(|c| ControlRef {
                id: c.id,
                name: c.name.clone(),
                kind: c.kind,
            })
            .collect())
    }

    fn read_value(&self, control: ControlId, kind: ControlKind) -> Result<ControlValue, HostError> {
        let control = self.control(control)?;
        if control.fail_reads {
            return Err(HostError::Display(format!(
                "read failure for control '{}'",
                control.name
            )));
        }
        let value = match kind {
            ControlKind::TextBox | ControlKind::ComboBox => ControlValue::Text(
                control.properties.get_string("Text").unwrap_or_default().to_string(),
            ),
            ControlKind::CheckBox | ControlKind::OptionButton => {
                ControlValue::Bool(control.properties.get_bool("Value").unwrap_or(false))
            }
            ControlKind::ListBox => {
                let index = control.properties.get_int("ListIndex").unwrap_or(-1);
                if index < 0 {
                    ControlValue::Null
                } else {
                    control
                        .properties
                        .get_string_array("List")
                        .and_then(|items| items.get(index as usize))
                        .map(|item| ControlValue::Text(item.clone()))
                        .unwrap_or(ControlValue::Null)
                }
            }
            ControlKind::Label | ControlKind::Button => ControlValue::Text(
                control.properties.get_string("Caption").unwrap_or_default().to_string(),
            ),
        };
        Ok(value)
    }

    fn read_property(
        &self,
        control: ControlId,
        property: &str,
    ) -> Result<Option<ControlValue>, HostError> {
        let control = self.control(control)?;
        if control.fail_reads {
            return Err(HostError::Display(format!(
                "read failure for control '{}'",
                control.name
            )));
        }
        let value = match control.properties.get(property) {
            Some(PropertyValue::String(s)) => Some(ControlValue::Text(s.clone())),
            Some(PropertyValue::Boolean(b)) => Some(ControlValue::Bool(*b)),
            Some(PropertyValue::Integer(i)) => Some(ControlValue::Text(i.to_string())),
            // Arrays and explicit nulls hold no scalar to collect.
            Some(PropertyValue::StringArray(_)) | Some(PropertyValue::Null) | None => None,
        };
        Ok(value)
    }

    fn remove_form(&mut self, form: FormId) -> Result<(), HostError> {
        let before = self.forms.len();
        self.forms.retain(|f| f.id != form);
        if self.forms.len() == before {
            return Err(HostError::UnknownForm);
        }
        Ok(())
    }
}
