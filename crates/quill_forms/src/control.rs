use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Control geometry in the host's abstract unit (points or pixels,
/// whichever the host surface renders in).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_non_negative(&self) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.width >= 0.0 && self.height >= 0.0
    }
}

/// The closed set of control kinds a form specification may describe.
/// Hosts may render additional native kinds; those surface as kind-less
/// controls during collection and go through the generic value probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    TextBox,
    Label,
    Button,
    CheckBox,
    OptionButton,
    ComboBox,
    ListBox,
}

impl ControlKind {
    pub fn as_str(&self) -> &str {
        match self {
            ControlKind::TextBox => "TextBox",
            ControlKind::Label => "Label",
            ControlKind::Button => "Button",
            ControlKind::CheckBox => "CheckBox",
            ControlKind::OptionButton => "OptionButton",
            ControlKind::ComboBox => "ComboBox",
            ControlKind::ListBox => "ListBox",
        }
    }

    pub fn default_name_prefix(&self) -> &str {
        match self {
            ControlKind::TextBox => "txt",
            ControlKind::Label => "lbl",
            ControlKind::Button => "btn",
            ControlKind::CheckBox => "chk",
            ControlKind::OptionButton => "opt",
            ControlKind::ComboBox => "cbo",
            ControlKind::ListBox => "lst",
        }
    }

    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ControlKind::TextBox => (150.0, 25.0),
            ControlKind::Label => (80.0, 20.0),
            ControlKind::Button => (80.0, 28.0),
            ControlKind::CheckBox => (120.0, 20.0),
            ControlKind::OptionButton => (120.0, 20.0),
            ControlKind::ComboBox => (150.0, 25.0),
            ControlKind::ListBox => (150.0, 100.0),
        }
    }

    /// Whether a control of this kind contributes an entry to the
    /// collected data. Labels and buttons are presentation-only.
    pub fn carries_user_data(&self) -> bool {
        !matches!(self, ControlKind::Label | ControlKind::Button)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control kind: {0}")]
pub struct UnknownKindError(pub String);

impl FromStr for ControlKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s.eq_ignore_ascii_case("TextBox") => Ok(ControlKind::TextBox),
            s if s.eq_ignore_ascii_case("Label") => Ok(ControlKind::Label),
            s if s.eq_ignore_ascii_case("Button") => Ok(ControlKind::Button),
            s if s.eq_ignore_ascii_case("CheckBox") => Ok(ControlKind::CheckBox),
            s if s.eq_ignore_ascii_case("OptionButton") => Ok(ControlKind::OptionButton),
            s if s.eq_ignore_ascii_case("ComboBox") => Ok(ControlKind::ComboBox),
            s if s.eq_ignore_ascii_case("ListBox") => Ok(ControlKind::ListBox),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

/// One entry in a form specification: what to create, under which name,
/// and where. The name doubles as the key the collected value is
/// reported under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub kind: ControlKind,
    pub name: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub bounds: Bounds,
}

impl ControlDescriptor {
    pub fn new(kind: ControlKind, name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            kind,
            name: name.into(),
            caption: None,
            bounds,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Display text for the live control: the caption when one was given,
    /// the control name otherwise (text-input kinds start empty and carry
    /// no caption at all).
    pub fn effective_caption(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.name)
    }
}
