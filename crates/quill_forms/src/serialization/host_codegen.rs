//! Renders a form specification into the host's own scripting source, so
//! the host can rebuild and drive the same dialog without this library in
//! the loop. The output is an opaque string handed to the host's module
//! code interface; it is never parsed back.

use crate::control::{ControlKind, ControlDescriptor};
use crate::spec::{CANCEL_BUTTON_NAME, CONFIRM_BUTTON_NAME, FormSpec};

/// Maps a ControlKind to the host's control ProgID.
pub fn kind_to_host_progid(kind: &ControlKind) -> &str {
    match kind {
        ControlKind::TextBox => "Forms.TextBox.1",
        ControlKind::Label => "Forms.Label.1",
        ControlKind::Button => "Forms.CommandButton.1",
        ControlKind::CheckBox => "Forms.CheckBox.1",
        ControlKind::OptionButton => "Forms.OptionButton.1",
        ControlKind::ComboBox => "Forms.ComboBox.1",
        ControlKind::ListBox => "Forms.ListBox.1",
    }
}

fn has_caption(control: &ControlDescriptor) -> bool {
    // Text-holding kinds have no caption surface on the host side.
    !matches!(
        control.kind,
        ControlKind::TextBox | ControlKind::ComboBox | ControlKind::ListBox
    )
}

/// Generates a `Build<FormName>` procedure that recreates the form
/// container and every control, in specification order.
pub fn generate_form_builder(spec: &FormSpec) -> String {
    let mut code = String::new();

    code.push_str(&format!("Public Sub Build{}(host As Object)\n", spec.name));
    code.push_str("    Dim frm As Object\n");
    code.push_str(&format!(
        "    Set frm = host.CreateForm(\"{}\")\n",
        spec.name
    ));
    code.push_str(&format!("    frm.Caption = \"{}\"\n", spec.caption));
    code.push_str(&format!("    frm.Width = {}\n", spec.width));
    code.push_str(&format!("    frm.Height = {}\n", spec.height));
    code.push_str("    Dim ctl As Object\n");

    for control in &spec.controls {
        code.push_str(&format!(
            "    Set ctl = frm.Controls.Add(\"{}\", \"{}\")\n",
            kind_to_host_progid(&control.kind),
            control.name
        ));
        code.push_str(&format!("    ctl.Left = {}\n", control.bounds.left));
        code.push_str(&format!("    ctl.Top = {}\n", control.bounds.top));
        code.push_str(&format!("    ctl.Width = {}\n", control.bounds.width));
        code.push_str(&format!("    ctl.Height = {}\n", control.bounds.height));
        if has_caption(control) {
            code.push_str(&format!(
                "    ctl.Caption = \"{}\"\n",
                control.effective_caption()
            ));
        }
    }

    code.push_str("End Sub\n");
    code
}

/// Generates the form's code-behind module: the cancelled flag, click
/// handlers for the reserved buttons (when the spec carries them), and a
/// window-chrome close handler that records cancellation.
pub fn generate_modal_code_behind(spec: &FormSpec) -> String {
    let mut code = String::new();

    code.push_str(&format!("' Code-behind for {}. Generated, do not edit.\n", spec.name));
    code.push_str("Private mCancelled As Boolean\n\n");

    if spec.controls.iter().any(|c| c.name == CONFIRM_BUTTON_NAME) {
        code.push_str(&format!("Private Sub {}_Click()\n", CONFIRM_BUTTON_NAME));
        code.push_str("    mCancelled = False\n");
        code.push_str("    Me.Hide\n");
        code.push_str("End Sub\n\n");
    }

    if spec.controls.iter().any(|c| c.name == CANCEL_BUTTON_NAME) {
        code.push_str(&format!("Private Sub {}_Click()\n", CANCEL_BUTTON_NAME));
        code.push_str("    mCancelled = True\n");
        code.push_str("    Me.Hide\n");
        code.push_str("End Sub\n\n");
    }

    code.push_str("Private Sub UserForm_QueryClose(Cancel As Integer, CloseMode As Integer)\n");
    code.push_str("    ' Closing through the window chrome counts as cancellation.\n");
    code.push_str("    If CloseMode = vbFormControlMenu Then\n");
    code.push_str("        mCancelled = True\n");
    code.push_str("        Cancel = 1\n");
    code.push_str("        Me.Hide\n");
    code.push_str("    End If\n");
    code.push_str("End Sub\n\n");

    code.push_str("Public Function WasCancelled() As Boolean\n");
    code.push_str("    WasCancelled = mCancelled\n");
    code.push_str("End Function\n");

    code
}

/// Builder procedure plus code-behind, separated by a module break marker.
pub fn generate_host_helper(spec: &FormSpec) -> String {
    format!(
        "{}\n' --- module break ---\n\n{}",
        generate_form_builder(spec),
        generate_modal_code_behind(spec)
    )
}
