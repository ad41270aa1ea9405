use quill_forms::serialization::host_codegen;
use quill_forms::{Bounds, ControlDescriptor, ControlKind, FormSpec};

fn contact_spec(standard_buttons: bool) -> FormSpec {
    let controls = vec![
        ControlDescriptor::new(ControlKind::Label, "lblName", Bounds::new(20.0, 20.0, 80.0, 20.0))
            .with_caption("Name:"),
        ControlDescriptor::new(
            ControlKind::TextBox,
            "txtName",
            Bounds::new(110.0, 20.0, 150.0, 25.0),
        ),
    ];
    FormSpec::build("ContactForm", "Contact", 400.0, 300.0, controls, standard_buttons)
        .expect("build failed")
}

#[test]
fn test_builder_code_recreates_form_and_controls() {
    let code = host_codegen::generate_form_builder(&contact_spec(true));
    println!("{code}");

    assert!(code.contains("Public Sub BuildContactForm(host As Object)"));
    assert!(code.contains("Set frm = host.CreateForm(\"ContactForm\")"));
    assert!(code.contains("frm.Caption = \"Contact\""));
    assert!(code.contains("frm.Controls.Add(\"Forms.Label.1\", \"lblName\")"));
    assert!(code.contains("frm.Controls.Add(\"Forms.TextBox.1\", \"txtName\")"));
    assert!(code.contains("frm.Controls.Add(\"Forms.CommandButton.1\", \"btnOK\")"));
    assert!(code.contains("ctl.Caption = \"Name:\""));
    // Text-holding kinds get no caption assignment.
    assert!(!code.contains("ctl.Caption = \"txtName\""));
}

#[test]
fn test_code_behind_wires_reserved_buttons() {
    let code = host_codegen::generate_modal_code_behind(&contact_spec(true));

    assert!(code.contains("Private Sub btnOK_Click()"));
    assert!(code.contains("Private Sub btnCancel_Click()"));
    assert!(code.contains("mCancelled = False"));
    assert!(code.contains("vbFormControlMenu"));
    assert!(code.contains("Public Function WasCancelled() As Boolean"));
}

#[test]
fn test_code_behind_without_standard_buttons() {
    let code = host_codegen::generate_modal_code_behind(&contact_spec(false));

    // No reserved buttons, no click handlers; chrome handling stays.
    assert!(!code.contains("btnOK_Click"));
    assert!(!code.contains("btnCancel_Click"));
    assert!(code.contains("UserForm_QueryClose"));
}

#[test]
fn test_helper_combines_both_modules() {
    let code = host_codegen::generate_host_helper(&contact_spec(true));
    assert!(code.contains("BuildContactForm"));
    assert!(code.contains("WasCancelled"));
}
