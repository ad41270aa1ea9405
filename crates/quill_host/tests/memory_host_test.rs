use quill_forms::{Bounds, ControlDescriptor, ControlKind, PropertyBag};
use quill_host::{CloseSignal, ControlValue, HostError, HostSurface, MemoryHost, UserAction};

fn descriptor(kind: ControlKind, name: &str) -> ControlDescriptor {
    let (width, height) = kind.default_size();
    ControlDescriptor::new(kind, name, Bounds::new(10.0, 10.0, width, height))
}

#[test]
fn test_create_and_enumerate() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    host.add_control(form, &descriptor(ControlKind::TextBox, "txtA")).expect("add failed");
    host.add_control(form, &descriptor(ControlKind::CheckBox, "chkB")).expect("add failed");

    assert_eq!(host.list_forms(), vec!["F".to_string()]);

    let controls = host.enumerate_controls(form).expect("enumerate failed");
    assert_eq!(controls.len(), 2);
    assert_eq!(controls[0].name, "txtA");
    assert_eq!(controls[0].kind, Some(ControlKind::TextBox));
}

#[test]
fn test_form_chrome() {
    let mut host = MemoryHost::new();
    host.create_form("F", "My Form", 400.0, 300.0).expect("create failed");
    assert_eq!(
        host.form_chrome("F").expect("chrome failed"),
        ("My Form".to_string(), 400.0, 300.0)
    );
}

#[test]
fn test_fresh_control_defaults() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let txt = host.add_control(form, &descriptor(ControlKind::TextBox, "txtA")).expect("add failed");
    let chk = host.add_control(form, &descriptor(ControlKind::CheckBox, "chkB")).expect("add failed");
    let lst = host.add_control(form, &descriptor(ControlKind::ListBox, "lstC")).expect("add failed");

    assert_eq!(
        host.read_value(txt, ControlKind::TextBox).expect("read failed"),
        ControlValue::Text(String::new())
    );
    assert_eq!(
        host.read_value(chk, ControlKind::CheckBox).expect("read failed"),
        ControlValue::Bool(false)
    );
    // No selection yet.
    assert_eq!(
        host.read_value(lst, ControlKind::ListBox).expect("read failed"),
        ControlValue::Null
    );
}

#[test]
fn test_duplicate_form_name_rejected_by_host() {
    let mut host = MemoryHost::new();
    host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let err = host.create_form("F", "Form", 400.0, 300.0).unwrap_err();
    assert!(matches!(err, HostError::Display(_)));
}

#[test]
fn test_rejected_kind_surfaces_as_unsupported() {
    let mut host = MemoryHost::new();
    host.reject_kind(ControlKind::ListBox);
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let err = host.add_control(form, &descriptor(ControlKind::ListBox, "lstC")).unwrap_err();
    match err {
        HostError::UnsupportedKind { control, kind } => {
            assert_eq!(control, "lstC");
            assert_eq!(kind, "ListBox");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_scripted_modal_display() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let txt = host.add_control(form, &descriptor(ControlKind::TextBox, "txtName")).expect("add failed");
    host.add_control(form, &descriptor(ControlKind::Button, "btnOK")).expect("add failed");

    host.queue_script(
        "F",
        vec![
            UserAction::SetText {
                control: "txtName".to_string(),
                text: "Ada".to_string(),
            },
            UserAction::Click {
                control: "btnOK".to_string(),
            },
        ],
    )
    .expect("queue failed");

    let signal = host.show_modal(form).expect("show failed");
    assert_eq!(signal, CloseSignal::Control("btnOK".to_string()));
    assert_eq!(
        host.read_value(txt, ControlKind::TextBox).expect("read failed"),
        ControlValue::Text("Ada".to_string())
    );
}

#[test]
fn test_empty_script_is_dismissal() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let signal = host.show_modal(form).expect("show failed");
    assert_eq!(signal, CloseSignal::Dismissed);
}

#[test]
fn test_list_selection() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let lst = host.add_control(form, &descriptor(ControlKind::ListBox, "lstColor")).expect("add failed");
    host.set_list_items("F", "lstColor", vec!["Red".to_string(), "Green".to_string()])
        .expect("set items failed");

    host.queue_script(
        "F",
        vec![
            UserAction::SelectItem {
                control: "lstColor".to_string(),
                item: "Green".to_string(),
            },
            UserAction::Dismiss,
        ],
    )
    .expect("queue failed");
    host.show_modal(form).expect("show failed");

    assert_eq!(
        host.read_value(lst, ControlKind::ListBox).expect("read failed"),
        ControlValue::Text("Green".to_string())
    );
}

#[test]
fn test_script_with_unknown_control_fails() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    host.queue_script(
        "F",
        vec![UserAction::SetText {
            control: "txtGhost".to_string(),
            text: "x".to_string(),
        }],
    )
    .expect("queue failed");
    assert!(host.show_modal(form).is_err());
}

#[test]
fn test_generic_property_probe() {
    let mut host = MemoryHost::new();
    host.create_form("F", "Form", 400.0, 300.0).expect("create failed");

    let mut bag = PropertyBag::new();
    bag.set("Text", "probe me");
    let native = host.insert_native_control("F", "spnCount", bag).expect("insert failed");

    assert_eq!(host.read_property(native, "Value").expect("read failed"), None);
    assert_eq!(
        host.read_property(native, "Text").expect("read failed"),
        Some(ControlValue::Text("probe me".to_string()))
    );
    // Property lookup is case-insensitive, host convention.
    assert_eq!(
        host.read_property(native, "text").expect("read failed"),
        Some(ControlValue::Text("probe me".to_string()))
    );
}

#[test]
fn test_scripted_read_failure() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    let txt = host.add_control(form, &descriptor(ControlKind::TextBox, "txtA")).expect("add failed");
    host.fail_reads("F", "txtA").expect("fail_reads failed");
    assert!(host.read_value(txt, ControlKind::TextBox).is_err());
    assert!(host.read_property(txt, "Text").is_err());
}

#[test]
fn test_remove_form_frees_name() {
    let mut host = MemoryHost::new();
    let form = host.create_form("F", "Form", 400.0, 300.0).expect("create failed");
    host.remove_form(form).expect("remove failed");
    assert!(host.list_forms().is_empty());
    host.create_form("F", "Form", 400.0, 300.0).expect("recreate failed");
}

#[test]
fn test_user_action_json_shape() {
    let json = r#"[
        {"action": "set_text", "control": "txtName", "text": "Ada"},
        {"action": "click", "control": "btnOK"}
    ]"#;
    let actions: Vec<UserAction> = serde_json::from_str(json).expect("parse failed");
    assert_eq!(actions.len(), 2);
    assert_eq!(
        actions[1],
        UserAction::Click {
            control: "btnOK".to_string()
        }
    );
}
