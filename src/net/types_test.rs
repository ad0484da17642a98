use super::*;

#[test]
fn progress_update_serializes_snake_case_fields() {
    let update = ProgressUpdate { lesson_id: "l-3".to_owned(), completed: true, time_spent: 0 };
    let json = serde_json::to_value(&update).expect("serialize");
    assert_eq!(json, serde_json::json!({ "lesson_id": "l-3", "completed": true, "time_spent": 0 }));
}

#[test]
fn form_reply_defaults_missing_ok_to_false() {
    let reply: FormReply = serde_json::from_str("{}").expect("parse");
    assert!(!reply.ok);
    assert_eq!(reply.error, None);
}

#[test]
fn form_reply_reads_error_text() {
    let reply: FormReply =
        serde_json::from_str(r#"{"ok":false,"error":"Missing required fields"}"#).expect("parse");
    assert!(!reply.ok);
    assert_eq!(reply.error.as_deref(), Some("Missing required fields"));
}

#[test]
fn form_fields_get_returns_first_value() {
    let fields: FormFields = [("topic", "algebra"), ("topic", "geometry")].into_iter().collect();
    assert_eq!(fields.get("topic"), Some("algebra"));
    assert_eq!(fields.len(), 2);
}

#[test]
fn form_fields_trimmed_blank_when_absent() {
    let fields: FormFields = [("name", "  Asha  ")].into_iter().collect();
    assert_eq!(fields.trimmed("name"), "Asha");
    assert_eq!(fields.trimmed("phone"), "");
}

#[test]
fn form_fields_iter_preserves_order() {
    let mut fields = FormFields::new();
    fields.push("org", "Acme");
    fields.push("contact", "Ravi");
    let names: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["org", "contact"]);
}
