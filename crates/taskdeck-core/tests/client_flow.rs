use taskdeck_core::form::{DraftError, TaskDraft};
use taskdeck_core::protocol::{Envelope, ack_from_envelope, tasks_from_envelope};
use taskdeck_core::query::TaskQuery;
use taskdeck_core::task::{Task, TaskPriority, TaskStatus, find_task};

fn list_body() -> &'static str {
    r#"{
        "success": true,
        "data": [
            {
                "id": 5,
                "title": "Buy milk",
                "description": "2 liters",
                "status": "pending",
                "priority": "low",
                "created_at": "2026-08-06T10:15:00Z",
                "updated_at": "2026-08-06T10:15:00Z"
            },
            {
                "id": 6,
                "title": "Ship release",
                "status": "in_progress",
                "priority": "high",
                "created_at": "2026-01-02T08:00:00Z"
            }
        ],
        "total": 2
    }"#
}

#[test]
fn query_string_contains_exactly_the_selected_filters() {
    let none = TaskQuery::from_select_values("", "");
    assert_eq!(none.query_string(), "");

    let status_only = TaskQuery::from_select_values("pending", "");
    assert_eq!(status_only.query_string(), "?status=pending");

    let priority_only = TaskQuery::from_select_values("", "low");
    assert_eq!(priority_only.query_string(), "?priority=low");

    let both = TaskQuery::from_select_values("pending", "low");
    assert_eq!(both.query_string(), "?status=pending&priority=low");
    assert_eq!(both.list_url("/api/tasks"), "/api/tasks?status=pending&priority=low");
}

#[test]
fn successful_list_response_is_decoded_in_order() {
    let envelope = Envelope::parse(list_body()).expect("parse envelope");
    let tasks = tasks_from_envelope(&envelope).expect("decode tasks");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 5);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].description, "2 liters");
    assert_eq!(tasks[0].status, TaskStatus::Pending);
    assert_eq!(tasks[0].priority, TaskPriority::Low);
    assert_eq!(tasks[0].created_label(), "06.08.2026");

    assert_eq!(tasks[1].id, 6);
    assert_eq!(tasks[1].description, "");
    assert_eq!(tasks[1].status, TaskStatus::InProgress);
    assert!(tasks[1].updated_at.is_none());
}

#[test]
fn failed_envelope_surfaces_the_server_message() {
    let envelope =
        Envelope::parse(r#"{"success": false, "error": "база данных недоступна"}"#)
            .expect("parse envelope");
    let err = tasks_from_envelope(&envelope).expect_err("must fail");
    assert_eq!(err.to_string(), "база данных недоступна");

    let bare = Envelope::parse(r#"{"success": false}"#).expect("parse envelope");
    let err = tasks_from_envelope(&bare).expect_err("must fail");
    assert_eq!(err.to_string(), "Неизвестная ошибка");
}

#[test]
fn missing_or_malformed_data_payload_degrades_to_empty() {
    let missing = Envelope::parse(r#"{"success": true}"#).expect("parse envelope");
    assert_eq!(tasks_from_envelope(&missing).expect("decode"), Vec::new());

    let null = Envelope::parse(r#"{"success": true, "data": null}"#).expect("parse envelope");
    assert_eq!(tasks_from_envelope(&null).expect("decode"), Vec::new());

    let object =
        Envelope::parse(r#"{"success": true, "data": {"oops": 1}}"#).expect("parse envelope");
    assert_eq!(tasks_from_envelope(&object).expect("decode"), Vec::new());
}

#[test]
fn undecodable_body_is_a_server_error() {
    let err = Envelope::parse("<html>502</html>").expect_err("must fail");
    assert!(err.to_string().starts_with("Некорректный ответ сервера"));
}

#[test]
fn mutation_ack_follows_the_success_flag() {
    let ok = Envelope::parse(r#"{"success": true, "message": "Задача удалена"}"#)
        .expect("parse envelope");
    ack_from_envelope(&ok).expect("ack");

    let failed = Envelope::parse(r#"{"success": false, "error": "задача не найдена"}"#)
        .expect("parse envelope");
    let err = ack_from_envelope(&failed).expect_err("must fail");
    assert_eq!(err.to_string(), "задача не найдена");
}

#[test]
fn edit_lookup_for_an_absent_id_is_a_no_op() {
    let envelope = Envelope::parse(list_body()).expect("parse envelope");
    let tasks = tasks_from_envelope(&envelope).expect("decode tasks");

    assert!(find_task(&tasks, 999).is_none());
    assert_eq!(find_task(&tasks, 5).map(|task| task.title.as_str()), Some("Buy milk"));
}

#[test]
fn blank_title_rejects_the_draft_before_any_request() {
    let mut draft = TaskDraft::default();
    assert_eq!(draft.validate(), Err(DraftError::EmptyTitle));

    draft.title = "   \t".to_string();
    let err = draft.validate().expect_err("must reject");
    assert_eq!(err.to_string(), "Название задачи обязательно");
}

#[test]
fn create_draft_produces_the_collection_post_body() {
    let draft = TaskDraft {
        title: "Buy milk".to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
        priority: TaskPriority::Low,
    };

    let payload = draft.validate().expect("valid draft");
    let body = serde_json::to_value(&payload).expect("serialize payload");
    assert_eq!(
        body,
        serde_json::json!({
            "title": "Buy milk",
            "description": "",
            "status": "pending",
            "priority": "low"
        })
    );

    assert_eq!(payload.status.label(), "Ожидает");
    assert_eq!(payload.priority.label(), "Низкий");
}

#[test]
fn edit_draft_preserves_fields_and_carries_the_changed_priority() {
    let envelope = Envelope::parse(list_body()).expect("parse envelope");
    let tasks = tasks_from_envelope(&envelope).expect("decode tasks");
    let task = find_task(&tasks, 5).expect("task 5 present");

    let mut draft = TaskDraft::from_task(task);
    assert_eq!(draft.title, "Buy milk");
    assert_eq!(draft.status, TaskStatus::Pending);

    draft.priority = TaskPriority::High;
    let payload = draft.validate().expect("valid draft");
    let body = serde_json::to_value(&payload).expect("serialize payload");
    assert_eq!(body["priority"], "high");
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "2 liters");
}

#[test]
fn trimming_applies_to_submitted_fields() {
    let draft = TaskDraft {
        title: "  Buy milk  ".to_string(),
        description: " 2 liters ".to_string(),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
    };

    let payload = draft.validate().expect("valid draft");
    assert_eq!(payload.title, "Buy milk");
    assert_eq!(payload.description, "2 liters");
}

#[test]
fn unknown_enum_values_pass_through_unchanged() {
    let raw = r#"{
        "id": 7,
        "title": "Legacy row",
        "status": "archived",
        "priority": "urgent",
        "created_at": "2025-12-31T23:59:59Z"
    }"#;

    let task: Task = serde_json::from_str(raw).expect("decode task");
    assert_eq!(task.status, TaskStatus::Other("archived".to_string()));
    assert_eq!(task.status.label(), "archived");
    assert_eq!(task.priority.label(), "urgent");

    let back = serde_json::to_value(&task).expect("serialize task");
    assert_eq!(back["status"], "archived");
    assert_eq!(back["priority"], "urgent");
}

#[test]
fn status_and_priority_labels_are_localized() {
    let statuses = TaskStatus::all();
    let status_labels: Vec<&str> = statuses.iter().map(|status| status.label()).collect();
    assert_eq!(status_labels, vec!["Ожидает", "В работе", "Завершено", "Отменено"]);

    let priorities = TaskPriority::all();
    let priority_labels: Vec<&str> = priorities.iter().map(|priority| priority.label()).collect();
    assert_eq!(priority_labels, vec!["Низкий", "Средний", "Высокий"]);
}
