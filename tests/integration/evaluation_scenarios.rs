//! End-to-end evaluation over decoded documents.

use contentmap::types::{attribute_set, condition_map};
use contentmap::{
    evaluate, ContentEvaluator, EvaluationError, EvaluationRequest, Evaluator, MatchPolicy,
    RawContent,
};

use super::test_utils::ROLE_CONTENT;

fn messages(records: &[contentmap::ResultRecord]) -> Vec<Option<String>> {
    records.iter().map(|r| r["msg"].clone()).collect()
}

#[test]
fn test_unconditional_node_is_always_selected() {
    let content =
        RawContent::from_json_str(r#"{"selectionNodes": [{"node": {"conditionId": "", "msg": "hello"}}]}"#)
            .unwrap();
    let records = evaluate(&content, &attribute_set(["msg"]), &condition_map::<_, &str, &str>([])).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["msg"].as_deref(), Some("hello"));
}

#[test]
fn test_condition_selects_matching_role_only() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let records = evaluate(
        &content,
        &attribute_set(["msg"]),
        &condition_map([("role", "admin")]),
    )
    .unwrap();

    assert_eq!(
        messages(&records),
        vec![Some("hello".to_string()), Some("hi admin".to_string())]
    );
}

#[test]
fn test_no_selection_nodes_is_malformed() {
    let content = RawContent::from_json_str(r#"{"selectionNodes": [], "conditionNodes": []}"#).unwrap();
    let err = evaluate(&content, &attribute_set(["msg"]), &Default::default()).unwrap_err();
    assert!(matches!(err, EvaluationError::MalformedContent(_)));
}

#[test]
fn test_empty_attribute_set_is_precondition_violation() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let err = evaluate(&content, &attribute_set::<_, &str>([]), &Default::default()).unwrap_err();
    assert!(matches!(
        err,
        EvaluationError::Precondition {
            argument: "attributes",
            ..
        }
    ));
}

#[test]
fn test_missing_attribute_projects_to_absent() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let records = evaluate(
        &content,
        &attribute_set(["msg", "title"]),
        &condition_map([("role", "guest")]),
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    let guest = &records[1];
    assert_eq!(guest["msg"].as_deref(), Some("hi guest"));
    assert!(guest.contains_key("title"));
    assert_eq!(guest["title"], None);
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let attributes = attribute_set(["msg", "title"]);
    let conditions = condition_map([("role", "admin")]);

    let first = evaluate(&content, &attributes, &conditions).unwrap();
    let second = evaluate(&content, &attributes, &conditions).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unreferenced_condition_key_changes_nothing() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let attributes = attribute_set(["msg"]);

    let base = evaluate(&content, &attributes, &condition_map([("role", "admin")])).unwrap();
    let extended = evaluate(
        &content,
        &attributes,
        &condition_map([("role", "admin"), ("locale", "fr")]),
    )
    .unwrap();
    assert_eq!(base, extended);
}

#[test]
fn test_unsupplied_key_policy() {
    let content = RawContent::from_json_str(ROLE_CONTENT).unwrap();
    let attributes = attribute_set(["msg"]);

    let partial = ContentEvaluator::new(EvaluationRequest::new(&content, &attributes))
        .evaluate()
        .unwrap();
    assert_eq!(partial.len(), 3);

    let strict = ContentEvaluator::new(EvaluationRequest {
        policy: MatchPolicy::Strict,
        ..EvaluationRequest::new(&content, &attributes)
    })
    .evaluate()
    .unwrap();
    assert_eq!(messages(&strict), vec![Some("hello".to_string())]);
}

#[test]
fn test_null_content_sections_are_malformed() {
    let attributes = attribute_set(["msg"]);
    for json in [
        r#"{"selectionNodes": null}"#,
        r#"{"selectionNodes": [null]}"#,
        r#"{"selectionNodes": [{"node": null}]}"#,
    ] {
        let content = RawContent::from_json_str(json).unwrap();
        let err = evaluate(&content, &attributes, &Default::default()).unwrap_err();
        assert!(
            matches!(err, EvaluationError::MalformedContent(_)),
            "{}: {:?}",
            json,
            err
        );
    }
}

#[test]
fn test_null_attribute_projects_to_absent() {
    let content =
        RawContent::from_json_str(r#"{"selectionNodes": [{"node": {"msg": null, "code": 7}}]}"#)
            .unwrap();
    let records = evaluate(&content, &attribute_set(["msg", "code"]), &Default::default()).unwrap();
    assert_eq!(records[0]["msg"], None);
    assert_eq!(records[0]["code"].as_deref(), Some("7"));
}

#[test]
fn test_wrong_section_shape_is_malformed() {
    let content = RawContent::from_json_str(r#"{"selectionNodes": {"node": {"msg": "x"}}}"#).unwrap();
    let err = evaluate(&content, &attribute_set(["msg"]), &Default::default()).unwrap_err();
    assert!(matches!(err, EvaluationError::MalformedContent(_)));
}
