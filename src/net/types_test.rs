use super::*;

#[test]
fn job_deserializes_from_camel_case_wire_shape() {
    let json = r#"{
        "createdAt": "14/08/2021",
        "description": "description",
        "expiredAt": "2022-10-10T00:00:00.000Z",
        "id": "b8d86ffc-da29-4bf5-9d72-f4bd1b76d89a",
        "maxBudget": "200",
        "minBudget": "100",
        "skills": "skills",
        "title": "title test",
        "updatedAt": "14/08/2021",
        "userId": "ef3a51a3-642a-4230-9a01-ecd475e72f07",
        "version": "ede2bf46-d06a-4d1f-b756-b718de36165b"
    }"#;

    let job: Job = serde_json::from_str(json).unwrap();
    assert_eq!(job.id, "b8d86ffc-da29-4bf5-9d72-f4bd1b76d89a");
    assert_eq!(job.title, "title test");
    assert_eq!(job.min_budget, "100");
    assert_eq!(job.max_budget, "200");
}

#[test]
fn register_request_omits_blank_optional_names() {
    let request = RegisterRequest {
        first_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "12345678".to_owned(),
        ..RegisterRequest::default()
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert!(json.get("middleName").is_none());
    assert!(json.get("lastName").is_none());
}

#[test]
fn register_request_keeps_optional_names_when_present() {
    let request = RegisterRequest {
        first_name: "Ada".to_owned(),
        middle_name: "King".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "12345678".to_owned(),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["middleName"], "King");
    assert_eq!(json["lastName"], "Lovelace");
}
