use super::*;

#[test]
fn diary_entry_maps_camel_case_fields() {
    let json = serde_json::json!({
        "id": 7,
        "title": "first",
        "content": "hello",
        "imagePath": "uploads/7.png",
        "createdAt": "2025-05-01T09:30:00"
    });
    let entry: DiaryEntry = serde_json::from_value(json).expect("entry");
    assert_eq!(entry.image_path.as_deref(), Some("uploads/7.png"));
    assert_eq!(entry.created_at.as_deref(), Some("2025-05-01T09:30:00"));
}

#[test]
fn diary_entry_tolerates_missing_optional_fields() {
    let json = serde_json::json!({"id": 1, "title": "t", "content": "c"});
    let entry: DiaryEntry = serde_json::from_value(json).expect("entry");
    assert!(entry.image_path.is_none());
    assert!(entry.created_at.is_none());
}

#[test]
fn find_id_response_maps_masked_user_id() {
    let json = serde_json::json!({
        "success": true,
        "message": "found",
        "maskedUserId": "di***er"
    });
    let resp: FindIdResponse = serde_json::from_value(json).expect("response");
    assert_eq!(resp.masked_user_id.as_deref(), Some("di***er"));
}

#[test]
fn reset_password_request_serializes_camel_case() {
    let req = ResetPasswordRequest {
        token: "tok".to_owned(),
        new_password: "secret".to_owned(),
    };
    let json = serde_json::to_value(&req).expect("json");
    assert_eq!(json["newPassword"], "secret");
}

#[test]
fn api_response_data_is_optional() {
    let json = serde_json::json!({"success": false, "message": "nope"});
    let resp: ApiResponse = serde_json::from_value(json).expect("response");
    assert!(!resp.success);
    assert!(resp.data.is_none());
}

#[test]
fn sort_order_param_round_trip() {
    assert_eq!(SortOrder::default().as_param(), "desc");
    assert_eq!(SortOrder::from_param("asc"), SortOrder::Asc);
    assert_eq!(SortOrder::from_param("bogus"), SortOrder::Desc);
}
