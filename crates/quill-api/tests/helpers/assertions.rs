//! Custom assertions para tests.

use serde_json::Value;

/// Verifica la forma del envelope uniforme.
pub fn assert_envelope(json: &Value, success: bool) {
    assert!(json.is_object(), "Response should be a JSON object");

    let obj = json.as_object().unwrap();

    assert!(obj.contains_key("success"), "Missing 'success' field");
    assert!(obj.contains_key("message"), "Missing 'message' field");
    assert_eq!(
        obj["success"],
        Value::Bool(success),
        "Unexpected 'success' value. Body: {json}"
    );
    assert!(obj["message"].is_string(), "'message' should be a string");
}

/// Verifica la forma de un post serializado, incluyendo el owner
/// denormalizado.
pub fn assert_post_schema(json: &Value) {
    assert!(json.is_object(), "Post should be a JSON object");

    let obj = json.as_object().unwrap();

    for field in [
        "id",
        "title",
        "content",
        "user_id",
        "created_at",
        "updated_at",
        "user",
    ] {
        assert!(obj.contains_key(field), "Post missing '{field}' field");
    }

    assert!(obj["id"].is_i64(), "'id' should be an integer");
    assert!(obj["title"].is_string(), "'title' should be a string");
    assert!(
        obj["created_at"].is_string(),
        "'created_at' should be a string"
    );

    let user = obj["user"]
        .as_object()
        .expect("'user' should be an object");
    for field in ["id", "name", "email"] {
        assert!(user.contains_key(field), "Owner missing '{field}' field");
    }
    assert!(
        !user.contains_key("password") && !user.contains_key("password_hash"),
        "Owner must not leak credentials"
    );
}

/// Verifica un error de validacion con detalle para el campo dado.
pub fn assert_validation_error(json: &Value, field: &str) {
    assert_envelope(json, false);
    assert_eq!(json["message"], "Validation failed");

    let errors = json["errors"]
        .as_object()
        .expect("'errors' should be an object");
    let messages = errors
        .get(field)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Expected errors for field '{field}'. Body: {json}"));

    assert!(!messages.is_empty(), "Field '{field}' has no messages");
}
