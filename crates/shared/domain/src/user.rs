//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Records are immutable values: an update builds a new `User` with the
/// same `id` and swaps it into the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Identifier assigned by the store on creation
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Smith"))]
    pub name: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i32,
}

impl User {
    /// Create a user record with the given identifier
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Build the replacement record for this user, keeping its identifier
    pub fn replaced_with(&self, request: &UserRequestBody) -> Self {
        Self::from_request(self.id.clone(), request)
    }

    /// Build a record from an identifier and a request body
    pub fn from_request(id: impl Into<String>, request: &UserRequestBody) -> Self {
        Self::new(id, request.name.clone(), request.age)
    }
}

/// User create/update data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRequestBody {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Smith"))]
    pub name: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i32,
}

impl UserRequestBody {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Message carried by the not-found error for an unknown user id
pub fn user_not_found_message(id: &str) -> String {
    format!("User with uuid '{}' not found", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_keeps_id() {
        let user = User::new("abc", "John Smith", 30);
        let updated = user.replaced_with(&UserRequestBody::new("Jane Smith", 45));

        assert_eq!(updated.id, "abc");
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.age, 45);
        assert_ne!(updated, user);
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new("abc", "John Smith", 30);
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": "abc", "name": "John Smith", "age": 30 })
        );
    }

    #[test]
    fn test_request_body_rejects_non_numeric_age() {
        let result: Result<UserRequestBody, _> =
            serde_json::from_str(r#"{ "name": "John Smith", "age": "thirty" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            user_not_found_message("UNKNOWN"),
            "User with uuid 'UNKNOWN' not found"
        );
    }

    #[cfg(feature = "openapi")]
    #[test]
    fn test_schema_carries_examples() {
        use utoipa::ToSchema;

        let (name, schema) = User::schema();
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(name, "User");
        assert_eq!(value["properties"]["name"]["example"], "John Smith");
        assert_eq!(value["properties"]["age"]["example"], 30);

        let (name, schema) = UserRequestBody::schema();
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(name, "UserRequestBody");
        assert!(value["properties"]["id"].is_null());
        assert_eq!(value["required"], serde_json::json!(["name", "age"]));
    }
}
