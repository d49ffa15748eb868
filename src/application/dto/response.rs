//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::User;

/// User response. The id is serialized as a string.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_string() {
        let response = UserResponse::from(User {
            id: 1,
            name: "John Doe".into(),
            age: 25,
        });

        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, r#"{"id":"1","name":"John Doe","age":25}"#);
    }
}
