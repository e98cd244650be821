//! Class payloads

use serde::{Deserialize, Serialize};

use crate::db::repos::Class;

/// Body of `POST /classes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCreate {
    pub name: String,
    pub subject: String,
}

/// Class as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub subject: String,
}

impl From<Class> for ClassResponse {
    fn from(c: Class) -> Self {
        Self {
            id: c.id,
            name: c.name,
            subject: c.subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requires_subject() {
        let result: Result<ClassCreate, _> = serde_json::from_value(json!({ "name": "Algebra I" }));
        assert!(result.is_err());
    }
}
