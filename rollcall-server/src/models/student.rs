//! Student payloads

use serde::{Deserialize, Serialize};

use crate::db::repos::Student;

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// `middle_name` may be omitted or `null`; every other field is required
/// and must have the right JSON type. Values are not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub age: i64,
    pub city: String,
}

/// Student as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub age: i64,
    pub city: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            middle_name: s.middle_name,
            age: s.age,
            city: s.city,
        }
    }
}
