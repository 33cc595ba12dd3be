use crate::schema::students;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

/// Represents a student row in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = students)]
pub struct Student {
    /// Primary key assigned by storage on insert
    pub id: i32,
    /// Sanitized display name
    pub name: String,
    /// Sanitized email address
    pub email: String,
    pub age: i32,
}

/// Values for a student that has not been stored yet
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i32,
}
