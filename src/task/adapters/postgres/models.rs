//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
}

/// Insert and update model for task content columns.
///
/// The identifier is never written; inserts take it from the sequence and
/// updates address the row by primary key.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskContentRow<'a> {
    /// Task title.
    pub title: &'a str,
    /// Task description.
    pub description: &'a str,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
}
