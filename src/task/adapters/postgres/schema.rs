//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Identifier assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Calendar due date.
        due_date -> Date,
        /// Completion flag.
        completed -> Bool,
    }
}
