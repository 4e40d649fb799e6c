/// All database primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Timestamps are wall-clock local date-times without an offset, serialized
/// as `YYYY-MM-DDTHH:MM:SS.fffffffff`.
pub type Timestamp = chrono::NaiveDateTime;

/// Current local time as a [`Timestamp`].
pub fn now() -> Timestamp {
    chrono::Local::now().naive_local()
}
