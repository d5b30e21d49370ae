/// Store-assigned todo identifier (`todos.id`, a BIGSERIAL).
pub type DbId = i64;

/// Creation and modification times, always UTC and serialized as RFC 3339.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
