use anyhow::Result;

/// Document editor target. The cursor is fixed when the sink is created;
/// implementations never re-query it.
pub trait InsertionSink: Send + Sync {
    fn insert_at_cursor(&self, text: &str) -> Result<()>;
}
