//! Element id generation
//!
//! Ids are opaque and only need to be unique within one scene. Generation
//! is passed into the parser instead of being ambient so that parsing can be
//! made deterministic.

use uuid::Uuid;

/// Source of fresh element ids
pub trait IdGenerator {
    /// Produce the next id. Implementations must not repeat themselves.
    fn next_id(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Deterministic ids: `el-1`, `el-2`, ...
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("el")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random UUID v4 ids, used at the JS boundary
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
