use super::BlobStore;
use crate::error::{NoteError, Result};

/// In-memory blob for testing and development.
/// Does NOT persist data across processes.
#[derive(Debug, Default)]
pub struct MemoryBlob {
    value: Option<String>,
    fail_writes: bool,
}

impl MemoryBlob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `value` already stored, as if written by a prior session.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            fail_writes: false,
        }
    }

    /// When set, every `set` call fails, simulating a full or
    /// write-protected medium.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl BlobStore for MemoryBlob {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn set(&mut self, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(NoteError::Blob("write rejected by medium".to_string()));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::notes::NoteStore;
    use crate::persist::Persist;

    pub struct StoreFixture {
        pub store: NoteStore<MemoryBlob>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::open(Persist::new(MemoryBlob::new())),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let body = format!("Body for note {}", i + 1);
                self.store.create(&title, &body);
            }
            self
        }

        pub fn with_note(mut self, title: &str, body: &str) -> Self {
            self.store.create(title, body);
            self
        }
    }
}
