use std::collections::HashMap;
use std::io;
use std::sync::RwLock;

use super::Storage;

/// In-process map, the stand-in for browser local storage in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("memory storage poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .expect("memory storage poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .write()
            .expect("memory storage poisoned")
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries
            .write()
            .expect("memory storage poisoned")
            .remove(key);
        Ok(())
    }
}
