//! InMemorySlot - テスト用の StorageSlot
//!
//! # 実装詳細
//! - Arc<Mutex<HashMap>> で値を保持（プロセス終了で消える）
//! - Clone はストレージを共有するので、テストから「外側」の
//!   値を観察できる

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::TodoError;
use crate::ports::StorageSlot;

/// InMemorySlot はテスト・開発用のインメモリ StorageSlot
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for InMemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, TodoError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TodoError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let slot = InMemorySlot::new();
        assert!(slot.read("todos").unwrap().is_none());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let slot = InMemorySlot::new();
        slot.write("todos", "value").unwrap();
        assert_eq!(slot.read("todos").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn clones_share_storage() {
        let slot = InMemorySlot::new();
        let observer = slot.clone();

        slot.write("todos", "shared").unwrap();

        assert_eq!(observer.read("todos").unwrap().as_deref(), Some("shared"));
    }
}
