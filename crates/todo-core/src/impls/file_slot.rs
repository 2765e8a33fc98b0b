//! FileSlot - ファイルベースの StorageSlot
//!
//! # 実装詳細
//! - キー `k` をディレクトリ内の `k.json` に対応させる
//! - write はディレクトリを作ってから全量上書き
//! - ファイルが無いことはエラーではなく None

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::TodoError;
use crate::ports::StorageSlot;

/// FileSlot はディレクトリ内のファイルにキーごとの値を保存する
///
/// # 使用例
/// ```ignore
/// let slot = FileSlot::new(".todo");
/// slot.write("todos", "[]")?;
/// let raw = slot.read("todos")?;
/// ```
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, TodoError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TodoError::Storage(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TodoError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
