//! Task record and its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task の識別子
///
/// 永続化フォーマットでは JSON number として保存されるため、
/// u64 の newtype として定義します。作成後に変わることはありません。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task は 1 件の ToDo レコード
///
/// フィールドは永続化フォーマットそのまま（id, title, completed）。
/// 変更は TaskStore 経由でのみ行うため、setter は pub(crate) です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
}

impl Task {
    /// 新規 Task を作成（completed は false から始まる）
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// completed フラグを反転する
    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// title を差し替える（検証は呼び出し側の責務）
    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}
