//! PersistenceAdapter - TaskStore と StorageSlot の橋渡し
//!
//! 固定キー "todos" の下に、タスク全件を JSON 配列として保存します。
//! 差分更新はなく、変更のたびに全量を上書きします（元実装と同じ）。
//! スキーマバージョンは持たず、フォーマット移行もしません。
//!
//! # 設計原則
//! - serialize / deserialize の間だけタスクを預かる。保持はしない
//! - 壊れた保存データをどう扱うかは CorruptPolicy で選ぶ

use crate::domain::{Task, TodoError};
use crate::ports::StorageSlot;

/// 保存先の固定キー（元実装の localStorage キーと同じ）
pub const SLOT_KEY: &str = "todos";

/// 壊れた保存データをロード時にどう扱うか
///
/// 元実装はパースエラーで起動に失敗していました。デフォルトは
/// 警告を出して空から始める方に倒しています。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptPolicy {
    /// 警告ログを出して空のコレクションから始める（デフォルト）
    #[default]
    Reset,

    /// パースエラーをそのまま返す（元実装の挙動）
    Fail,
}

/// PersistenceAdapter はタスク全件とスロットの間を往復させる
pub struct PersistenceAdapter<S> {
    slot: S,
    corrupt_policy: CorruptPolicy,
}

impl<S: StorageSlot> PersistenceAdapter<S> {
    pub fn new(slot: S) -> Self {
        Self::with_policy(slot, CorruptPolicy::default())
    }

    pub fn with_policy(slot: S, corrupt_policy: CorruptPolicy) -> Self {
        Self {
            slot,
            corrupt_policy,
        }
    }

    /// スロットからタスク全件を復元する
    ///
    /// スロットが空なら空のコレクション。値があるのにパースできない
    /// 場合の挙動は CorruptPolicy に従います。
    pub fn load(&self) -> Result<Vec<Task>, TodoError> {
        let Some(raw) = self.slot.read(SLOT_KEY)? else {
            tracing::debug!("slot is empty, starting with no tasks");
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(e) => match self.corrupt_policy {
                CorruptPolicy::Reset => {
                    tracing::warn!(error = %e, "stored task data is malformed, starting empty");
                    Ok(Vec::new())
                }
                CorruptPolicy::Fail => Err(TodoError::Parse(e)),
            },
        }
    }

    /// タスク全件をスロットに書く（前の値は残らない）
    pub fn save(&self, tasks: &[Task]) -> Result<(), TodoError> {
        let raw = serde_json::to_string(tasks)?;
        tracing::debug!(count = tasks.len(), "saving task list");
        self.slot.write(SLOT_KEY, &raw)
    }
}
