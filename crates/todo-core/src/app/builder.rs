//! SessionBuilder - Session の構築とワイヤリング
//!
//! # 使用例
//! ```ignore
//! let mut session = SessionBuilder::new(FileSlot::new(".todo"))
//!     .corrupt_policy(CorruptPolicy::Fail)
//!     .open()?;
//! session.add("Buy milk")?;
//! ```
//!
//! # 設計原則
//! - load はここで一度だけ実行する。UI からの操作を受け付ける前に
//!   必ずロードが終わっている
//! - ID 採番はロード結果を見てから初期化する（既存 ID の先から）

use crate::app::Session;
use crate::domain::TodoError;
use crate::persistence::{CorruptPolicy, PersistenceAdapter};
use crate::ports::{IdGenerator, SequentialIdGenerator, StorageSlot};
use crate::store::TaskStore;

/// SessionBuilder はスロットとポリシーを選んで Session を作る
pub struct SessionBuilder<S> {
    slot: S,
    corrupt_policy: CorruptPolicy,
}

impl<S: StorageSlot> SessionBuilder<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            corrupt_policy: CorruptPolicy::default(),
        }
    }

    /// 壊れた保存データの扱いを選ぶ（デフォルトは Reset）
    pub fn corrupt_policy(mut self, policy: CorruptPolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    /// load を実行して Session を作る
    ///
    /// ID 採番はロードされたタスクの最大 ID の次から始まるため、
    /// 復元されたタスクと衝突しません。
    pub fn open(self) -> Result<Session<S, SequentialIdGenerator>, TodoError> {
        let adapter = PersistenceAdapter::with_policy(self.slot, self.corrupt_policy);
        let tasks = adapter.load()?;
        let ids = SequentialIdGenerator::starting_after(&tasks);
        Ok(Session::new(TaskStore::from_tasks(tasks), adapter, ids))
    }

    /// 任意の IdGenerator で Session を作る（互換確認・テスト用）
    pub fn open_with_ids<G: IdGenerator>(self, ids: G) -> Result<Session<S, G>, TodoError> {
        let adapter = PersistenceAdapter::with_policy(self.slot, self.corrupt_policy);
        let tasks = adapter.load()?;
        Ok(Session::new(TaskStore::from_tasks(tasks), adapter, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskId, TodoError};
    use crate::impls::InMemorySlot;
    use crate::persistence::SLOT_KEY;
    use crate::ports::RandomIdGenerator;

    #[test]
    fn open_on_empty_slot_starts_empty() {
        let session = SessionBuilder::new(InMemorySlot::new()).open().unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn open_restores_persisted_tasks_in_order() {
        let slot = InMemorySlot::new();
        let adapter = PersistenceAdapter::new(slot.clone());
        let tasks = vec![
            Task::new(TaskId::new(4), "first"),
            Task::new(TaskId::new(2), "second"),
        ];
        adapter.save(&tasks).unwrap();

        let session = SessionBuilder::new(slot).open().unwrap();

        assert_eq!(session.tasks(), tasks.as_slice());
    }

    #[test]
    fn new_ids_do_not_collide_with_restored_tasks() {
        let slot = InMemorySlot::new();
        let adapter = PersistenceAdapter::new(slot.clone());
        adapter
            .save(&[Task::new(TaskId::new(5), "a"), Task::new(TaskId::new(9), "b")])
            .unwrap();

        let mut session = SessionBuilder::new(slot).open().unwrap();
        let id = session.add("c").unwrap().unwrap();

        assert_eq!(id, TaskId::new(10));
    }

    #[test]
    fn corrupt_slot_opens_empty_by_default() {
        let slot = InMemorySlot::new();
        slot.write(SLOT_KEY, "not an array").unwrap();

        let session = SessionBuilder::new(slot).open().unwrap();

        assert!(session.is_empty());
    }

    #[test]
    fn corrupt_slot_fails_to_open_under_fail_policy() {
        let slot = InMemorySlot::new();
        slot.write(SLOT_KEY, "not an array").unwrap();

        let result = SessionBuilder::new(slot)
            .corrupt_policy(CorruptPolicy::Fail)
            .open();

        assert!(matches!(result, Err(TodoError::Parse(_))));
    }

    #[test]
    fn open_with_ids_uses_the_given_generator() {
        let mut session = SessionBuilder::new(InMemorySlot::new())
            .open_with_ids(RandomIdGenerator)
            .unwrap();

        let id = session.add("random id").unwrap().unwrap();
        assert_eq!(session.get(id).unwrap().title(), "random id");
    }
}
