//! Session - mutate-then-persist パイプライン
//!
//! Session は TaskStore・PersistenceAdapter・IdGenerator を所有し、
//! すべての変更操作を「store を変更 → 全量 save」の 1 ステップに
//! まとめます。save を各操作の中に重複して書かない代わりに、
//! ここを唯一の通り道にします。
//!
//! # 設計原則
//! - load は SessionBuilder::open の中で一度だけ。Session が
//!   存在する時点でロード済み
//! - 完了した操作の後、メモリ上の状態と永続化された状態が
//!   食い違うことはない
//! - タイトル検証で弾かれた操作だけが save を省略する。ID が
//!   一致しなかった remove / toggle / rename も save はする
//!   （元実装がそうだったため、挙動を揃えている）

use crate::domain::{Task, TaskId, TodoError};
use crate::persistence::PersistenceAdapter;
use crate::ports::{IdGenerator, StorageSlot};
use crate::store::{TaskCounts, TaskStore};

/// Session はロード済みのタスク一覧と、その変更の入口
///
/// 1 セッション = 1 インスタンス。スレッドをまたいで共有する
/// ことは想定していません（変更操作は &mut self）。
pub struct Session<S, G> {
    store: TaskStore,
    adapter: PersistenceAdapter<S>,
    ids: G,
}

impl<S: StorageSlot, G: IdGenerator> Session<S, G> {
    pub(crate) fn new(store: TaskStore, adapter: PersistenceAdapter<S>, ids: G) -> Self {
        Self {
            store,
            adapter,
            ids,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    /// タスクを追加する
    ///
    /// タイトルが trim して空なら何もせず Ok(None)（save もしない）。
    /// 追加できたら save して、採番された ID を返す。
    pub fn add(&mut self, title: &str) -> Result<Option<TaskId>, TodoError> {
        let Some(id) = self.store.add(title, &mut self.ids) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(id))
    }

    /// タスクを削除する。ID が無くても save はする。
    pub fn remove(&mut self, id: TaskId) -> Result<bool, TodoError> {
        let removed = self.store.remove(id);
        self.persist()?;
        Ok(removed)
    }

    /// completed を反転する。ID が無くても save はする。
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, TodoError> {
        let toggled = self.store.toggle_completed(id);
        self.persist()?;
        Ok(toggled)
    }

    /// タイトルを差し替える
    ///
    /// 新タイトルが trim して空なら何もせず Ok(false)（save もしない）。
    /// 検証を通れば save し、実際に変更があったかを返す。
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> Result<bool, TodoError> {
        let Some(renamed) = self.store.rename(id, new_title) else {
            return Ok(false);
        };
        self.persist()?;
        Ok(renamed)
    }

    fn persist(&self) -> Result<(), TodoError> {
        self.adapter.save(self.store.tasks())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::SessionBuilder;
    use crate::impls::InMemorySlot;
    use crate::persistence::SLOT_KEY;
    use crate::ports::StorageSlot;

    #[test]
    fn full_lifecycle_scenario() {
        let slot = InMemorySlot::new();
        let mut session = SessionBuilder::new(slot).open().unwrap();

        // add
        let id = session.add("Buy milk").unwrap().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.get(id).unwrap().title(), "Buy milk");
        assert!(!session.get(id).unwrap().completed());

        // toggle
        assert!(session.toggle_completed(id).unwrap());
        assert!(session.get(id).unwrap().completed());

        // rename は completed を保つ
        assert!(session.rename(id, "Buy oat milk").unwrap());
        assert_eq!(session.get(id).unwrap().title(), "Buy oat milk");
        assert!(session.get(id).unwrap().completed());

        // remove
        assert!(session.remove(id).unwrap());
        assert!(session.is_empty());
    }

    #[test]
    fn state_survives_reopening_the_same_slot() {
        let slot = InMemorySlot::new();

        let id = {
            let mut session = SessionBuilder::new(slot.clone()).open().unwrap();
            let id = session.add("persist me").unwrap().unwrap();
            session.toggle_completed(id).unwrap();
            id
        };

        let session = SessionBuilder::new(slot).open().unwrap();
        assert_eq!(session.len(), 1);
        let task = session.get(id).unwrap();
        assert_eq!(task.title(), "persist me");
        assert!(task.completed());
    }

    #[test]
    fn blank_add_writes_nothing() {
        let slot = InMemorySlot::new();
        let mut session = SessionBuilder::new(slot.clone()).open().unwrap();

        assert!(session.add("   ").unwrap().is_none());

        // 検証で弾かれた操作は save もしない
        assert!(slot.read(SLOT_KEY).unwrap().is_none());
    }

    #[test]
    fn blank_rename_writes_nothing() {
        let slot = InMemorySlot::new();
        let mut session = SessionBuilder::new(slot.clone()).open().unwrap();
        let id = session.add("keep").unwrap().unwrap();
        let before = slot.read(SLOT_KEY).unwrap();

        assert!(!session.rename(id, "").unwrap());

        assert_eq!(session.get(id).unwrap().title(), "keep");
        assert_eq!(slot.read(SLOT_KEY).unwrap(), before);
    }

    #[test]
    fn absent_id_remove_still_persists() {
        let slot = InMemorySlot::new();
        let mut session = SessionBuilder::new(slot.clone()).open().unwrap();

        assert!(!session.remove(999.into()).unwrap());

        // 一覧は変わらないが、空配列が書き出される（元実装と同じ）
        assert_eq!(slot.read(SLOT_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_and_slot_agree_after_every_mutation() {
        let slot = InMemorySlot::new();
        let mut session = SessionBuilder::new(slot.clone()).open().unwrap();

        let id = session.add("a").unwrap().unwrap();
        session.add("b").unwrap().unwrap();
        session.toggle_completed(id).unwrap();
        session.rename(id, "a2").unwrap();

        let raw = slot.read(SLOT_KEY).unwrap().unwrap();
        let persisted: Vec<crate::domain::Task> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, session.tasks());
    }
}
