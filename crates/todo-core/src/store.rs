//! In-memory task store.
//!
//! TaskStore は挿入順のタスク一覧と、その 4 つの変更操作
//! （add / remove / toggle_completed / rename）を持ちます。
//! 永続化はここでは行いません。Session が変更のたびに全量 save します。
//!
//! # 設計原則
//! - 変更操作はエラーを返さない。前提を満たさない呼び出しは no-op
//! - タイトル検証（trim して空なら拒否）だけは None で区別して返し、
//!   呼び出し側が save を省略できるようにする
//! - 保存するタイトルは verbatim（trim は検証にだけ使う）

use crate::domain::{Task, TaskId};
use crate::ports::IdGenerator;

/// 完了 / 未完了の件数（一覧表示用）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub completed: usize,
    pub pending: usize,
}

/// TaskStore は挿入順を保つタスクのコレクション
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// ロード済みのタスク列からストアを作る
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 完了 / 未完了の件数を数える
    pub fn counts(&self) -> TaskCounts {
        let mut counts = TaskCounts::default();
        for task in &self.tasks {
            if task.completed() {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
        }
        counts
    }

    /// 末尾に新規タスクを追加する
    ///
    /// title が trim して空なら None（採番もしない）。
    /// 追加できたら採番した ID を返す。
    pub fn add(&mut self, title: &str, ids: &mut dyn IdGenerator) -> Option<TaskId> {
        if title.trim().is_empty() {
            return None;
        }
        let id = ids.next_id();
        self.tasks.push(Task::new(id, title));
        Some(id)
    }

    /// ID の一致するタスクを削除する。無ければ no-op で false。
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        self.tasks.len() != before
    }

    /// ID の一致するタスクの completed を反転する。無ければ no-op で false。
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// ID の一致するタスクのタイトルを差し替える
    ///
    /// new_title が trim して空なら None（検証で拒否）。
    /// 検証を通れば Some(変更があったか)。ID が無ければ Some(false)。
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> Option<bool> {
        if new_title.trim().is_empty() {
            return None;
        }
        match self.find_mut(id) {
            Some(task) => {
                task.set_title(new_title.to_string());
                Some(true)
            }
            None => Some(false),
        }
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }
}
