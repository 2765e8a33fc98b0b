//! IdGenerator port - ID 採番の抽象化
//!
//! 元の実装は乱数で ID を採番していて、衝突チェックがありませんでした。
//! 衝突すると toggle / rename / remove が別のレコードに当たり得ます。
//! ここでは採番を trait として切り出し、デフォルトを単調増加カウンタに
//! 置き換えて衝突をなくします。
//!
//! # 実装
//! - **SequentialIdGenerator**: 単調増加カウンタ（デフォルト）
//! - **RandomIdGenerator**: 乱数採番（元実装の挙動、互換確認用）

use crate::domain::{Task, TaskId};

/// IdGenerator は新規 Task の ID を採番する
pub trait IdGenerator {
    /// 次の ID を返す
    fn next_id(&mut self) -> TaskId;
}

/// SequentialIdGenerator は単調増加カウンタで ID を採番
///
/// ロード時に既存 ID の最大値の次から始めることで、復元された
/// タスクと衝突しないことを保証します。採番した ID は永続化される
/// ため、同じストレージを再び開いてもカウンタは巻き戻りません。
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// 既存タスクのどの ID よりも先から採番を始める
    pub fn starting_after(tasks: &[Task]) -> Self {
        let max = tasks.iter().map(|t| t.id().as_u64()).max().unwrap_or(0);
        Self { next: max + 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next += 1;
        id
    }
}

/// RandomIdGenerator は乱数で ID を採番（元実装の挙動）
///
/// 一意性の保証はありません。互換性の確認のためにだけ残しています。
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(rand::random())
    }
}
