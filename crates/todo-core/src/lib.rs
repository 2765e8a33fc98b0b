//! todo-core
//!
//! Core building blocks for a single-user task list.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Task, TaskId, TodoError）
//! - **ports**: 抽象化レイヤー（StorageSlot, IdGenerator）
//! - **impls**: ポートの実装（FileSlot, InMemorySlot）
//! - **store**: インメモリの TaskStore（挿入順・4 つの変更操作）
//! - **persistence**: PersistenceAdapter（固定キー "todos" への全量保存）
//! - **app**: アプリケーションロジック（SessionBuilder, Session の
//!   mutate-then-persist パイプライン）
//!
//! # 制御フロー
//! 起動時に SessionBuilder::open が一度だけ load し、以後は
//! Session の変更操作が「store を変更 → 全量 save」を繰り返します。

pub mod app;
pub mod domain;
pub mod impls;
pub mod persistence;
pub mod ports;
pub mod store;
