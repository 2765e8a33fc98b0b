//! Ports - 抽象化レイヤー
//!
//! 外部に依存する関心事（ストレージ、ID 採番）を trait として定義し、
//! 実装の詳細を隠蔽します。具体実装は impls モジュールにあります。

pub mod id_generator;
pub mod slot;

pub use self::id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use self::slot::StorageSlot;
