//! StorageSlot port - key-value ストレージの抽象化
//!
//! 元の実装はブラウザの localStorage に全件を書いていました。
//! ここでは getItem / setItem に相当する read / write を trait として
//! 切り出し、保存先の詳細を隠蔽します。
//!
//! # 実装
//! - **FileSlot**: ファイルベース（本番用）
//! - **InMemorySlot**: HashMap ベース（テスト用）

use crate::domain::TodoError;

/// StorageSlot は固定キーの下の文字列値を読み書きする
///
/// # テスト容易性
/// - trait によりストレージを差し替え可能
/// - テストでは InMemorySlot を使用
pub trait StorageSlot {
    /// キーの値を読む。キーが存在しなければ None。
    fn read(&self, key: &str) -> Result<Option<String>, TodoError>;

    /// キーの値を上書きする（前の値は残らない）。
    fn write(&self, key: &str, value: &str) -> Result<(), TodoError>;
}
