//! Errors - エラー型
//!
//! ユーザー操作そのもの（空タイトル、存在しない ID）はエラーに
//! しません。エラーになるのはストレージ境界だけです。

use thiserror::Error;

/// TodoError は永続化境界で起きるエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// スロットの読み書きに失敗した
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// 保存されていた値が Task の配列としてパースできない
    #[error("malformed task data: {0}")]
    Parse(#[from] serde_json::Error),
}
