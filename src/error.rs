//! ホスト側レイヤーのエラー型
//!
//! 字句分類そのものは失敗しない。エラーはホストの準備段階（ファイルの
//! 読み込み、テーマのロード、アダプタの選択）でのみ発生する。失敗しても
//! 既にロード済みのテーマや分類器の状態はそのまま残る。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HighlightError {
    /// ファイルI/Oエラー
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed theme document
    #[error("invalid theme: {0}")]
    ThemeParse(#[from] serde_json::Error),

    #[error("invalid colour '{value}' for {token}: expected #RRGGBB")]
    InvalidColor { token: String, value: String },

    #[error("unknown token category '{0}' in theme")]
    UnknownCategory(String),

    #[error("unknown editor host '{0}' (expected codemirror or monaco)")]
    UnknownHost(String),
}

pub type HighlightResult<T> = Result<T, HighlightError>;
