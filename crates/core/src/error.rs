use thiserror::Error;

/// エコー処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EchoError {
    /// strict モードで表示幅を超える入力を拒否した
    #[error("input is {length} characters long, display width is {width}")]
    InputTooLong { length: usize, width: usize },
}
