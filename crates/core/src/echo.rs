//! Bounded text echo.
//!
//! External text is copied into an owned `String` whose length is checked
//! against the display width *before* any copy happens. Widths count `char`s,
//! so a cut never lands inside a UTF-8 sequence.

use crate::error::EchoError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// デフォルトの表示幅（16要素バッファ - 終端1）
pub const DEFAULT_DISPLAY_WIDTH: usize = 15;

/// 長い入力の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EchoPolicy {
    /// 長さに関係なく全体を表示
    Full,
    /// 先頭 `width` 文字だけを表示
    Truncate { width: usize },
}

impl Default for EchoPolicy {
    fn default() -> Self {
        Self::Truncate {
            width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoConfig {
    pub policy: EchoPolicy,
    /// true の場合、切り詰める代わりにエラーを返す（Truncate のみ有効）
    pub strict: bool,
}

impl EchoConfig {
    pub fn full() -> Self {
        Self {
            policy: EchoPolicy::Full,
            strict: false,
        }
    }

    pub fn truncate(width: usize) -> Self {
        Self {
            policy: EchoPolicy::Truncate { width },
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// エコー結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echoed {
    pub text: String,
    /// 元の入力の文字数
    pub original_length: usize,
    pub truncated: bool,
}

impl Echoed {
    /// 表示用の行
    pub fn line(&self) -> String {
        format!("Input: {}", self.text)
    }
}

/// 外部入力を表示用バッファにコピーする
pub fn echo_input(text: &str, config: &EchoConfig) -> Result<Echoed, EchoError> {
    let original_length = text.chars().count();

    let (visible, truncated) = match config.policy {
        EchoPolicy::Full => (text, false),
        EchoPolicy::Truncate { width } => {
            if original_length > width && config.strict {
                return Err(EchoError::InputTooLong {
                    length: original_length,
                    width,
                });
            }
            bounded_prefix(text, width)
        }
    };

    // 必要な分だけ確保してからコピー
    let mut buffer = String::with_capacity(visible.len());
    buffer.push_str(visible);

    if truncated {
        info!(
            "Truncated input from {} to {} characters",
            original_length,
            buffer.chars().count()
        );
    } else {
        debug!("Echoing {} characters", original_length);
    }

    Ok(Echoed {
        text: buffer,
        original_length,
        truncated,
    })
}

/// 先頭 `width` 文字のスライスと、切り詰めたかどうか
fn bounded_prefix(text: &str, width: usize) -> (&str, bool) {
    match text.char_indices().nth(width) {
        Some((cut, _)) => (&text[..cut], true),
        None => (text, false),
    }
}
