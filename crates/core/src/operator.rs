use serde::{Deserialize, Serialize};
use std::fmt;

/// 演算子（境界で一度だけデコードする）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Multiply,
    /// 未対応の記号（元の文字を保持）
    Unsupported(char),
}

impl Operator {
    /// 演算子の記号
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
            Self::Unsupported(c) => *c,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<char> for Operator {
    fn from(symbol: char) -> Self {
        match symbol {
            '+' => Self::Add,
            '*' => Self::Multiply,
            other => Self::Unsupported(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
