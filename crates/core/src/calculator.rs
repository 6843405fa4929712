use crate::arithmetic::{add, multiply};
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// 未対応の演算子に対する診断メッセージ
pub const UNSUPPORTED_OPERATION: &str = "Unsupported operation";

/// 1回分の計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: i32,
    pub rhs: i32,
    pub operator: Operator,
    /// 未対応の演算子の場合は 0
    pub result: i32,
}

impl Calculation {
    /// 演算子をデコードして計算する
    pub fn evaluate(lhs: i32, rhs: i32, symbol: char) -> Self {
        let operator = Operator::from(symbol);
        let result = match operator {
            Operator::Add => add(lhs, rhs),
            Operator::Multiply => multiply(lhs, rhs),
            Operator::Unsupported(c) => {
                warn!("{}: '{}'", UNSUPPORTED_OPERATION, c);
                0
            }
        };

        debug!("Evaluated {} {} {} = {}", lhs, operator, rhs, result);

        Self {
            lhs,
            rhs,
            operator,
            result,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.operator.is_supported()
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs, self.operator, self.rhs, self.result
        )
    }
}

/// 演算子に応じて `add` / `multiply` に振り分ける。未対応なら 0 を返す。
pub fn calculate(a: i32, b: i32, op: char) -> i32 {
    Calculation::evaluate(a, b, op).result
}
