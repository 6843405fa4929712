use crate::cli::Cli;
use crate::output_format::OutputFormat;
use anyhow::Result;
use calc_core::{EchoConfig, EchoPolicy};

/// 固定オペランド
pub const DEFAULT_LHS: i32 = 5;
pub const DEFAULT_RHS: i32 = 7;

/// 常に評価する演算子
pub const DEFAULT_OPERATORS: [char; 2] = ['+', '*'];

/// 1回の実行の設定
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub lhs: i32,
    pub rhs: i32,
    /// 評価順の演算子
    pub operators: Vec<char>,
    pub echo: EchoConfig,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
            operators: DEFAULT_OPERATORS.to_vec(),
            echo: EchoConfig::default(),
            format: OutputFormat::Human,
        }
    }
}

impl RunConfig {
    /// コマンドライン引数から設定を組み立てる
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let policy = parse_policy(&cli.policy, cli.width)?;
        let format = OutputFormat::from_str(&cli.format)?;

        let mut operators = DEFAULT_OPERATORS.to_vec();
        operators.extend(cli.extra_operators.iter().copied());

        Ok(Self {
            operators,
            echo: EchoConfig {
                policy,
                strict: cli.strict,
            },
            format,
            ..Self::default()
        })
    }
}

/// Parse echo policy: full | truncate
pub fn parse_policy(s: &str, width: usize) -> Result<EchoPolicy> {
    match s.to_lowercase().as_str() {
        "full" | "grow" => Ok(EchoPolicy::Full),
        "truncate" | "trunc" => Ok(EchoPolicy::Truncate { width }),
        _ => anyhow::bail!("Unknown policy: {}. Valid policies: full, truncate", s),
    }
}
