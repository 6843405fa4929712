use crate::config::RunConfig;
use anyhow::Result;
use calc_core::{echo_input, Calculation, Echoed, UNSUPPORTED_OPERATION};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, warn};

pub const START_BANNER: &str = "Starting test program...";
pub const COMPLETION_BANNER: &str = "Program completed";
pub const NO_INPUT: &str = "No input provided";

/// strict モードで入力を拒否した場合の終了コード
pub const EXIT_INPUT_REJECTED: u8 = 2;

/// エコーステップの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EchoOutcome {
    Echoed(Echoed),
    NoInput,
    Rejected { reason: String },
}

/// 1回の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub calculations: Vec<Calculation>,
    pub echo: EchoOutcome,
}

impl RunReport {
    pub fn exit_code(&self) -> u8 {
        match self.echo {
            EchoOutcome::Rejected { .. } => EXIT_INPUT_REJECTED,
            _ => 0,
        }
    }
}

/// 計算とエコーを順番に実行する
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// 結果を `out` に書き出し、レポートを返す
    pub fn run<W: Write>(&self, input: Option<&str>, out: &mut W) -> Result<RunReport> {
        let human = self.config.format.is_human();

        if human {
            writeln!(out, "{}", START_BANNER)?;
        }
        info!("Starting run with {} operator(s)", self.config.operators.len());

        let mut calculations = Vec::with_capacity(self.config.operators.len());
        for &symbol in &self.config.operators {
            let calc = Calculation::evaluate(self.config.lhs, self.config.rhs, symbol);
            if human {
                if !calc.is_supported() {
                    writeln!(out, "{}", UNSUPPORTED_OPERATION)?;
                }
                writeln!(out, "{}", calc)?;
            }
            calculations.push(calc);
        }

        let echo = match input {
            Some(text) => match echo_input(text, &self.config.echo) {
                Ok(echoed) => {
                    if human {
                        writeln!(out, "{}", echoed.line())?;
                    }
                    EchoOutcome::Echoed(echoed)
                }
                Err(e) => {
                    warn!("Input rejected: {}", e);
                    if human {
                        writeln!(out, "Input rejected: {}", e)?;
                    }
                    EchoOutcome::Rejected {
                        reason: e.to_string(),
                    }
                }
            },
            None => {
                if human {
                    writeln!(out, "{}", NO_INPUT)?;
                }
                EchoOutcome::NoInput
            }
        };

        if human {
            writeln!(out, "{}", COMPLETION_BANNER)?;
        }

        let report = RunReport { calculations, echo };

        if !human {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }

        info!("Run completed (exit code {})", report.exit_code());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output_format::OutputFormat;
    use calc_core::EchoConfig;

    fn run_to_string(config: RunConfig, input: Option<&str>) -> (RunReport, String) {
        let mut buffer = Vec::new();
        let report = Runner::new(config).run(input, &mut buffer).unwrap();
        (report, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_run_with_input() {
        let (report, output) = run_to_string(RunConfig::default(), Some("hi"));

        assert_eq!(
            output,
            "Starting test program...\n5 + 7 = 12\n5 * 7 = 35\nInput: hi\nProgram completed\n"
        );
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_run_without_input() {
        let (report, output) = run_to_string(RunConfig::default(), None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[3], "No input provided");
        assert!(!output.contains("Input:"));
        assert_eq!(report.echo, EchoOutcome::NoInput);
    }

    #[test]
    fn test_run_truncates_long_input() {
        let input = "z".repeat(1_000);
        let (report, output) = run_to_string(RunConfig::default(), Some(&input));

        assert!(output.contains(&format!("Input: {}\n", "z".repeat(15))));
        match report.echo {
            EchoOutcome::Echoed(echoed) => {
                assert!(echoed.truncated);
                assert_eq!(echoed.original_length, 1_000);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_run_full_policy() {
        let config = RunConfig {
            echo: EchoConfig::full(),
            ..RunConfig::default()
        };
        let input = "q".repeat(1_000);
        let (_, output) = run_to_string(config, Some(&input));

        assert!(output.contains(&format!("Input: {}\n", input)));
    }

    #[test]
    fn test_run_strict_rejects() {
        let config = RunConfig {
            echo: EchoConfig::default().strict(true),
            ..RunConfig::default()
        };
        let (report, output) = run_to_string(config, Some("0123456789abcdef"));

        assert!(output.contains("Input rejected: input is 16 characters long"));
        assert!(output.ends_with("Program completed\n"));
        assert_eq!(report.exit_code(), EXIT_INPUT_REJECTED);
    }

    #[test]
    fn test_run_unsupported_operator() {
        let config = RunConfig {
            operators: vec!['+', '*', '?'],
            ..RunConfig::default()
        };
        let (report, output) = run_to_string(config, None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[3], "Unsupported operation");
        assert_eq!(lines[4], "5 ? 7 = 0");
        assert_eq!(report.calculations[2].result, 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_run_json_format() {
        let config = RunConfig {
            format: OutputFormat::Json,
            ..RunConfig::default()
        };
        let (report, output) = run_to_string(config, Some("hello"));

        assert!(!output.contains(START_BANNER));
        let parsed: RunReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["echo"]["status"], "echoed");
        assert_eq!(value["echo"]["text"], "hello");
        assert_eq!(value["calculations"][1]["result"], 35);
    }
}
