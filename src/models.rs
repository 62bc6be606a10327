use crate::exceptions::CalcError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol used when an operation is written into the history.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "subtract" | "-" => Ok(Operation::Subtract),
            "mul" | "multiply" | "*" | "x" => Ok(Operation::Multiply),
            "div" | "divide" | "/" => Ok(Operation::Divide),
            other => Err(CalcError::InvalidInput(format!(
                "Unknown operation '{}'. Expected one of: add, sub, mul, div, +, -, *, /",
                other
            ))),
        }
    }
}

// --- Records ---

/// One evaluated operation. Renders as `"<lhs> <op> <rhs> = <result>"`,
/// which is the text handed to a history sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub lhs: i32,
    pub op: Operation,
    pub rhs: i32,
    pub result: i32,
}

impl std::fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

/// Machine-readable outcome of `calc run --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub evaluated: usize,
    pub failed: usize,
    pub results: Vec<OperationRecord>,
    pub history: Vec<String>,
}
