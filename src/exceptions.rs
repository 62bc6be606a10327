use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Arithmetic overflow: i32::MIN / -1 does not fit in i32")]
    ArithmeticOverflow,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<CalcError>,
    },

    #[error("{failed} of {total} operations failed")]
    RunFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalcError {
    /// True for the errors raised by the arithmetic itself, as opposed to
    /// input or output problems around it.
    pub fn is_arithmetic(&self) -> bool {
        match self {
            CalcError::DivisionByZero | CalcError::ArithmeticOverflow => true,
            CalcError::Script { source, .. } => source.is_arithmetic(),
            _ => false,
        }
    }

    /// Tags the error with the 1-based script line it came from.
    pub fn at_line(self, line: usize) -> Self {
        CalcError::Script {
            line,
            source: Box::new(self),
        }
    }
}
