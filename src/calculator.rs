use crate::exceptions::CalcError;
use crate::historystore::History;
use crate::models::{Operation, OperationRecord};
use tracing::{debug, warn};

/// Four-function integer calculator.
///
/// `add`, `subtract` and `multiply` wrap on overflow and never fail.
/// `divide` rejects a zero divisor and `i32::MIN / -1`.
pub trait Calculator {
    fn add(&mut self, a: i32, b: i32) -> i32;
    fn subtract(&mut self, a: i32, b: i32) -> i32;
    fn multiply(&mut self, a: i32, b: i32) -> i32;
    fn divide(&mut self, a: i32, b: i32) -> Result<i32, CalcError>;

    /// Dispatches to the method matching `op`.
    fn apply(&mut self, op: Operation, a: i32, b: i32) -> Result<i32, CalcError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}

/// Calculator that writes one record per successful operation into the
/// history sink it currently holds.
pub struct SimpleCalculator<'h> {
    history: &'h mut dyn History,
}

impl<'h> SimpleCalculator<'h> {
    pub fn new(history: &'h mut dyn History) -> Self {
        Self { history }
    }

    /// Routes subsequent records to `history` and returns the sink that was
    /// in use until now.
    pub fn set_history(&mut self, history: &'h mut dyn History) -> &'h mut dyn History {
        debug!("history sink replaced");
        std::mem::replace(&mut self.history, history)
    }

    pub fn history(&self) -> &dyn History {
        &*self.history
    }

    fn log_operation(&mut self, lhs: i32, op: Operation, rhs: i32, result: i32) -> i32 {
        let record = OperationRecord {
            lhs,
            op,
            rhs,
            result,
        };
        debug!(op = op.name(), lhs, rhs, result, "evaluated");
        self.history.add_entry(record.to_string());
        result
    }
}

impl Calculator for SimpleCalculator<'_> {
    fn add(&mut self, a: i32, b: i32) -> i32 {
        self.log_operation(a, Operation::Add, b, a.wrapping_add(b))
    }

    fn subtract(&mut self, a: i32, b: i32) -> i32 {
        self.log_operation(a, Operation::Subtract, b, a.wrapping_sub(b))
    }

    fn multiply(&mut self, a: i32, b: i32) -> i32 {
        self.log_operation(a, Operation::Multiply, b, a.wrapping_mul(b))
    }

    fn divide(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        if b == 0 {
            warn!(lhs = a, "division by zero rejected");
            return Err(CalcError::DivisionByZero);
        }

        if a == i32::MIN && b == -1 {
            warn!(lhs = a, rhs = b, "overflowing division rejected");
            return Err(CalcError::ArithmeticOverflow);
        }

        // Rust's `/` on integers truncates toward zero.
        Ok(self.log_operation(a, Operation::Divide, b, a / b))
    }
}
