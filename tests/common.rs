use calc::calculator::Calculator;
use calc::exceptions::CalcError;
use calc::historystore::History;
use calc::models::Operation;
use std::cell::RefCell;

/// History that remembers every call made to it.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingHistory {
    pub entries: Vec<String>,
    pub queries: RefCell<Vec<usize>>,
}

impl History for RecordingHistory {
    fn add_entry(&mut self, entry: String) {
        self.entries.push(entry);
    }

    fn last_operations(&self, count: usize) -> Vec<String> {
        self.queries.borrow_mut().push(count);
        let start = self.entries.len().saturating_sub(count);
        self.entries[start..].to_vec()
    }
}

/// Calculator returning a fixed reply and logging the calls it receives.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct StubCalculator {
    pub reply: i32,
    pub calls: Vec<(Operation, i32, i32)>,
}

impl Calculator for StubCalculator {
    fn add(&mut self, a: i32, b: i32) -> i32 {
        self.calls.push((Operation::Add, a, b));
        self.reply
    }

    fn subtract(&mut self, a: i32, b: i32) -> i32 {
        self.calls.push((Operation::Subtract, a, b));
        self.reply
    }

    fn multiply(&mut self, a: i32, b: i32) -> i32 {
        self.calls.push((Operation::Multiply, a, b));
        self.reply
    }

    fn divide(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.calls.push((Operation::Divide, a, b));
        Ok(self.reply)
    }
}

#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
