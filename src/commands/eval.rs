use crate::calculator::{Calculator, SimpleCalculator};
use crate::exceptions::CalcError;
use crate::historystore::History;
use crate::historystore::store::InMemoryHistory;
use crate::models::Operation;

pub fn run(op: Operation, lhs: i32, rhs: i32, record: bool) -> Result<(), CalcError> {
    let mut history = InMemoryHistory::new();
    let result = SimpleCalculator::new(&mut history).apply(op, lhs, rhs)?;

    if record {
        for entry in history.last_operations(1) {
            println!("{}", entry);
        }
    } else {
        println!("{}", result);
    }
    Ok(())
}
