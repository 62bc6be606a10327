use crate::calculator::{Calculator, SimpleCalculator};
use crate::console::{get_terminal_width, is_stdout_terminal};
use crate::consts::STDIN_PATH;
use crate::exceptions::CalcError;
use crate::historystore::History;
use crate::historystore::store::InMemoryHistory;
use crate::models::{OperationRecord, RunSummary};
use crate::script::parse_line;
use comfy_table::presets::NOTHING;
use comfy_table::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub struct RunOptions {
    pub script: Option<PathBuf>,
    pub keep_going: bool,
    pub show_history: bool,
    pub last: usize,
    pub json: bool,
}

fn read_script(script: Option<&PathBuf>) -> Result<String, CalcError> {
    match script {
        Some(path) if path.as_os_str() != STDIN_PATH => Ok(std::fs::read_to_string(path)?),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

/// Evaluates every step of `source`, recording into `history`.
///
/// Returns the successful records and the number of failed steps. Without
/// `keep_going` the first failure is returned as an error.
pub fn evaluate(
    source: &str,
    history: &mut dyn History,
    keep_going: bool,
) -> Result<(Vec<OperationRecord>, usize), CalcError> {
    let mut calc = SimpleCalculator::new(history);
    let mut records = Vec::new();
    let mut failed = 0;

    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        let outcome = parse_line(line, text).and_then(|step| match step {
            Some(step) => calc
                .apply(step.op, step.lhs, step.rhs)
                .map(|result| {
                    Some(OperationRecord {
                        lhs: step.lhs,
                        op: step.op,
                        rhs: step.rhs,
                        result,
                    })
                })
                .map_err(|e| e.at_line(line)),
            None => Ok(None),
        });

        match outcome {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) if keep_going => {
                eprintln!("Error: {}", e);
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(evaluated = records.len(), failed, "script finished");
    Ok((records, failed))
}

fn history_table(entries: &[String], first_index: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(get_terminal_width() as u16)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new("Record").add_attribute(Attribute::Bold),
    ]);

    for (offset, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(first_index + offset).set_alignment(CellAlignment::Right),
            Cell::new(entry),
        ]);
    }
    table
}

pub fn run(opts: RunOptions) -> Result<(), CalcError> {
    let source = read_script(opts.script.as_ref())?;
    let mut history = InMemoryHistory::new();
    let (records, failed) = evaluate(&source, &mut history, opts.keep_going)?;
    let total = records.len() + failed;
    let recent = history.last_operations(opts.last);

    let mut stdout = std::io::stdout().lock();

    if opts.json {
        let summary = RunSummary {
            evaluated: records.len(),
            failed,
            results: records,
            history: recent,
        };
        if is_stdout_terminal() {
            serde_json::to_writer_pretty(&mut stdout, &summary)?;
        } else {
            serde_json::to_writer(&mut stdout, &summary)?;
        }
        writeln!(stdout)?;
    } else {
        for record in &records {
            writeln!(stdout, "{}", record.result)?;
        }

        if opts.show_history {
            if recent.is_empty() {
                writeln!(stdout, "No operations in history.")?;
            } else {
                let first_index = history.len() - recent.len();
                writeln!(stdout, "{}", history_table(&recent, first_index))?;
            }
        }
    }

    if failed > 0 {
        return Err(CalcError::RunFailed { failed, total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_stops_at_first_failure() {
        let mut history = InMemoryHistory::new();
        let err = evaluate("add 1 2\ndiv 1 0\nadd 3 4\n", &mut history, false).unwrap_err();
        assert!(matches!(err, CalcError::Script { line: 2, .. }));
        assert!(err.is_arithmetic());
        assert_eq!(history.last_operations(10), vec!["1 + 2 = 3"]);
    }

    #[test]
    fn test_evaluate_keep_going_counts_failures() {
        let mut history = InMemoryHistory::new();
        let (records, failed) =
            evaluate("add 1 2\ndiv 1 0\n# note\nmul 3 4\n", &mut history, true).unwrap();
        assert_eq!(failed, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(history.last_operations(10), vec!["1 + 2 = 3", "3 * 4 = 12"]);
    }

    #[test]
    fn test_history_table_lists_entries() {
        let rendered = history_table(&["5 * 2 = 10".to_string()], 2).to_string();
        assert!(rendered.contains("Record"));
        assert!(rendered.contains("5 * 2 = 10"));
    }
}
