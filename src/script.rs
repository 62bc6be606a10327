//! Line-oriented operation scripts: one `<op> <a> <b>` per line.

use crate::consts::COMMENT_PREFIX;
use crate::exceptions::CalcError;
use crate::models::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub op: Operation,
    pub lhs: i32,
    pub rhs: i32,
}

pub fn parse_operand(token: &str) -> Result<i32, CalcError> {
    token.parse::<i32>().map_err(|_| {
        CalcError::InvalidInput(format!(
            "Invalid operand '{}': expected a 32-bit signed integer",
            token
        ))
    })
}

/// Parses one script line. Blank lines and comments yield `None`.
///
/// Errors are tagged with `line` (1-based).
pub fn parse_line(line: usize, text: &str) -> Result<Option<Step>, CalcError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let tokens = shlex::split(trimmed)
        .ok_or_else(|| CalcError::InvalidInput("Unbalanced quotes".into()).at_line(line))?;

    let [op, lhs, rhs] = tokens.as_slice() else {
        return Err(CalcError::InvalidInput(format!(
            "Expected '<op> <a> <b>', found {} token(s)",
            tokens.len()
        ))
        .at_line(line));
    };

    let parse = || -> Result<Step, CalcError> {
        Ok(Step {
            line,
            op: op.parse()?,
            lhs: parse_operand(lhs)?,
            rhs: parse_operand(rhs)?,
        })
    };

    parse().map(Some).map_err(|e| e.at_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   ").unwrap(), None);
        assert_eq!(parse_line(3, "# add 1 2").unwrap(), None);
    }

    #[test]
    fn test_parses_names_symbols_and_negatives() {
        let step = parse_line(4, "  div -7 3 ").unwrap().unwrap();
        assert_eq!(
            step,
            Step {
                line: 4,
                op: Operation::Divide,
                lhs: -7,
                rhs: 3
            }
        );

        let step = parse_line(5, "'*' 2147483647 2").unwrap().unwrap();
        assert_eq!(step.op, Operation::Multiply);
        assert_eq!(step.lhs, i32::MAX);
    }

    #[test]
    fn test_errors_carry_line_number() {
        let err = parse_line(7, "add 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 7: Invalid input: Expected '<op> <a> <b>', found 2 token(s)"
        );

        let err = parse_line(8, "add 1 2147483648").unwrap_err();
        assert!(matches!(err, CalcError::Script { line: 8, .. }));
        assert!(err.to_string().contains("2147483648"));
    }
}
