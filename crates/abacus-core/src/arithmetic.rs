use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

pub const MAX_PROBLEMS: usize = 5;
pub const MAX_DIGITS: usize = 4;

/// Spacing between neighbouring problems.
const GAP: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single validated problem such as `32 + 698`.
///
/// Operands keep their original text so leading zeros survive layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    left: String,
    operator: Operator,
    right: String,
}

impl Problem {
    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn answer(&self) -> i64 {
        let (a, b) = (operand_value(&self.left), operand_value(&self.right));
        match self.operator {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
        }
    }

    /// Column width: the longer operand plus room for the operator and a space.
    pub fn width(&self) -> usize {
        self.left.len().max(self.right.len()) + 2
    }
}

impl FromStr for Problem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [left, op, right] = parts.as_slice() else {
            return Err(CoreError::MalformedProblem);
        };

        let operator = match *op {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            _ => return Err(CoreError::UnsupportedOperator),
        };

        if !is_digits(left) || !is_digits(right) {
            return Err(CoreError::NonDigitOperand);
        }
        if left.len() > MAX_DIGITS || right.len() > MAX_DIGITS {
            return Err(CoreError::OperandTooLong);
        }

        Ok(Self {
            left: left.to_string(),
            operator,
            right: right.to_string(),
        })
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn operand_value(s: &str) -> i64 {
    s.bytes().fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
}

/// Validate every problem without laying anything out.
pub fn parse_problems<S: AsRef<str>>(problems: &[S]) -> Result<Vec<Problem>, CoreError> {
    if problems.len() > MAX_PROBLEMS {
        return Err(CoreError::TooManyProblems);
    }
    if problems.is_empty() {
        return Err(CoreError::NoProblems);
    }
    problems.iter().map(|p| p.as_ref().parse()).collect()
}

/// Arrange problems side by side, optionally with a fourth line of answers.
pub fn arrange<S: AsRef<str>>(problems: &[S], show_answers: bool) -> Result<String, CoreError> {
    let parsed = parse_problems(problems)?;

    let mut top = Vec::with_capacity(parsed.len());
    let mut bottom = Vec::with_capacity(parsed.len());
    let mut dashes = Vec::with_capacity(parsed.len());
    let mut answers = Vec::with_capacity(parsed.len());

    for p in &parsed {
        let width = p.width();
        top.push(format!("{:>width$}", p.left));
        bottom.push(format!("{} {:>w$}", p.operator, p.right, w = width - 2));
        dashes.push("-".repeat(width));
        if show_answers {
            answers.push(format!("{:>width$}", p.answer()));
        }
    }

    let mut lines = vec![top.join(GAP), bottom.join(GAP), dashes.join(GAP)];
    if show_answers {
        lines.push(answers.join(GAP));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_problems() {
        let out = arrange(&["32 + 698", "3801 - 2"], false).unwrap();
        assert_eq!(out, "   32      3801\n+ 698    -    2\n-----    ------");
    }

    #[test]
    fn test_four_problems_with_answers() {
        let problems = ["32 + 698", "3801 - 2", "45 + 43", "123 + 49"];
        let out = arrange(&problems, true).unwrap();
        let expected = concat!(
            "   32      3801      45      123\n",
            "+ 698    -    2    + 43    +  49\n",
            "-----    ------    ----    -----\n",
            "  730      3799      88      172"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_negative_answer() {
        let out = arrange(&["1 - 9999"], true).unwrap();
        assert_eq!(out, "     1\n- 9999\n------\n -9998");
    }

    #[test]
    fn test_single_digit_operands() {
        let out = arrange(&["3 + 5"], false).unwrap();
        assert_eq!(out, "  3\n+ 5\n---");
    }

    #[test]
    fn test_too_many_problems() {
        let problems = ["1 + 1"; 6];
        let err = arrange(&problems, false).unwrap_err();
        assert_eq!(err.to_string(), "Error: Too many problems.");
    }

    #[test]
    fn test_empty_list_rejected() {
        let problems: [&str; 0] = [];
        assert!(matches!(
            arrange(&problems, false),
            Err(CoreError::NoProblems)
        ));
    }

    #[test]
    fn test_bad_operator() {
        let err = arrange(&["3 * 855", "3801 - 2"], false).unwrap_err();
        assert_eq!(err.to_string(), "Error: Operator must be '+' or '-'.");
    }

    #[test]
    fn test_non_digit_operand() {
        let err = arrange(&["98 + 3g5"], false).unwrap_err();
        assert_eq!(err.to_string(), "Error: Numbers must only contain digits.");
        // A sign is not a digit.
        assert!(matches!(
            arrange(&["+5 + 3"], false),
            Err(CoreError::NonDigitOperand)
        ));
    }

    #[test]
    fn test_operand_too_long() {
        let err = arrange(&["24 + 85215"], false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Numbers cannot be more than four digits."
        );
    }

    #[test]
    fn test_malformed_problem() {
        assert!(matches!(
            arrange(&["32+698"], false),
            Err(CoreError::MalformedProblem)
        ));
        assert!(matches!(
            arrange(&["1 + 2 + 3"], false),
            Err(CoreError::MalformedProblem)
        ));
    }

    #[test]
    fn test_operator_checked_before_digits() {
        assert!(matches!(
            arrange(&["a / b"], false),
            Err(CoreError::UnsupportedOperator)
        ));
    }

    #[test]
    fn test_leading_zeros_kept() {
        let p: Problem = "0032 + 1".parse().unwrap();
        assert_eq!(p.left(), "0032");
        assert_eq!(p.answer(), 33);
        assert_eq!(p.width(), 6);
    }
}
