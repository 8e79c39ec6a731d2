//! Report Parser - Reads fixed-width report text back into values.
//!
//! Column boundaries match [`ReportFormatter`](super::ReportFormatter).
//! A description longer than its column, or one ending in spaces, cannot
//! be recovered exactly because the layout has no delimiter.

use thiserror::Error;

use super::formatter::{COST_WIDTH, DESCRIPTION_WIDTH, HOURS_WIDTH};
use crate::domain::foundation::DifficultyLevel;

const REPORT_TITLE_PREFIX: &str = "Embroidery Report for ";
const GOAL_PREFIX: &str = "Weekly Hour Goal: ";

/// Errors raised while reading report text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportParseError {
    #[error("Line {line}: missing '{expected}' header")]
    MissingHeader { line: usize, expected: &'static str },

    #[error("Line {line}: expected a blank separator line")]
    MissingSeparator { line: usize },

    #[error("Line {line}: row is too short ({length} characters)")]
    ShortRow { line: usize, length: usize },

    #[error("Line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// One data row read back from a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub description: String,
    pub hours: f64,
    pub cost: f64,
    pub difficulty: DifficultyLevel,
}

/// A whole report read back from text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub user_name: String,
    pub weekly_goal: f64,
    pub rows: Vec<ReportRow>,
}

/// Parses fixed-width report rows and documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete report produced by `ReportFormatter::render`.
    pub fn parse_report(&self, text: &str) -> Result<ParsedReport, ReportParseError> {
        let mut lines = text.lines();

        let user_name = lines
            .next()
            .and_then(|line| line.strip_prefix(REPORT_TITLE_PREFIX))
            .ok_or(ReportParseError::MissingHeader {
                line: 1,
                expected: REPORT_TITLE_PREFIX,
            })?
            .to_string();

        let goal_text = lines
            .next()
            .and_then(|line| line.strip_prefix(GOAL_PREFIX))
            .ok_or(ReportParseError::MissingHeader {
                line: 2,
                expected: GOAL_PREFIX,
            })?;
        let weekly_goal = parse_number(goal_text, 2, "goal")?;

        match lines.next() {
            Some("") => {}
            _ => return Err(ReportParseError::MissingSeparator { line: 3 }),
        }

        let rows = lines
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| self.parse_row_at(line, index + 4))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedReport {
            user_name,
            weekly_goal,
            rows,
        })
    }

    /// Parses a single data row.
    pub fn parse_row(&self, line: &str) -> Result<ReportRow, ReportParseError> {
        self.parse_row_at(line, 1)
    }

    fn parse_row_at(&self, line: &str, line_number: usize) -> Result<ReportRow, ReportParseError> {
        let chars: Vec<char> = line.trim_end_matches(['\r', '\n']).chars().collect();
        let hours_start = DESCRIPTION_WIDTH;
        let cost_start = hours_start + HOURS_WIDTH;
        let difficulty_start = cost_start + COST_WIDTH;

        if chars.len() <= difficulty_start {
            return Err(ReportParseError::ShortRow {
                line: line_number,
                length: chars.len(),
            });
        }

        let column = |start: usize, end: usize| -> String {
            chars[start..end.min(chars.len())].iter().collect::<String>()
        };

        let description = column(0, hours_start).trim_end().to_string();
        let hours = parse_number(&column(hours_start, cost_start), line_number, "hours")?;
        let cost = parse_number(&column(cost_start, difficulty_start), line_number, "cost")?;

        let label = column(difficulty_start, chars.len());
        let label = label.trim();
        let difficulty =
            DifficultyLevel::from_label(label).ok_or_else(|| ReportParseError::InvalidValue {
                line: line_number,
                column: "difficulty",
                value: label.to_string(),
            })?;

        Ok(ReportRow {
            description,
            hours,
            cost,
            difficulty,
        })
    }
}

fn parse_number(raw: &str, line: usize, column: &'static str) -> Result<f64, ReportParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ReportParseError::InvalidValue {
            line,
            column,
            value: raw.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ReportFormatter;
    use crate::domain::session::Session;

    #[test]
    fn parse_row_reads_columns() {
        let line = ReportFormatter::new().render_row(&Session::new(
            "Satin stitch",
            2.5,
            12.75,
            DifficultyLevel::Intermediate,
        ));

        let row = ReportParser::new().parse_row(&line).unwrap();

        assert_eq!(row.description, "Satin stitch");
        assert_eq!(row.hours, 2.5);
        assert_eq!(row.cost, 12.75);
        assert_eq!(row.difficulty, DifficultyLevel::Intermediate);
    }

    #[test]
    fn parse_row_keeps_inner_spaces() {
        let line = "Two  words          1.0       1.00      Easy";
        let row = ReportParser::new().parse_row(line).unwrap();
        assert_eq!(row.description, "Two  words");
    }

    #[test]
    fn parse_row_rejects_short_line() {
        let result = ReportParser::new().parse_row("Too short");
        assert_eq!(result, Err(ReportParseError::ShortRow { line: 1, length: 9 }));
    }

    #[test]
    fn parse_row_rejects_unknown_label() {
        let line = "Sampler             1.0       1.00      Expert";
        let result = ReportParser::new().parse_row(line);
        assert!(matches!(
            result,
            Err(ReportParseError::InvalidValue { column: "difficulty", .. })
        ));
    }

    #[test]
    fn parse_row_rejects_bad_number() {
        let line = "Sampler             abc       1.00      Easy";
        let result = ReportParser::new().parse_row(line);
        assert!(matches!(
            result,
            Err(ReportParseError::InvalidValue { column: "hours", .. })
        ));
    }

    #[test]
    fn parse_report_reads_header_and_rows() {
        let text = "Embroidery Report for Ada\nWeekly Hour Goal: 5.0\n\nA                   2.5       10.00     Easy           \n";
        let report = ReportParser::new().parse_report(text).unwrap();

        assert_eq!(report.user_name, "Ada");
        assert_eq!(report.weekly_goal, 5.0);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].description, "A");
    }

    #[test]
    fn parse_report_accepts_empty_body() {
        let report = ReportParser::new()
            .parse_report("Embroidery Report for Ada\nWeekly Hour Goal: 3.5\n\n")
            .unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.weekly_goal, 3.5);
    }

    #[test]
    fn parse_report_requires_title() {
        let result = ReportParser::new().parse_report("Weekly Hour Goal: 5.0\n\n");
        assert!(matches!(
            result,
            Err(ReportParseError::MissingHeader { line: 1, .. })
        ));
    }

    #[test]
    fn parse_report_requires_separator() {
        let result = ReportParser::new()
            .parse_report("Embroidery Report for Ada\nWeekly Hour Goal: 5.0\nnot blank\n");
        assert_eq!(result, Err(ReportParseError::MissingSeparator { line: 3 }));
    }
}
