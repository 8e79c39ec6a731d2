//! Report Formatter - Fixed-width text rendering of sessions.
//!
//! # Layout
//!
//! ```text
//! Embroidery Report for Ada
//! Weekly Hour Goal: 5.0
//!
//! Rose border         2.5       10.00     Easy
//! Monogram            3.5       20.00     Hard
//! ```
//!
//! Columns are left-aligned and padded to 20, 10, 10 and 15 characters.
//! Values wider than their column are written in full, never truncated.

use crate::domain::session::Session;

/// Width of the description column.
pub const DESCRIPTION_WIDTH: usize = 20;
/// Width of the hours column.
pub const HOURS_WIDTH: usize = 10;
/// Width of the cost column.
pub const COST_WIDTH: usize = 10;
/// Width of the difficulty column.
pub const DIFFICULTY_WIDTH: usize = 15;

/// Column titles used by the interactive listing.
pub const COLUMN_TITLES: [&str; 4] = ["Description", "Hours", "Cost", "Difficulty"];

/// Renders sessions as fixed-width text.
///
/// Hours always show one decimal place and cost two, in every view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the persisted report.
    ///
    /// The report has a title line, the goal line, a blank line, then one
    /// row per session. It carries no column header row.
    pub fn render(&self, sessions: &[Session], user_name: &str, weekly_goal: f64) -> String {
        let mut report = String::new();
        report.push_str(&format!("Embroidery Report for {}\n", user_name));
        report.push_str(&format!("Weekly Hour Goal: {:.1}\n\n", weekly_goal));
        for session in sessions {
            report.push_str(&self.render_row(session));
        }
        report
    }

    /// Renders the interactive session listing, with column headers.
    pub fn render_listing(&self, sessions: &[Session], user_name: &str) -> String {
        let mut listing = format!("\n{}'s Embroidery Sessions\n", user_name);
        listing.push_str(&self.render_header());
        for session in sessions {
            listing.push_str(&self.render_row(session));
        }
        listing
    }

    /// Renders the column header row.
    pub fn render_header(&self) -> String {
        let [description, hours, cost, difficulty] = COLUMN_TITLES;
        format!(
            "{:<dw$}{:<hw$}{:<cw$}{:<fw$}\n",
            description,
            hours,
            cost,
            difficulty,
            dw = DESCRIPTION_WIDTH,
            hw = HOURS_WIDTH,
            cw = COST_WIDTH,
            fw = DIFFICULTY_WIDTH,
        )
    }

    /// Renders one session as a fixed-width row.
    pub fn render_row(&self, session: &Session) -> String {
        format!(
            "{:<dw$}{:<hw$.1}{:<cw$.2}{:<fw$}\n",
            session.description(),
            session.hours(),
            session.cost(),
            session.difficulty().label(),
            dw = DESCRIPTION_WIDTH,
            hw = HOURS_WIDTH,
            cw = COST_WIDTH,
            fw = DIFFICULTY_WIDTH,
        )
    }
}
