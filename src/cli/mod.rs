//! Interactive console front end.
//!
//! Gathers the user's name and weekly goal, then drives a [`Tracker`]
//! through the numbered menu. All rules live in the domain and
//! application layers; this module only reads input and prints results.

mod menu;
mod prompt;

pub use menu::{run_menu, MenuAction, BANNER, MENU, NO_SESSIONS, STORE_FULL};
pub use prompt::{
    Prompter, DIFFICULTY_DEFAULTED, DIFFICULTY_PROMPT, INVALID_MENU_CHOICE, POSITIVE_NUMBER_HINT,
};

use std::io::{self, BufRead, Write};

use crate::application::Tracker;
use crate::config::AppConfig;
use crate::ports::ReportStorage;

pub const NAME_PROMPT: &str = "Enter your name: ";
pub const GOAL_PROMPT: &str = "Enter your weekly goal for embroidery hours: ";

/// Values supplied up front instead of being prompted for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupOptions {
    pub name: Option<String>,
    pub goal: Option<f64>,
}

/// Runs one interactive session from banner to goodbye.
///
/// Returns the tracker so callers can inspect what was recorded, or
/// `None` if input ended before the name and goal were known.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: StartupOptions,
    config: &AppConfig,
    storage: &dyn ReportStorage,
) -> io::Result<Option<Tracker>> {
    prompter.say(BANNER)?;

    let name = match options.name {
        Some(name) => name,
        None => match prompter.read_text(NAME_PROMPT, "name")? {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    let goal = match options.goal {
        Some(goal) => goal,
        None => {
            match prompter.read_positive_or(GOAL_PROMPT, "goal", config.recommendation.goal_hours)? {
                Some(goal) => goal,
                None => return Ok(None),
            }
        }
    };

    tracing::info!(user = %name, goal, capacity = config.tracker.capacity, "Tracking session started");

    let mut tracker = Tracker::from_config(name, goal, config);
    run_menu(prompter, &mut tracker, storage)?;
    Ok(Some(tracker))
}
