//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use super::prompt::Prompter;
use crate::application::Tracker;
use crate::domain::session::Session;
use crate::ports::ReportStorage;

pub const BANNER: &str = "=========================\n    Embroidery Tracker   \n=========================\n\n";

pub const MENU: &str = "\nMenu:\n\
1. Add embroidery session.\n\
2. View Sessions\n\
3. Get recommendation\n\
4. Save report\n\
5. Quit\n\
Enter your choice: ";

pub const STORE_FULL: &str = "You have reached the maximum number of sessions.";
pub const NO_SESSIONS: &str = "No embroidery sessions recorded yet.";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddSession,
    ViewSessions,
    Recommend,
    SaveReport,
    Quit,
}

impl MenuAction {
    /// Maps a typed number to an action; `None` outside 1-5.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuAction::AddSession),
            2 => Some(MenuAction::ViewSessions),
            3 => Some(MenuAction::Recommend),
            4 => Some(MenuAction::SaveReport),
            5 => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Runs the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tracker: &mut Tracker,
    storage: &dyn ReportStorage,
) -> io::Result<()> {
    loop {
        prompter.say(MENU)?;
        let Some(choice) = prompter.read_menu_choice()? else {
            tracing::debug!("Input closed at menu");
            break;
        };

        let Some(action) = MenuAction::from_choice(choice) else {
            tracing::debug!(choice, "Ignoring out-of-range menu choice");
            continue;
        };

        let flow = match action {
            MenuAction::AddSession => add_session(prompter, tracker)?,
            MenuAction::ViewSessions => view_sessions(prompter, tracker)?,
            MenuAction::Recommend => recommend(prompter, tracker)?,
            MenuAction::SaveReport => save_report(prompter, tracker, storage)?,
            MenuAction::Quit => Flow::Stop,
        };
        if flow == Flow::Stop {
            break;
        }
    }

    prompter.say_line(&format!("Goodbye, {}!", tracker.user_name()))
}

fn add_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tracker: &mut Tracker,
) -> io::Result<Flow> {
    if tracker.is_full() {
        prompter.say_line(STORE_FULL)?;
        return Ok(Flow::Continue);
    }

    let Some(description) = prompter.read_text("Session description : ", "description")? else {
        return Ok(Flow::Stop);
    };
    let Some(hours) = prompter.read_positive("Hours spent: ", "hours")? else {
        return Ok(Flow::Stop);
    };
    let Some(cost) = prompter.read_positive("Thread cost: ", "cost")? else {
        return Ok(Flow::Stop);
    };
    let Some(difficulty) = prompter.read_difficulty()? else {
        return Ok(Flow::Stop);
    };

    if let Err(err) = tracker.add_session(Session::new(description, hours, cost, difficulty)) {
        prompter.say_line(&err.to_string())?;
    }
    Ok(Flow::Continue)
}

fn view_sessions<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tracker: &Tracker,
) -> io::Result<Flow> {
    match tracker.listing() {
        Some(listing) => prompter.say(&listing)?,
        None => prompter.say_line(NO_SESSIONS)?,
    }
    Ok(Flow::Continue)
}

fn recommend<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tracker: &Tracker,
) -> io::Result<Flow> {
    let recommendation = tracker.recommendation();
    prompter.say(&format!("\nRecommendation for {}:\n", tracker.user_name()))?;
    prompter.say_line(recommendation.message())?;
    Ok(Flow::Continue)
}

fn save_report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tracker: &Tracker,
    storage: &dyn ReportStorage,
) -> io::Result<Flow> {
    match tracker.save_report(storage) {
        Ok(saved) => prompter.say_line(&format!("Report saved to {}", saved.location))?,
        Err(err) => prompter.say_line(&err.to_string())?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryReportStorage;
    use crate::config::AppConfig;
    use std::io::Cursor;

    fn run(input: &str, tracker: &mut Tracker, storage: &InMemoryReportStorage) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_menu(&mut prompter, tracker, storage).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn tracker() -> Tracker {
        Tracker::from_config("Ada", 5.0, &AppConfig::default())
    }

    #[test]
    fn menu_choices_map_to_actions() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::AddSession));
        assert_eq!(MenuAction::from_choice(5), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_choice(0), None);
        assert_eq!(MenuAction::from_choice(6), None);
    }

    #[test]
    fn quit_says_goodbye() {
        let mut tracker = tracker();
        let out = run("5\n", &mut tracker, &InMemoryReportStorage::new());
        assert!(out.starts_with(MENU));
        assert!(out.ends_with("Goodbye, Ada!\n"));
    }

    #[test]
    fn end_of_input_acts_like_quit() {
        let mut tracker = tracker();
        let out = run("", &mut tracker, &InMemoryReportStorage::new());
        assert!(out.ends_with("Goodbye, Ada!\n"));
    }

    #[test]
    fn view_on_empty_store_says_nothing_recorded() {
        let mut tracker = tracker();
        let out = run("2\n5\n", &mut tracker, &InMemoryReportStorage::new());
        assert!(out.contains(NO_SESSIONS));
    }

    #[test]
    fn out_of_range_choice_redisplays_menu() {
        let mut tracker = tracker();
        let out = run("9\n5\n", &mut tracker, &InMemoryReportStorage::new());
        assert_eq!(out.matches(MENU).count(), 2);
    }

    #[test]
    fn add_then_view_lists_session() {
        let mut tracker = tracker();
        let out = run(
            "1\nRose border\n2.5\n10\n1\n2\n5\n",
            &mut tracker,
            &InMemoryReportStorage::new(),
        );

        assert_eq!(tracker.session_count(), 1);
        assert!(out.contains("\nAda's Embroidery Sessions\n"));
        assert!(out.contains("Rose border         2.5       10.00     Easy"));
    }

    #[test]
    fn add_when_full_skips_prompts() {
        let mut config = AppConfig::default();
        config.tracker.capacity = 1;
        let mut tracker = Tracker::from_config("Ada", 5.0, &config);

        let out = run(
            "1\nA\n1\n1\n1\n1\n5\n",
            &mut tracker,
            &InMemoryReportStorage::new(),
        );

        assert_eq!(tracker.session_count(), 1);
        assert!(out.contains(STORE_FULL));
        assert_eq!(out.matches("Session description : ").count(), 1);
    }

    #[test]
    fn recommendation_is_printed_with_name() {
        let mut tracker = tracker();
        let out = run("1\nA\n6\n20\n2\n3\n5\n", &mut tracker, &InMemoryReportStorage::new());
        assert!(out.contains(
            "\nRecommendation for Ada:\nGreat job! You met your weekly goal AND stayed on budget.\n"
        ));
    }

    #[test]
    fn save_writes_report_and_confirms() {
        let mut tracker = tracker();
        let storage = InMemoryReportStorage::new();
        let out = run("1\nA\n2\n3\n3\n4\n5\n", &mut tracker, &storage);

        assert_eq!(storage.write_count(), 1);
        assert!(out.contains("Report saved to memory://report\n"));
        let report = storage.content().unwrap();
        assert!(report.starts_with("Embroidery Report for Ada\nWeekly Hour Goal: 5.0\n\n"));
        assert!(report.contains("A                   2.0       3.00      Hard"));
    }

    #[test]
    fn end_of_input_mid_capture_stops_without_adding() {
        let mut tracker = tracker();
        let out = run("1\nRose\n2\n", &mut tracker, &InMemoryReportStorage::new());
        assert_eq!(tracker.session_count(), 0);
        assert!(out.ends_with("Goodbye, Ada!\n"));
    }
}
