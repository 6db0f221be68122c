//! Interactive session: one command per line on stdin

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use scholar_quest::config::Config;
use scholar_quest::progression::{Mood, tasks};
use scholar_quest::{ProgressionEngine, ProgressionEvent};

use super::render;
use super::session::open_session;

/// How often timers and the streak are re-checked while idle
const TICK_INTERVAL: Duration = Duration::from_secs(1);

const HELP: &str = "\
Commands:
  task <label>        complete a catalog task (see `tasks`)
  tasks               list the task catalog
  award <xp> <label>  award custom XP
  challenge           complete the daily challenge
  bonus               claim the streak bonus
  mood <mood>         set mood: happy, motivated, neutral, sad
  submit-mood         submit the current mood
  note <text>         set the side quest text
  side-quest          complete the side quest
  start | finish      start / finish a timed task
  dismiss             hide the reward notification
  status | log        show the dashboard / XP log
  help | quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Task(String),
    Tasks,
    Award(u32, String),
    Challenge,
    Bonus,
    Mood(Mood),
    SubmitMood,
    Note(String),
    SideQuest,
    Start,
    Finish,
    Dismiss,
    Status,
    Log,
    Help,
    Quit,
}

/// Parse an input line. Blank lines are `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "task" if !rest.is_empty() => Command::Task(rest.to_string()),
        "task" => return Err("Usage: task <label>".to_string()),
        "tasks" => Command::Tasks,
        "award" => {
            let (amount, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let amount: u32 = amount
                .parse()
                .map_err(|_| format!("Invalid XP amount: {amount:?}"))?;
            let label = if label.trim().is_empty() { "Custom award" } else { label.trim() };
            Command::Award(amount, label.to_string())
        }
        "challenge" => Command::Challenge,
        "bonus" => Command::Bonus,
        "mood" => Command::Mood(rest.parse()?),
        "submit-mood" => Command::SubmitMood,
        "note" => Command::Note(rest.to_string()),
        "side-quest" => Command::SideQuest,
        "start" => Command::Start,
        "finish" => Command::Finish,
        "dismiss" => Command::Dismiss,
        "status" => Command::Status,
        "log" => Command::Log,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command: {other} (type `help`)")),
    };

    Ok(Some(command))
}

/// Apply a command, returning the lines to print
pub fn apply(engine: &mut ProgressionEngine, command: Command) -> Vec<String> {
    let events: Vec<ProgressionEvent> = match command {
        Command::Task(label) => match tasks::find(&label) {
            Some(task) => engine.complete_catalog_task(task),
            None => return vec![format!("Unknown task: {label} (type `tasks`)")],
        },
        Command::Tasks => return super::tasks::catalog_lines(),
        Command::Award(amount, label) => engine.award_xp(amount, &label),
        Command::Challenge => engine.complete_challenge(),
        Command::Bonus => {
            let events = engine.claim_streak_bonus();
            if events.is_empty() {
                return vec!["No streak bonus available yet".to_string()];
            }
            events
        }
        Command::Mood(mood) => {
            engine.set_mood(mood);
            return vec![format!(
                "Mood set to {mood} (+{} XP on submit)",
                engine.pending_mood_xp()
            )];
        }
        Command::SubmitMood => engine.submit_mood(),
        Command::Note(text) => {
            engine.set_side_quest_text(text);
            return Vec::new();
        }
        Command::SideQuest => engine.complete_side_quest(),
        Command::Start => engine.start_task(),
        Command::Finish => engine.complete_task(),
        Command::Dismiss => engine.dismiss_reward_notification(),
        Command::Status => return render::snapshot_lines(&engine.snapshot()),
        Command::Log => {
            return engine
                .xp_log()
                .iter()
                .map(|e| format!("{}  +{:<3} {}", e.timestamp.format("%H:%M:%S"), e.amount, e.label))
                .collect();
        }
        Command::Help => return HELP.lines().map(str::to_string).collect(),
        Command::Quit => return Vec::new(),
    };

    events.iter().map(render::format_event).collect()
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn print_events(events: &[ProgressionEvent]) {
    for event in events {
        println!("{}", render::format_event(event));
    }
}

/// Run an interactive session until `quit` or end of input
pub async fn play_command(config: &Config, seed: Option<u64>) -> Result<()> {
    let (mut engine, events) = open_session(config, seed)?;
    print_events(&events);
    print_lines(&render::snapshot_lines(&engine.snapshot()));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => print_lines(&apply(&mut engine, command)),
                    Ok(None) => {}
                    Err(msg) => println!("{msg}"),
                }
                print_events(&engine.tick());
            }
            _ = ticker.tick() => print_events(&engine.tick()),
        }
    }

    tracing::info!(xp = engine.xp(), level = engine.level(), "Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use scholar_quest::clock::ManualClock;
    use scholar_quest::config::Rules;
    use scholar_quest::store::MemoryStore;

    fn engine() -> ProgressionEngine {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());
        let (engine, _) = ProgressionEngine::start(
            Rules::default(),
            Box::new(clock),
            Box::new(MemoryStore::new()),
            &mut StdRng::seed_from_u64(3),
        );
        engine
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(
            parse_command("task Teaching someone"),
            Ok(Some(Command::Task("Teaching someone".to_string())))
        );
        assert_eq!(
            parse_command("award 40 Essay draft"),
            Ok(Some(Command::Award(40, "Essay draft".to_string())))
        );
        assert_eq!(
            parse_command("award 40"),
            Ok(Some(Command::Award(40, "Custom award".to_string())))
        );
        assert_eq!(parse_command("MOOD happy"), Ok(Some(Command::Mood(Mood::Happy))));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("award -5 nope").is_err());
        assert!(parse_command("mood grumpy").is_err());
        assert!(parse_command("task").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_apply_task_and_unknown_task() {
        let mut engine = engine();
        let out = apply(&mut engine, Command::Task("active recall".to_string()));
        assert_eq!(engine.xp(), 5);
        assert!(out[0].contains("Active recall"));

        let out = apply(&mut engine, Command::Task("skimming".to_string()));
        assert!(out[0].starts_with("Unknown task"));
        assert_eq!(engine.xp(), 5);
    }

    #[test]
    fn test_apply_bonus_without_streak() {
        let mut engine = engine();
        let out = apply(&mut engine, Command::Bonus);
        assert_eq!(out, vec!["No streak bonus available yet".to_string()]);
    }

    #[test]
    fn test_apply_note_then_side_quest() {
        let mut engine = engine();
        apply(&mut engine, Command::Note("Mind map".to_string()));
        let out = apply(&mut engine, Command::SideQuest);
        assert!(out[0].ends_with("Mind map"));
        assert_eq!(engine.snapshot().side_quest_text, "");
        assert_eq!(engine.xp(), 15);
    }
}
