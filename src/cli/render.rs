//! Plain-text rendering of events and snapshots

use scholar_quest::progression::TaskOutcome;
use scholar_quest::{ProgressionEvent, Snapshot};

/// Width of the text progress bar
const BAR_WIDTH: usize = 20;

pub fn format_event(event: &ProgressionEvent) -> String {
    match event {
        ProgressionEvent::XpAwarded {
            amount,
            label,
            total,
        } => format!("+{amount} XP  {label}  (total {total})"),
        ProgressionEvent::LevelUp { level } => format!("⬆️  Level up! You are now level {level}"),
        ProgressionEvent::RewardNotification { milestone } => {
            format!("🎉 Reward unlocked: {milestone} XP reached!")
        }
        ProgressionEvent::RewardNotificationCleared => "(reward notification dismissed)".to_string(),
        ProgressionEvent::BadgeUnlocked(badge) => {
            let def = badge.definition();
            format!("{} Badge unlocked: {} - {}", def.icon, badge.name(), def.description)
        }
        ProgressionEvent::StreakExtended { days } => format!("🔥 Streak extended: {days} days"),
        ProgressionEvent::StreakReset => "Streak reset to 1 day".to_string(),
        ProgressionEvent::StreakBonusAvailable { xp } => {
            format!("Streak bonus available: +{xp} XP (type `bonus`)")
        }
        ProgressionEvent::ChallengeCompleted { challenge } => {
            format!("✅ Challenge completed: {challenge}")
        }
        ProgressionEvent::TaskStarted { replaced: false } => "⏱️  Task timer started".to_string(),
        ProgressionEvent::TaskStarted { replaced: true } => {
            "⏱️  Task timer restarted (previous start discarded)".to_string()
        }
        ProgressionEvent::TaskCompleted { outcome } => match outcome {
            TaskOutcome::Quick(elapsed) => {
                format!("Task finished in {} min, quick bonus!", elapsed.num_minutes())
            }
            TaskOutcome::Slow(elapsed) => {
                format!("Task finished in {} min, no quick bonus", elapsed.num_minutes())
            }
            TaskOutcome::ClockSkew => "Task finished before it started, no bonus".to_string(),
            TaskOutcome::NotStarted => "No task was running".to_string(),
        },
        ProgressionEvent::SideQuestCompleted { count, text } if text.is_empty() => {
            format!("🗺️  Side quest #{count} completed")
        }
        ProgressionEvent::SideQuestCompleted { count, text } => {
            format!("🗺️  Side quest #{count} completed: {text}")
        }
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).floor() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Dashboard lines for a snapshot
pub fn snapshot_lines(snapshot: &Snapshot) -> Vec<String> {
    let day_word = if snapshot.streak_days == 1 { "day" } else { "days" };
    let mut lines = vec![
        "Scholar Quest XP".to_string(),
        format!("XP: {}", snapshot.xp),
        format!("Level: {}", snapshot.level),
        format!(
            "{} {:.0}%  ({} XP to next level)",
            progress_bar(snapshot.progress_percent),
            snapshot.progress_percent,
            snapshot.xp_to_next_level
        ),
        format!("Daily Streak: {} {day_word}", snapshot.streak_days),
        format!("Daily Challenge: {}", snapshot.daily_challenge),
    ];

    if snapshot.streak_bonus_available > 0 {
        lines.push(format!(
            "Streak bonus: +{} XP available",
            snapshot.streak_bonus_available
        ));
    }

    if snapshot.badges.is_empty() {
        lines.push("Badges: none yet".to_string());
    } else {
        let names: Vec<_> = snapshot.badges.iter().map(|b| b.name()).collect();
        lines.push(format!("Badges: {}", names.join(", ")));
    }

    if let Some(mood) = snapshot.mood {
        lines.push(format!("Mood: {mood} (+{} XP on submit)", snapshot.pending_mood_xp));
    }
    if !snapshot.side_quest_text.is_empty() {
        lines.push(format!("Side quest: {}", snapshot.side_quest_text));
    }
    if snapshot.side_quest_count > 0 {
        lines.push(format!("Side quests completed: {}", snapshot.side_quest_count));
    }
    if let Some(started) = snapshot.task_started_at {
        lines.push(format!("Task running since {}", started.format("%H:%M:%S")));
    }
    if snapshot.reward_notification_active {
        lines.push("🎉 Reward!".to_string());
    }
    lines
}
