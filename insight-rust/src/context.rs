use serde::{Deserialize, Serialize};
use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

/// The application area a generation request is about.
///
/// Tags outside the known set are kept as `Other` and get a generic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContextTag {
    Dashboard,
    DashboardHyper,
    People,
    Finance,
    Tasks,
    Habits,
    Diary,
    Vision,
    Other(String),
}

/// Which parts of the data snapshot a context dumps into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSelection {
    /// The listed keys, in this order. Absent keys render as `{}`.
    Keys(&'static [&'static str]),
    /// The whole snapshot.
    All,
}

/// Context instruction and data selection of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBrief {
    pub instruction: Cow<'static, str>,
    pub selection: DataSelection,
}

const DASHBOARD_INSTRUCTION: &str = "Context: Dashboard Overview. Look for correlations between the user's mood and energy (diary entries) and their productivity (task completion and habit consistency). Point out the days or periods where they move together or diverge.";
const PEOPLE_INSTRUCTION: &str = "Context: Relationship Network. Assess the health of the user's relationships: who has not been contacted in a while, which connections are strong, and where attention is overdue.";
const FINANCE_INSTRUCTION: &str = "Context: Finance. Compare actual spending against the budget by category, flag overspending, and identify concrete savings opportunities.";
const TASKS_INSTRUCTION: &str = "Context: Task Management. Prioritize the open tasks by urgency and importance, and call out overdue or neglected items.";
const HABITS_INSTRUCTION: &str = "Context: Habit Tracking. Analyze consistency and streaks across habits, noting which habits are thriving and which are slipping.";
const DIARY_INSTRUCTION: &str = "Context: Diary Reflection. Reflect on the user's emotional wellbeing: recurring moods, triggers, and changes over time.";
const VISION_INSTRUCTION: &str = "Context: Vision & Goals. Connect the user's daily actions to their long-term goals and show where the two are aligned or drifting apart.";

const DASHBOARD_KEYS: &[&str] = &["settings", "diary", "tasks", "habits"];
const PEOPLE_KEYS: &[&str] = &["people"];
const FINANCE_KEYS: &[&str] = &["expenses", "budget"];
const TASKS_KEYS: &[&str] = &["tasks"];
const HABITS_KEYS: &[&str] = &["habits", "habit_logs"];
const DIARY_KEYS: &[&str] = &["diary"];
const VISION_KEYS: &[&str] = &["vision"];

impl ContextTag {
    /// The string form used by callers, e.g. `dashboard_hyper`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dashboard => "dashboard",
            Self::DashboardHyper => "dashboard_hyper",
            Self::People => "people",
            Self::Finance => "finance",
            Self::Tasks => "tasks",
            Self::Habits => "habits",
            Self::Diary => "diary",
            Self::Vision => "vision",
            Self::Other(tag) => tag.as_str(),
        }
    }

    #[must_use]
    pub fn brief(&self) -> ContextBrief {
        let (instruction, keys) = match self {
            Self::Dashboard | Self::DashboardHyper => (DASHBOARD_INSTRUCTION, DASHBOARD_KEYS),
            Self::People => (PEOPLE_INSTRUCTION, PEOPLE_KEYS),
            Self::Finance => (FINANCE_INSTRUCTION, FINANCE_KEYS),
            Self::Tasks => (TASKS_INSTRUCTION, TASKS_KEYS),
            Self::Habits => (HABITS_INSTRUCTION, HABITS_KEYS),
            Self::Diary => (DIARY_INSTRUCTION, DIARY_KEYS),
            Self::Vision => (VISION_INSTRUCTION, VISION_KEYS),
            Self::Other(tag) => {
                return ContextBrief {
                    instruction: Cow::Owned(format!("Context: General Analysis of {tag}")),
                    selection: DataSelection::All,
                }
            }
        };

        ContextBrief {
            instruction: Cow::Borrowed(instruction),
            selection: DataSelection::Keys(keys),
        }
    }
}

impl From<&str> for ContextTag {
    fn from(tag: &str) -> Self {
        match tag {
            "dashboard" => Self::Dashboard,
            "dashboard_hyper" => Self::DashboardHyper,
            "people" => Self::People,
            "finance" => Self::Finance,
            "tasks" => Self::Tasks,
            "habits" => Self::Habits,
            "diary" => Self::Diary,
            "vision" => Self::Vision,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ContextTag {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<ContextTag> for String {
    fn from(tag: ContextTag) -> Self {
        match tag {
            ContextTag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ContextTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
