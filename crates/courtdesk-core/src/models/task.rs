use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum TaskCategory {
    #[serde(rename = "pre_tournament")]
    PreTournament,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "game_day")]
    GameDay,
    #[serde(rename = "post_tournament")]
    PostTournament,
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskCategory::PreTournament => write!(f, "Pre-Tournament"),
            TaskCategory::Daily => write!(f, "Daily"),
            TaskCategory::GameDay => write!(f, "Game Day"),
            TaskCategory::PostTournament => write!(f, "Post-Tournament"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum TaskPriority {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "high")]
    High,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl TaskPriority {
    /// Sort order, most pressing first
    pub fn order(&self) -> u8 {
        match self {
            TaskPriority::Urgent => 0,
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Urgent => write!(f, "Urgent"),
            TaskPriority::High => write!(f, "High"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Task {
    pub id: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    pub category: TaskCategory,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(rename = "dueTime", default)]
    pub due_time: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub notes: String,
}

impl Task {
    /// Working-order sort key: open tasks first, then by priority, then by
    /// due date with undated tasks at the end.
    pub fn sort_key(&self) -> (bool, u8, String) {
        let due = if self.due_date.is_empty() {
            "z".to_string()
        } else {
            self.due_date.clone()
        };
        (self.completed, self.priority.order(), due)
    }

    pub fn is_urgent_open(&self) -> bool {
        !self.completed && self.priority == TaskPriority::Urgent
    }
}

/// Sorts tasks the way the task list shows them.
pub fn sort_operational(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| t.sort_key());
}

#[cfg(test)]
pub(crate) fn test_task(title: &str, priority: TaskPriority, completed: bool) -> Task {
    Task {
        id: format!("task-{}", title.to_lowercase().replace(' ', "-")),
        tournament_id: "abu-dhabi-2026".to_string(),
        category: TaskCategory::Daily,
        title: title.to_string(),
        description: String::new(),
        due_date: String::new(),
        due_time: String::new(),
        completed,
        priority,
        notes: String::new(),
    }
}
