//! Task Status, Priority and Board Columns

use serde::{Deserialize, Serialize};

/// Workflow status; each value is one board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl Status {
    /// All statuses in board order, left to right
    pub const ALL: [Status; 4] = [Status::Todo, Status::InProgress, Status::Review, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Review => "REVIEW",
            Status::Done => "DONE",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority (display grouping only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Order offered by the task composer
    pub const CHOICES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "高优先级",
            Priority::Medium => "中优先级",
            Priority::Low => "低优先级",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A board column: one status plus its heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: Status,
    pub title: &'static str,
}

/// The fixed board layout
pub const COLUMNS: [Column; 4] = [
    Column { status: Status::Todo, title: "待处理" },
    Column { status: Status::InProgress, title: "进行中" },
    Column { status: Status::Review, title: "审核中" },
    Column { status: Status::Done, title: "已完成" },
];

/// Heading of the column holding `status`
pub fn column_title(status: Status) -> &'static str {
    COLUMNS
        .iter()
        .find(|column| column.status == status)
        .map(|column| column.title)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"IN_PROGRESS\"");
        let back: Status = serde_json::from_str("\"REVIEW\"").unwrap();
        assert_eq!(back, Status::Review);
        assert!(serde_json::from_str::<Status>("\"review\"").is_err());
    }

    #[test]
    fn test_columns_follow_status_order() {
        let statuses: Vec<Status> = COLUMNS.iter().map(|c| c.status).collect();
        assert_eq!(statuses, Status::ALL.to_vec());
        assert_eq!(column_title(Status::Done), "已完成");
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::High.label(), "高优先级");
    }
}
