//! Task and tag types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    /// Low priority.
    Low = 1,
    /// Medium priority.
    #[default]
    Medium = 2,
    /// High priority.
    High = 3,
    /// Critical priority.
    Critical = 4,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Convert a stored numeric value to a priority.
    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }

    /// Numeric value stored in the database.
    pub fn value(&self) -> i64 {
        *self as i64
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("unknown priority: {value}"))
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Newly created.
    #[default]
    New,
    /// Being worked on.
    InProgress,
    /// Waiting to be picked up.
    Pending,
    /// Blocked by something else.
    Blocked,
    /// Under test.
    Testing,
    /// Done.
    Closed,
}

impl TaskStatus {
    /// All statuses.
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::New,
        TaskStatus::InProgress,
        TaskStatus::Pending,
        TaskStatus::Blocked,
        TaskStatus::Testing,
        TaskStatus::Closed,
    ];

    /// Convert status to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "new",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Pending => "pending",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Testing => "testing",
            TaskStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A tag that can be attached to tasks.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tag {
    /// Unique tag ID.
    pub id: i64,
    /// Tag name (unique).
    pub name: String,
}

/// A task belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Priority.
    #[sqlx(try_from = "i64")]
    pub priority: Priority,
    /// Workflow status.
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    /// Owning project ID.
    pub project_id: i64,
    /// Owning project name.
    pub project_name: String,
    /// Deadline (UTC, database format).
    pub deadline: String,
    /// When the task was created.
    pub created_at: String,
    /// When the task was last updated.
    pub updated_at: String,
    /// IDs of attached tags.
    #[sqlx(skip)]
    pub tags: Vec<i64>,
}

/// Data for creating a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Initial status.
    pub status: TaskStatus,
    /// Owning project ID.
    pub project_id: i64,
    /// Tag IDs to attach.
    pub tags: Vec<i64>,
    /// Deadline.
    pub deadline: DateTime<Utc>,
}

impl NewTask {
    /// Create a new task with default priority, status `new` and no tags.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        project_id: i64,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: Priority::default(),
            status: TaskStatus::default(),
            project_id,
            tags: Vec::new(),
            deadline,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<i64>) -> Self {
        self.tags = tags;
        self
    }
}

/// Builder for updating a task.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New owning project.
    pub project_id: Option<i64>,
    /// Replacement tag set.
    pub tags: Option<Vec<i64>>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    /// Create an empty TaskUpdate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status.
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the owning project.
    pub fn project_id(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Replace the tag set.
    pub fn tags(mut self, tags: Vec<i64>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the deadline.
    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Check if any column of the task row changes.
    pub fn has_row_changes(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.status.is_some()
            || self.project_id.is_some()
            || self.deadline.is_some()
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        !self.has_row_changes() && self.tags.is_none()
    }
}
