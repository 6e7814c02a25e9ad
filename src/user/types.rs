//! User model for ProjectHub.

use std::fmt;
use std::str::FromStr;

/// Job position of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Chief executive officer.
    Ceo,
    /// Chief technology officer.
    Cto,
    /// Programmer.
    Programmer,
    /// Designer.
    Designer,
    /// Quality assurance.
    Qa,
    /// Project manager.
    ProjectManager,
    /// Product owner.
    ProductOwner,
}

impl Position {
    /// All positions.
    pub const ALL: [Position; 7] = [
        Position::Ceo,
        Position::Cto,
        Position::Programmer,
        Position::Designer,
        Position::Qa,
        Position::ProjectManager,
        Position::ProductOwner,
    ];

    /// Convert position to its stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Ceo => "CEO",
            Position::Cto => "CTO",
            Position::Programmer => "PROGRAMMER",
            Position::Designer => "DESIGNER",
            Position::Qa => "QA",
            Position::ProjectManager => "PROJECT_MANAGER",
            Position::ProductOwner => "PRODUCT_OWNER",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown position: {s}"))
    }
}

impl TryFrom<String> for Position {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address (unique).
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Job position.
    #[sqlx(try_from = "String")]
    pub position: Position,
    /// Assigned project (optional).
    pub project_id: Option<i64>,
    /// Password hash (Argon2).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Job position.
    pub position: Position,
    /// Assigned project.
    pub project_id: Option<i64>,
    /// Password hash (already hashed).
    pub password: String,
}

impl NewUser {
    /// Create a new user without phone or project.
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        position: Position,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            position,
            project_id: None,
            password: password_hash.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the assigned project.
    pub fn with_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }
}
