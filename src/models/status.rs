/// Lifecycle of a task, always derived from `done` and `actual_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    /// Human label, also used as the spreadsheet `Status` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Parse a label, ignoring case and surrounding blanks.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "not started" => Some(Status::NotStarted),
            "in progress" => Some(Status::InProgress),
            "done" => Some(Status::Done),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::NotStarted | Status::InProgress)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
