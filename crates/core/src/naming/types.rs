use std::fmt;

use serde::{Deserialize, Serialize};

/// Naming convention detected from a filename stem.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Calendar date: `YYYY-MM-DD`, `YYYY.MM.DD` or `MM-DD-YYYY`.
    DailyNote,
    /// ISO-style week: `YYYY-Www`.
    WeeklyNote,
    /// 14-digit Zettelkasten id (`YYYYMMDDHHmmss`).
    Zettelkasten,
    /// 12-digit timestamp (`YYYYMMDDHHmm`).
    Timestamp,
    /// Leading number followed by a separator, e.g. `001 - Title`.
    NumberedPrefix,
    /// Canonical 8-4-4-4-12 hex UUID.
    Uuid,
    /// Anything else, usually a free-form title.
    Standard,
}

impl PatternType {
    /// Every pattern, in classification precedence order.
    pub const ALL: [PatternType; 7] = [
        Self::DailyNote,
        Self::WeeklyNote,
        Self::Zettelkasten,
        Self::Timestamp,
        Self::NumberedPrefix,
        Self::Uuid,
        Self::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyNote => "daily_note",
            Self::WeeklyNote => "weekly_note",
            Self::Zettelkasten => "zettelkasten",
            Self::Timestamp => "timestamp",
            Self::NumberedPrefix => "numbered_prefix",
            Self::Uuid => "uuid",
            Self::Standard => "standard",
        }
    }

    /// Example filename shown in reports for this pattern.
    pub fn display_example(&self) -> &'static str {
        match self {
            Self::DailyNote => "YYYY-MM-DD.md",
            Self::WeeklyNote => "YYYY-Www.md",
            Self::Zettelkasten => "YYYYMMDDHHmmss.md",
            Self::Timestamp => "YYYYMMDDHHmm.md",
            Self::NumberedPrefix => "001 - Title.md",
            Self::Uuid => "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx.md",
            Self::Standard => "[Any title].md",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
