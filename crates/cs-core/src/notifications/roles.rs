use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Discussion forum role of a user within a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ForumRole {
    #[serde(rename = "Administrator")]
    Administrator,
    #[serde(rename = "Moderator")]
    Moderator,
    #[serde(rename = "Group Moderator")]
    GroupModerator,
    #[serde(rename = "Community TA")]
    CommunityTa,
    #[serde(rename = "Student")]
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown forum role: {0}")]
pub struct UnknownForumRole(pub String);

impl ForumRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumRole::Administrator => "Administrator",
            ForumRole::Moderator => "Moderator",
            ForumRole::GroupModerator => "Group Moderator",
            ForumRole::CommunityTa => "Community TA",
            ForumRole::Student => "Student",
        }
    }
}

impl Display for ForumRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForumRole {
    type Err = UnknownForumRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrator" => Ok(ForumRole::Administrator),
            "Moderator" => Ok(ForumRole::Moderator),
            "Group Moderator" => Ok(ForumRole::GroupModerator),
            "Community TA" => Ok(ForumRole::CommunityTa),
            "Student" => Ok(ForumRole::Student),
            other => Err(UnknownForumRole(other.to_string())),
        }
    }
}
