use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub platform: String,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Launch,
    Engagement,
    Promotion,
    Contest,
    General,
}

impl ContentType {
    /// Template store key for this content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Engagement => "engagement",
            Self::Promotion => "promotion",
            Self::Contest => "contest",
            Self::General => "general",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Launch => "🚀 Product Launch Ideas",
            Self::Engagement => "💬 Engagement Content Ideas",
            Self::Promotion => "🔥 Promotional Content Ideas",
            Self::Contest => "🎁 Contest & Giveaway Ideas",
            Self::General => "✨ Content Ideas",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
