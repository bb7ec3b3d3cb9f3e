use crate::error::{Result, RoomListError};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The selector label for this difficulty. Independent of any UI locale.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Exact, case-sensitive lookup used by the selector filter.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = RoomListError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RoomListError::InvalidArgument(format!(
                    "Unknown difficulty: {} (expected Easy, Medium or Hard)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// A muted random color, used when a room has no thumbnail image.
    pub fn random_muted() -> Self {
        let mut rng = rand::rng();
        Self {
            r: rng.random_range(77..=204),
            g: rng.random_range(77..=204),
            b: rng.random_range(77..=204),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thumbnail {
    Image(String),
    Color(Rgb),
}

/// Everything needed to create a room. Also the import/export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub player_count: u32,
    #[serde(default = "default_like_rate")]
    pub like_rate: String,
    #[serde(default = "default_play_count")]
    pub play_count: String,
    #[serde(default)]
    pub rating: f32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn default_like_rate() -> String {
    "0%".to_string()
}

fn default_play_count() -> String {
    "0".to_string()
}

impl RoomDraft {
    pub fn new(title: impl Into<String>, creator: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            player_count: 0,
            like_rate: default_like_rate(),
            play_count: default_play_count(),
            rating: 0.0,
            difficulty,
            tags: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn players(mut self, player_count: u32) -> Self {
        self.player_count = player_count;
        self
    }

    pub fn like_rate(mut self, like_rate: impl Into<String>) -> Self {
        self.like_rate = like_rate.into();
        self
    }

    pub fn play_count(mut self, play_count: impl Into<String>) -> Self {
        self.play_count = play_count.into();
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(RoomListError::InvalidArgument(
                "Title cannot be empty".to_string(),
            ));
        }
        if self.creator.trim().is_empty() {
            return Err(RoomListError::InvalidArgument(
                "Creator cannot be empty".to_string(),
            ));
        }
        if !self.rating.is_finite() || self.rating < 0.0 {
            return Err(RoomListError::InvalidArgument(format!(
                "Rating must be a non-negative number, got {}",
                self.rating
            )));
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(RoomListError::InvalidArgument(
                "Tags cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A listed game room. Read-only once created: the query pipeline only
/// selects and reorders references to rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub title: String,
    pub creator: String,
    pub player_count: u32,
    pub like_rate: String,
    pub play_count: String,
    pub rating: f32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub thumbnail: Thumbnail,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(draft: RoomDraft) -> Result<Self> {
        draft.validate()?;
        let thumbnail = match draft.thumbnail {
            Some(image) if !image.trim().is_empty() => Thumbnail::Image(image),
            _ => Thumbnail::Color(Rgb::random_muted()),
        };
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            creator: draft.creator,
            player_count: draft.player_count,
            like_rate: draft.like_rate,
            play_count: draft.play_count,
            rating: draft.rating,
            difficulty: draft.difficulty,
            tags: draft.tags,
            thumbnail,
            created_at: Utc::now(),
        })
    }

    pub fn like_percentage(&self) -> f32 {
        parse_percentage(&self.like_rate)
    }

    pub fn play_count_number(&self) -> u64 {
        parse_play_count(&self.play_count)
    }

    /// Checks the same field rules `Room::new` enforces, for rooms that were
    /// deserialized rather than constructed.
    pub fn validate(&self) -> Result<()> {
        self.to_draft().validate()
    }

    /// Converts back into a draft, dropping identity and the generated color.
    pub fn to_draft(&self) -> RoomDraft {
        RoomDraft {
            title: self.title.clone(),
            creator: self.creator.clone(),
            player_count: self.player_count,
            like_rate: self.like_rate.clone(),
            play_count: self.play_count.clone(),
            rating: self.rating,
            difficulty: self.difficulty,
            tags: self.tags.clone(),
            thumbnail: match &self.thumbnail {
                Thumbnail::Image(image) => Some(image.clone()),
                Thumbnail::Color(_) => None,
            },
        }
    }
}

/// Parses a percentage display string such as `"94%"`. Returns `0.0` when
/// the string is not a finite, non-negative number.
pub fn parse_percentage(s: &str) -> f32 {
    match s.replace('%', "").trim().parse::<f32>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Expands an abbreviated count such as `"2.1M"`, `"850K"` or `"1,234"`.
/// Returns `0` on anything unparseable.
pub fn parse_play_count(s: &str) -> u64 {
    let processed = s.replace(',', "");
    let processed = processed.trim();

    let (number, multiplier) = if let Some(rest) = processed.strip_suffix('M') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = processed.strip_suffix('K') {
        (rest, 1_000.0)
    } else {
        return processed.parse().unwrap_or(0);
    };

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => (value * multiplier).round() as u64,
        _ => 0,
    }
}

/// Sidebar categories of the lobby; each one sets the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    EscapeRoom,
    Adventure,
    Rpg,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::EscapeRoom => "Escape Room Games",
            Category::Adventure => "Adventure Games",
            Category::Rpg => "RPG Games",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Category::EscapeRoom => "Experience thrilling escape room adventures",
            Category::Adventure => "Set off on an exciting journey",
            Category::Rpg => "Explore the world with your own character",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::EscapeRoom => "escape-room",
            Category::Adventure => "adventure",
            Category::Rpg => "rpg",
        }
    }
}

impl FromStr for Category {
    type Err = RoomListError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "escape-room" | "escape" => Ok(Category::EscapeRoom),
            "adventure" => Ok(Category::Adventure),
            "rpg" => Ok(Category::Rpg),
            other => Err(RoomListError::InvalidArgument(format!(
                "Unknown category: {} (expected escape-room, adventure or rpg)",
                other
            ))),
        }
    }
}

/// Formats a credit balance with thousands separators, e.g. `₵ 1,250`.
pub fn format_credits(credits: u64) -> String {
    let digits = credits.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₵ {}", grouped)
}
