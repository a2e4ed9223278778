//! Post-it model, color palette and seed defaults.
//!
//! # Responsibility
//! - Define the post-it record and its validation limits.
//! - Keep the eight-color palette in sync with the persisted `bg-*-300`
//!   strings.
//!
//! # Invariants
//! - `title` is non-empty after trimming and at most [`MAX_TITLE_CHARS`].
//! - `subtitle` is at most [`MAX_SUBTITLE_CHARS`].
//! - Collection order is insertion order.

use crate::clock::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MAX_TITLE_CHARS: usize = 30;
pub const MAX_SUBTITLE_CHARS: usize = 60;

/// Validation failure for post-it fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostItValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    SubtitleTooLong { chars: usize },
}

impl Display for PostItValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post-it title cannot be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "post-it title has {chars} characters, maximum is {MAX_TITLE_CHARS}"
            ),
            Self::SubtitleTooLong { chars } => write!(
                f,
                "post-it subtitle has {chars} characters, maximum is {MAX_SUBTITLE_CHARS}"
            ),
        }
    }
}

impl Error for PostItValidationError {}

/// The eight-color palette offered by the post-it screen.
///
/// Serialized as CSS utility-class strings to stay compatible with data
/// persisted by earlier versions of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostItColor {
    #[serde(rename = "bg-yellow-300")]
    Yellow,
    #[serde(rename = "bg-pink-300")]
    Pink,
    #[serde(rename = "bg-blue-300")]
    Blue,
    #[serde(rename = "bg-green-300")]
    Green,
    #[serde(rename = "bg-purple-300")]
    Purple,
    #[serde(rename = "bg-orange-300")]
    Orange,
    #[serde(rename = "bg-red-300")]
    Red,
    #[serde(rename = "bg-indigo-300")]
    Indigo,
}

impl PostItColor {
    pub const ALL: [PostItColor; 8] = [
        PostItColor::Yellow,
        PostItColor::Pink,
        PostItColor::Blue,
        PostItColor::Green,
        PostItColor::Purple,
        PostItColor::Orange,
        PostItColor::Red,
        PostItColor::Indigo,
    ];

    /// The persisted string form of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "bg-yellow-300",
            Self::Pink => "bg-pink-300",
            Self::Blue => "bg-blue-300",
            Self::Green => "bg-green-300",
            Self::Purple => "bg-purple-300",
            Self::Orange => "bg-orange-300",
            Self::Red => "bg-red-300",
            Self::Indigo => "bg-indigo-300",
        }
    }
}

impl Default for PostItColor {
    /// New post-its start yellow, matching the compose modal default.
    fn default() -> Self {
        Self::Yellow
    }
}

/// One sticky note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIt {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub color: PostItColor,
}

impl PostIt {
    /// Creates a validated post-it with a fresh epoch-millisecond id.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        color: PostItColor,
    ) -> Result<Self, PostItValidationError> {
        let postit = Self {
            id: now_epoch_ms(),
            title: title.into(),
            subtitle: subtitle.into(),
            color,
        };
        postit.validate()?;
        Ok(postit)
    }

    /// Checks field limits without mutating.
    pub fn validate(&self) -> Result<(), PostItValidationError> {
        if self.title.trim().is_empty() {
            return Err(PostItValidationError::EmptyTitle);
        }
        let title_chars = self.title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(PostItValidationError::TitleTooLong { chars: title_chars });
        }
        let subtitle_chars = self.subtitle.chars().count();
        if subtitle_chars > MAX_SUBTITLE_CHARS {
            return Err(PostItValidationError::SubtitleTooLong {
                chars: subtitle_chars,
            });
        }
        Ok(())
    }
}

/// Seed defaults returned before the user has persisted any post-its.
pub fn seed_postits() -> Vec<PostIt> {
    fn postit(id: i64, title: &str, subtitle: &str, color: PostItColor) -> PostIt {
        PostIt {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            color,
        }
    }

    vec![
        postit(1, "Reunião", "Equipe às 14h", PostItColor::Yellow),
        postit(2, "Compras", "Supermercado", PostItColor::Pink),
        postit(3, "Estudar", "React Native", PostItColor::Blue),
        postit(4, "Exercício", "Academia 18h", PostItColor::Green),
    ]
}
