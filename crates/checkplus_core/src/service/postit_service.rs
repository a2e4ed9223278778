//! Post-it entity store.
//!
//! # Responsibility
//! - Load, add, patch and delete sticky notes for the active user.
//! - Persist the whole `postits` collection on every change.
//!
//! # Invariants
//! - The seed default is returned, not persisted, until the first mutation.
//! - Collection order is insertion order; updates never reorder.

use crate::model::postit::{seed_postits, PostIt, PostItColor, PostItValidationError};
use crate::repo::kv_repo::{KvStore, StoreError, StoreResult};
use crate::session::manager::SessionManager;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Logical storage key for the post-it collection.
pub const POSTITS_KEY: &str = "postits";

/// Failure modes for post-it mutations.
#[derive(Debug)]
pub enum PostItError {
    Validation(PostItValidationError),
    Store(StoreError),
}

impl Display for PostItError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PostItError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<PostItValidationError> for PostItError {
    fn from(value: PostItValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for PostItError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Partial update applied to an existing post-it; `None` fields keep the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct PostItPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub color: Option<PostItColor>,
}

/// Whole-collection CRUD over the user's sticky notes.
pub struct PostItService<'a, S: KvStore> {
    session: &'a SessionManager<S>,
}

impl<'a, S: KvStore> PostItService<'a, S> {
    pub fn new(session: &'a SessionManager<S>) -> Self {
        Self { session }
    }

    /// Returns the persisted post-its, or the seed defaults when none exist.
    pub fn load(&self) -> StoreResult<Vec<PostIt>> {
        Ok(self
            .session
            .get_user_data(POSTITS_KEY)?
            .unwrap_or_else(seed_postits))
    }

    /// Appends a validated post-it and persists the collection.
    pub fn add(
        &self,
        title: &str,
        subtitle: &str,
        color: PostItColor,
    ) -> Result<PostIt, PostItError> {
        let postit = PostIt::new(title, subtitle, color)?;
        let mut postits = self.load()?;
        postits.push(postit.clone());
        self.persist(&postits)?;
        Ok(postit)
    }

    /// Applies a patch to the matching post-it and persists the collection.
    ///
    /// An unknown id leaves the data unchanged but still persists, matching
    /// the whole-collection write discipline of the other mutations.
    pub fn update(&self, id: i64, patch: &PostItPatch) -> Result<(), PostItError> {
        let mut postits = self.load()?;
        for postit in &mut postits {
            if postit.id != id {
                continue;
            }
            if let Some(title) = &patch.title {
                postit.title = title.clone();
            }
            if let Some(subtitle) = &patch.subtitle {
                postit.subtitle = subtitle.clone();
            }
            if let Some(color) = patch.color {
                postit.color = color;
            }
            postit.validate()?;
        }
        self.persist(&postits)?;
        Ok(())
    }

    /// Deletes one post-it by id and persists the collection.
    pub fn remove(&self, id: i64) -> StoreResult<()> {
        let mut postits = self.load()?;
        postits.retain(|postit| postit.id != id);
        self.persist(&postits)
    }

    fn persist(&self, postits: &[PostIt]) -> StoreResult<()> {
        self.session.set_user_data(POSTITS_KEY, &postits)
    }
}
