//! Checklist entity store.
//!
//! # Responsibility
//! - Load the four fixed lists and mutate their items.
//! - Persist the whole `lists` collection on every change.
//!
//! # Invariants
//! - The seed default is returned, not persisted, until the first mutation.
//! - Last write wins at whole-collection granularity.

use crate::model::checklist::{seed_checklists, Checklist, ChecklistItem, Checklists, ListId};
use crate::repo::kv_repo::{KvStore, StoreResult};
use crate::session::manager::SessionManager;

/// Logical storage key for the checklist collection.
pub const LISTS_KEY: &str = "lists";

/// Whole-collection CRUD over the user's checklists.
pub struct ChecklistService<'a, S: KvStore> {
    session: &'a SessionManager<S>,
}

impl<'a, S: KvStore> ChecklistService<'a, S> {
    pub fn new(session: &'a SessionManager<S>) -> Self {
        Self { session }
    }

    /// Returns the persisted lists, or the seed defaults when none exist.
    pub fn load(&self) -> StoreResult<Checklists> {
        Ok(self
            .session
            .get_user_data(LISTS_KEY)?
            .unwrap_or_else(seed_checklists))
    }

    /// Appends a new uncompleted item to one list and persists everything.
    ///
    /// Whitespace-only text is ignored and returns `Ok(None)` without a
    /// write, matching the screen's input guard.
    pub fn add_item(&self, list: ListId, text: &str) -> StoreResult<Option<ChecklistItem>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut lists = self.load()?;
        let item = ChecklistItem::new(trimmed);
        lists
            .entry(list)
            .or_insert_with(|| Checklist {
                title: list.default_title().to_string(),
                items: Vec::new(),
            })
            .items
            .push(item.clone());
        self.persist(&lists)?;
        Ok(Some(item))
    }

    /// Flips one item's completed flag and persists the collection.
    ///
    /// Returns whether an item matched; a miss still persists (and thereby
    /// pins the seed on first mutation), keeping the save-on-every-change discipline.
    pub fn toggle_item(&self, list: ListId, item_id: i64) -> StoreResult<bool> {
        let mut lists = self.load()?;
        let mut toggled = false;
        if let Some(checklist) = lists.get_mut(&list) {
            for item in &mut checklist.items {
                if item.id == item_id {
                    item.completed = !item.completed;
                    toggled = true;
                }
            }
        }
        self.persist(&lists)?;
        Ok(toggled)
    }

    /// Removes one item by id and persists the collection.
    pub fn remove_item(&self, list: ListId, item_id: i64) -> StoreResult<()> {
        let mut lists = self.load()?;
        if let Some(checklist) = lists.get_mut(&list) {
            checklist.items.retain(|item| item.id != item_id);
        }
        self.persist(&lists)
    }

    /// Returns `(completed, total)` for one list's progress label.
    pub fn progress(&self, list: ListId) -> StoreResult<(usize, usize)> {
        let lists = self.load()?;
        Ok(lists
            .get(&list)
            .map(|checklist| {
                let completed = checklist
                    .items
                    .iter()
                    .filter(|item| item.completed)
                    .count();
                (completed, checklist.items.len())
            })
            .unwrap_or((0, 0)))
    }

    fn persist(&self, lists: &Checklists) -> StoreResult<()> {
        self.session.set_user_data(LISTS_KEY, lists)
    }
}
