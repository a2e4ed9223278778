//! Checklist model and seed defaults.
//!
//! # Responsibility
//! - Define the four fixed checklist slots and their item shape.
//! - Provide the seed collection shown before the user persists anything.
//!
//! # Invariants
//! - Items stay in insertion order.
//! - Item ids are epoch-millisecond timestamps, except seed items which keep
//!   their fixed small fixture ids.

use crate::clock::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed checklist slots mirrored by the checklist screen.
///
/// The variant order matches the screen order; `BTreeMap<ListId, _>` keeps
/// serialization deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ListId {
    Shopping,
    Checklist,
    Routine,
    Notes,
}

impl ListId {
    pub const ALL: [ListId; 4] = [
        ListId::Shopping,
        ListId::Checklist,
        ListId::Routine,
        ListId::Notes,
    ];

    /// Storage/JSON key for this slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shopping => "shopping",
            Self::Checklist => "checklist",
            Self::Routine => "routine",
            Self::Notes => "notes",
        }
    }

    /// Display title used when a slot has to be recreated from scratch.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Shopping => "Lista de Compras",
            Self::Checklist => "Checklist de Saída",
            Self::Routine => "Rotina Diária",
            Self::Notes => "Notas",
        }
    }
}

/// One line inside a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl ChecklistItem {
    /// Creates an uncompleted item with a fresh epoch-millisecond id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: now_epoch_ms(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A titled, ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

/// All fixed lists keyed by slot, persisted as one value.
pub type Checklists = BTreeMap<ListId, Checklist>;

/// Seed defaults returned before the user has persisted any lists.
pub fn seed_checklists() -> Checklists {
    fn item(id: i64, text: &str, completed: bool) -> ChecklistItem {
        ChecklistItem {
            id,
            text: text.to_string(),
            completed,
        }
    }

    let mut lists = Checklists::new();
    lists.insert(
        ListId::Shopping,
        Checklist {
            title: "Lista de Compras".to_string(),
            items: vec![
                item(1, "Leite", false),
                item(2, "Pão", true),
                item(3, "Ovos", false),
                item(4, "Frutas", false),
            ],
        },
    );
    lists.insert(
        ListId::Checklist,
        Checklist {
            title: "Checklist de Saída".to_string(),
            items: vec![
                item(1, "Chaves", true),
                item(2, "Carteira", false),
                item(3, "Celular", true),
                item(4, "Óculos", false),
            ],
        },
    );
    lists.insert(
        ListId::Routine,
        Checklist {
            title: "Rotina Diária".to_string(),
            items: vec![
                item(1, "Exercícios", false),
                item(2, "Meditação", true),
                item(3, "Leitura", false),
                item(4, "Estudos", false),
            ],
        },
    );
    lists.insert(
        ListId::Notes,
        Checklist {
            title: "Notas".to_string(),
            items: vec![
                item(1, "Reunião às 14h", false),
                item(2, "Ligar para o médico", true),
                item(3, "Comprar presente", false),
            ],
        },
    );
    lists
}
