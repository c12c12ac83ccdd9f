use crate::models::Property;
use std::collections::HashSet;
use uuid::Uuid;

/// Favorited property ids.
///
/// Ids are not checked against any catalog; unknown ids are stored and
/// simply never show up in [`SavedSet::saved_properties`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSet {
    ids: HashSet<Uuid>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saved(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`, returning whether it is saved afterwards
    pub fn toggle_saved(&mut self, id: Uuid) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Saved listings in catalog order
    pub fn saved_properties<'a>(&self, catalog: &'a [Property]) -> Vec<&'a Property> {
        catalog.iter().filter(|p| self.ids.contains(&p.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.ids.iter().copied()
    }
}
