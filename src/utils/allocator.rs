use serde::{Deserialize, Serialize};

/// Typed index into an [`Arena`].
///
/// Scene entities (bodies, colliders) live for the whole session and are
/// never removed, so a plain index is a stable handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ArenaId(pub u32);

impl ArenaId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn is_null(&self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for ArenaId {
    fn default() -> Self {
        Self(u32::MAX)
    }
}

/// Append-only storage handing out stable [`ArenaId`]s.
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) -> ArenaId {
        let id = ArenaId(self.items.len() as u32);
        self.items.push(item);
        id
    }

    pub fn get(&self, id: ArenaId) -> Option<&T> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: ArenaId) -> Option<&mut T> {
        self.items.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = ArenaId> + '_ {
        (0..self.items.len() as u32).map(ArenaId)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
