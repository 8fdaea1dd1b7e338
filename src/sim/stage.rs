//! Render stage: which entities are attached and in what order they draw
//!
//! Detaching scans the child list and shifts the tail to keep draw order, so
//! it is O(n) in attached entities even though the store's own removal is O(1).

use super::entity::EntityId;

/// Attachment list sorted lazily by z-index
///
/// Ties keep attachment order (stable sort), so an entity added later draws
/// on top of an earlier one with the same z-index.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    /// (id, z_index) in attachment order until sorted
    children: Vec<(EntityId, i32)>,
    dirty: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, id: EntityId, z_index: i32) {
        self.children.push((id, z_index));
        self.dirty = true;
    }

    /// Returns whether the id was attached
    pub fn detach(&mut self, id: EntityId) -> bool {
        match self.children.iter().position(|(child, _)| *child == id) {
            Some(pos) => {
                // Order-preserving so the remaining draw order is untouched
                self.children.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Change a child's z-index; re-sorts on the next `draw_order`
    pub fn set_z_index(&mut self, id: EntityId, z_index: i32) {
        if let Some(child) = self.children.iter_mut().find(|(child, _)| *child == id) {
            if child.1 != z_index {
                child.1 = z_index;
                self.dirty = true;
            }
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.children.iter().any(|(child, _)| *child == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.children.clear();
        self.dirty = false;
    }

    /// Sort by z-index if anything changed since the last sort
    pub fn sort(&mut self) {
        if self.dirty {
            self.children.sort_by_key(|(_, z)| *z);
            self.dirty = false;
        }
    }

    /// Attached ids back to front
    pub fn draw_order(&mut self) -> Vec<EntityId> {
        self.sort();
        self.children.iter().map(|(id, _)| *id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order_sorted_by_z() {
        let mut stage = Stage::new();
        stage.attach(EntityId(1), 20);
        stage.attach(EntityId(2), 10);
        stage.attach(EntityId(3), 15);
        assert_eq!(stage.draw_order(), vec![EntityId(2), EntityId(3), EntityId(1)]);
    }

    #[test]
    fn test_ties_keep_attachment_order() {
        let mut stage = Stage::new();
        stage.attach(EntityId(5), 0);
        stage.attach(EntityId(4), 0);
        assert_eq!(stage.draw_order(), vec![EntityId(5), EntityId(4)]);
    }

    #[test]
    fn test_set_z_index_resorts() {
        let mut stage = Stage::new();
        stage.attach(EntityId(1), 1);
        stage.attach(EntityId(2), 2);
        stage.set_z_index(EntityId(1), 3);
        assert_eq!(stage.draw_order(), vec![EntityId(2), EntityId(1)]);
    }

    #[test]
    fn test_detach() {
        let mut stage = Stage::new();
        stage.attach(EntityId(1), 0);
        assert!(stage.detach(EntityId(1)));
        assert!(!stage.detach(EntityId(1)));
        assert!(stage.is_empty());
    }

    #[test]
    fn test_detach_keeps_remaining_order() {
        let mut stage = Stage::new();
        for id in 1..=4 {
            stage.attach(EntityId(id), 0);
        }
        stage.detach(EntityId(2));
        assert_eq!(stage.draw_order(), vec![EntityId(1), EntityId(3), EntityId(4)]);
    }
}
