//! Entity store
//!
//! One homogeneous list per [`EntityKind`], plus two side-tables:
//! - `index`: id → (kind, position) for O(1) swap-remove
//! - `id_cache`: id → kind, filled lazily by [`EntityStore::get_by_id`]
//!
//! Removal swaps the last element of the list into the hole, so order inside
//! a kind list is not stable. Absence is always `None` or an empty iterator,
//! never an error.

use std::cell::RefCell;
use std::collections::HashMap;

use super::entity::{Entity, EntityId, EntityKind, EntityType};
use super::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    kind: EntityKind,
    index: usize,
}

#[derive(Debug)]
pub struct EntityStore {
    lists: [Vec<Entity>; EntityKind::COUNT],
    index: HashMap<EntityId, Slot>,
    id_cache: RefCell<HashMap<EntityId, EntityKind>>,
    stage: Stage,
    next_id: u32,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            lists: std::array::from_fn(|_| Vec::new()),
            index: HashMap::new(),
            id_cache: RefCell::new(HashMap::new()),
            stage: Stage::new(),
            next_id: 1,
        }
    }

    /// Issue a fresh id. Ids are never reused, not even after `clear`.
    pub fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a batch of entities, attaching each to the stage.
    /// Entities whose id is already tracked are skipped.
    pub fn add<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        for entity in entities {
            let id = entity.id();
            if self.index.contains_key(&id) {
                log::warn!("Entity {} already in store, skipping", id);
                continue;
            }
            let kind = entity.kind();
            let z = entity.z_index();
            let list = &mut self.lists[kind.index()];
            list.push(entity);
            self.index.insert(
                id,
                Slot {
                    kind,
                    index: list.len() - 1,
                },
            );
            self.stage.attach(id, z);
        }
    }

    /// Allocate an id, build the entity with it and add it
    pub fn spawn<T, F>(&mut self, build: F) -> EntityId
    where
        T: EntityType + Into<Entity>,
        F: FnOnce(EntityId) -> T,
    {
        let id = self.alloc_id();
        self.add([build(id).into()]);
        id
    }

    /// Swap-remove every tracked id. Untracked ids are ignored.
    /// Returns the removed entities.
    pub fn remove<I>(&mut self, ids: I) -> Vec<Entity>
    where
        I: IntoIterator<Item = EntityId>,
    {
        let mut removed = Vec::new();
        for id in ids {
            let Some(slot) = self.index.remove(&id) else {
                continue;
            };
            let list = &mut self.lists[slot.kind.index()];
            let entity = list.swap_remove(slot.index);

            // The former last element now fills the hole
            if let Some(moved) = list.get(slot.index) {
                let moved_id = moved.id();
                if let Some(moved_slot) = self.index.get_mut(&moved_id) {
                    moved_slot.index = slot.index;
                }
            }

            self.stage.detach(id);
            self.id_cache.get_mut().remove(&id);
            removed.push(entity);
        }
        removed
    }

    /// Every live entity of kind `T`
    pub fn get_all<'a, T: EntityType + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.lists[T::KIND.index()].iter().filter_map(T::from_entity)
    }

    pub fn get_all_mut<'a, T: EntityType + 'a>(&'a mut self) -> impl Iterator<Item = &'a mut T> {
        self.lists[T::KIND.index()]
            .iter_mut()
            .filter_map(T::from_entity_mut)
    }

    /// Ids of every live entity of `kind`, in list order
    pub fn ids_of(&self, kind: EntityKind) -> Vec<EntityId> {
        self.lists[kind.index()].iter().map(Entity::id).collect()
    }

    pub fn first<T: EntityType>(&self) -> Option<&T> {
        self.lists[T::KIND.index()].first().and_then(T::from_entity)
    }

    pub fn first_mut<T: EntityType>(&mut self) -> Option<&mut T> {
        self.lists[T::KIND.index()]
            .first_mut()
            .and_then(T::from_entity_mut)
    }

    /// Resolve an id to its (kind, position), consulting the id cache first
    /// and falling back to a scan of every list.
    fn locate(&self, id: EntityId) -> Option<(EntityKind, usize)> {
        let cached = self.id_cache.borrow().get(&id).copied();
        if let Some(kind) = cached {
            // The cache can outlive the entity after `clear`
            if let Some(slot) = self.index.get(&id) {
                if slot.kind == kind {
                    return Some((kind, slot.index));
                }
            }
        }

        for kind in EntityKind::ALL {
            if let Some(pos) = self.lists[kind.index()].iter().position(|e| e.id() == id) {
                self.id_cache.borrow_mut().insert(id, *kind);
                return Some((*kind, pos));
            }
        }
        None
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<&Entity> {
        let (kind, pos) = self.locate(id)?;
        self.lists[kind.index()].get(pos)
    }

    pub fn get_by_id_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let (kind, pos) = self.locate(id)?;
        self.lists[kind.index()].get_mut(pos)
    }

    /// Typed lookup by id
    pub fn get<T: EntityType>(&self, id: EntityId) -> Option<&T> {
        self.get_by_id(id).and_then(T::from_entity)
    }

    pub fn get_mut<T: EntityType>(&mut self, id: EntityId) -> Option<&mut T> {
        self.get_by_id_mut(id).and_then(T::from_entity_mut)
    }

    /// Whether the id was ever resolved through `get_by_id` and not since removed
    pub fn is_cached(&self, id: EntityId) -> bool {
        self.id_cache.borrow().contains_key(&id)
    }

    /// Empty every list, the index table and the stage.
    ///
    /// The id cache is left as is; its entries are validated against the
    /// index on lookup, and ids are never reissued.
    pub fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
        self.index.clear();
        self.stage.clear();
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Change an entity's z-index and re-sort its place on the stage
    pub fn set_z_index(&mut self, id: EntityId, z_index: i32) {
        let Some(slot) = self.index.get(&id).copied() else {
            return;
        };
        if let Some(entity) = self.lists[slot.kind.index()].get_mut(slot.index) {
            entity.node_mut().z_index = z_index;
            self.stage.set_z_index(id, z_index);
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Attached ids back to front
    pub fn draw_order(&mut self) -> Vec<EntityId> {
        self.stage.draw_order()
    }

    /// Every live entity, grouped by kind
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.lists.iter().flatten()
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        let mut total = 0;
        for (k, list) in self.lists.iter().enumerate() {
            for (pos, entity) in list.iter().enumerate() {
                let slot = self.index[&entity.id()];
                assert_eq!(slot.kind.index(), k);
                assert_eq!(slot.index, pos);
                assert!(self.stage.contains(entity.id()));
            }
            total += list.len();
        }
        assert_eq!(total, self.index.len());
        assert_eq!(total, self.stage.len());
    }
}
