use crate::sim::entities::SweatDrop;
use crate::sim::entity::{EntityData, EntityId};
use crate::sim::state::World;
use crate::sim::system::System;

/// Moves sweat drops and removes the expired ones from the store
pub struct SweatDropsSystem;

impl System for SweatDropsSystem {
    fn name(&self) -> &'static str {
        "sweat-drops"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        let mut expired: Vec<EntityId> = Vec::new();
        for drop in world.store.get_all_mut::<SweatDrop>() {
            drop.update(delta);
            if drop.is_expired() {
                expired.push(drop.id());
            }
        }
        if !expired.is_empty() {
            world.store.remove(expired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SWEAT_DROP_LIFETIME;
    use crate::sim::testing::runner_world;
    use glam::Vec2;

    #[test]
    fn test_drops_expire_and_leave_store() {
        let mut world = runner_world(&[0.0; 10]);
        let first = world.store.spawn(|id| SweatDrop::new(id, Vec2::ZERO, Vec2::new(-5.0, -2.0)));

        for _ in 0..SWEAT_DROP_LIFETIME / 2 {
            SweatDropsSystem.update(&mut world, 0.16);
        }
        let second = world.store.spawn(|id| SweatDrop::new(id, Vec2::ZERO, Vec2::ZERO));

        for _ in 0..SWEAT_DROP_LIFETIME / 2 {
            SweatDropsSystem.update(&mut world, 0.16);
        }
        assert!(world.store.get_by_id(first).is_none());
        assert!(!world.store.stage().contains(first));
        assert!(world.store.get_by_id(second).is_some());

        for _ in 0..SWEAT_DROP_LIFETIME {
            SweatDropsSystem.update(&mut world, 0.16);
        }
        assert_eq!(world.store.get_all::<SweatDrop>().count(), 0);
    }
}
