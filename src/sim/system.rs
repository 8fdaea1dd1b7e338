//! System trait and the ordered system pipeline

use super::state::World;

/// A named per-tick update unit
///
/// Systems run in registration order. Later systems see what earlier ones
/// wrote in the same tick.
pub trait System {
    /// Unique name, used for lookup
    fn name(&self) -> &'static str;

    fn update(&mut self, world: &mut World, delta: f32);
}

/// Ordered list of systems
#[derive(Default)]
pub struct SystemAgg {
    systems: Vec<Box<dyn System>>,
}

impl SystemAgg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system at the end of the pipeline
    pub fn add<S: System + 'static>(&mut self, system: S) -> &mut Self {
        if self.get(system.name()).is_some() {
            log::warn!("System '{}' registered twice", system.name());
        }
        self.systems.push(Box::new(system));
        self
    }

    /// Run every system in registration order
    pub fn update(&mut self, world: &mut World, delta: f32) {
        for system in &mut self.systems {
            system.update(world, delta);
        }
    }

    /// Run a single system by name. Returns whether it was found.
    pub fn run(&mut self, name: &str, world: &mut World, delta: f32) -> bool {
        match self.systems.iter_mut().find(|s| s.name() == name) {
            Some(system) => {
                system.update(world, delta);
                true
            }
            None => false,
        }
    }

    /// Run every system except `name`, in registration order
    pub fn run_except(&mut self, name: &str, world: &mut World, delta: f32) {
        for system in self.systems.iter_mut().filter(|s| s.name() != name) {
            system.update(world, delta);
        }
    }

    pub fn get(&self, name: &str) -> Option<&(dyn System + 'static)> {
        self.systems
            .iter()
            .find(|s| s.name() == name)
            .map(|s| &**s)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn System + 'static)> {
        self.systems
            .iter_mut()
            .find(|s| s.name() == name)
            .map(|s| &mut **s)
    }

    /// Names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    pub fn clear(&mut self) {
        self.systems.clear();
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    /// Appends its tag to the world's tick counter as decimal digits
    struct Tag(&'static str, u64);

    impl System for Tag {
        fn name(&self) -> &'static str {
            self.0
        }

        fn update(&mut self, world: &mut World, _delta: f32) {
            world.time_ticks = world.time_ticks * 10 + self.1;
        }
    }

    fn world() -> World {
        World::new(Settings::default(), 1)
    }

    #[test]
    fn test_runs_in_registration_order() {
        let mut agg = SystemAgg::new();
        agg.add(Tag("a", 1)).add(Tag("b", 2)).add(Tag("c", 3));
        let mut w = world();
        agg.update(&mut w, 0.1);
        assert_eq!(w.time_ticks, 123);
        assert_eq!(agg.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_run_by_name_and_except() {
        let mut agg = SystemAgg::new();
        agg.add(Tag("a", 1)).add(Tag("b", 2)).add(Tag("c", 3));
        let mut w = world();
        assert!(agg.run("b", &mut w, 0.1));
        assert!(!agg.run("missing", &mut w, 0.1));
        assert_eq!(w.time_ticks, 2);

        w.time_ticks = 0;
        agg.run_except("b", &mut w, 0.1);
        assert_eq!(w.time_ticks, 13);
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut agg = SystemAgg::new();
        agg.add(Tag("a", 1));
        assert_eq!(agg.get("a").map(|s| s.name()), Some("a"));
        assert!(agg.get_mut("a").is_some());
        assert!(agg.get("z").is_none());
        agg.clear();
        assert!(agg.is_empty());
    }
}
