//! Scene contract and the scene engine
//!
//! A scene is loaded once, updated every fixed tick and disposed before the
//! next one replaces it. The engine remembers the last factory so a scene can
//! ask to be rebuilt from scratch (restart after a win or loss).

pub mod runner;
pub mod timestep;

pub use runner::RunnerScene;
pub use timestep::FixedTimestep;

use crate::consts::TICK_DELTA;
use crate::error::Result;
use crate::input::InputEvent;
use crate::renderer::DrawList;

pub trait Scene {
    fn name(&self) -> &'static str;

    /// Build entities and systems. Fails only on asset/config problems.
    fn load(&mut self) -> Result<()>;

    /// Advance one tick. `delta` is elapsed milliseconds times 0.01.
    fn update(&mut self, delta: f32);

    /// Tear down entities and systems
    fn dispose(&mut self);

    fn push_input(&mut self, _event: InputEvent) {}

    /// Whether the scene wants to be rebuilt after this tick
    fn reload_requested(&self) -> bool {
        false
    }

    fn render(&mut self, _list: &mut DrawList) {}
}

/// Builds a fresh scene on every load
pub type SceneFactory = Box<dyn FnMut() -> Box<dyn Scene>>;

/// Owns the current scene and drives it at a fixed rate
#[derive(Default)]
pub struct SceneEngine {
    current: Option<Box<dyn Scene>>,
    factory: Option<SceneFactory>,
    timestep: FixedTimestep,
}

impl SceneEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the current scene and load the one `factory` builds
    pub fn next<F>(&mut self, factory: F) -> Result<()>
    where
        F: FnMut() -> Box<dyn Scene> + 'static,
    {
        self.factory = Some(Box::new(factory));
        self.load_from_factory()
    }

    /// Rebuild the current scene from its factory. No-op before `next`.
    pub fn reload(&mut self) -> Result<()> {
        if self.factory.is_none() {
            return Ok(());
        }
        log::info!("Reloading scene");
        self.load_from_factory()
    }

    fn load_from_factory(&mut self) -> Result<()> {
        if let Some(mut old) = self.current.take() {
            old.dispose();
        }
        let Some(factory) = self.factory.as_mut() else {
            return Ok(());
        };
        let mut scene = factory();
        scene.load()?;
        log::info!("Scene '{}' loaded", scene.name());
        self.current = Some(scene);
        self.timestep.reset();
        Ok(())
    }

    /// Feed one display frame (seconds). Runs the due fixed ticks and
    /// returns how many ran.
    pub fn frame(&mut self, dt: f32) -> Result<u32> {
        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let Some(scene) = self.current.as_mut() else {
                return Ok(step);
            };
            scene.update(TICK_DELTA);
            if scene.reload_requested() {
                self.reload()?;
                return Ok(step + 1);
            }
        }
        Ok(steps)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        if let Some(scene) = self.current.as_mut() {
            scene.push_input(event);
        }
    }

    pub fn render(&mut self, list: &mut DrawList) {
        list.clear();
        if let Some(scene) = self.current.as_mut() {
            scene.render(list);
        }
    }

    pub fn current(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    pub fn has_scene(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::consts::SIM_DT;
    use crate::error::GameError;

    /// Records lifecycle calls into a shared log
    struct Probe {
        log: Rc<RefCell<Vec<String>>>,
        ticks: u32,
        reload_after: Option<u32>,
        fail_load: bool,
    }

    impl Scene for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn load(&mut self) -> Result<()> {
            if self.fail_load {
                return Err(GameError::UnknownAsset("missing".into()));
            }
            self.log.borrow_mut().push("load".into());
            Ok(())
        }

        fn update(&mut self, delta: f32) {
            assert!((delta - TICK_DELTA).abs() < 1e-6);
            self.ticks += 1;
            self.log.borrow_mut().push(format!("update{}", self.ticks));
        }

        fn dispose(&mut self) {
            self.log.borrow_mut().push("dispose".into());
        }

        fn reload_requested(&self) -> bool {
            self.reload_after == Some(self.ticks)
        }
    }

    fn probe_factory(
        log: &Rc<RefCell<Vec<String>>>,
        reload_after: Option<u32>,
    ) -> impl FnMut() -> Box<dyn Scene> + 'static {
        let log = log.clone();
        move || {
            Box::new(Probe {
                log: log.clone(),
                ticks: 0,
                reload_after,
                fail_load: false,
            }) as Box<dyn Scene>
        }
    }

    #[test]
    fn test_next_loads_and_frame_updates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = SceneEngine::new();
        engine.next(probe_factory(&log, None)).unwrap();
        assert_eq!(engine.current().map(|s| s.name()), Some("probe"));

        assert_eq!(engine.frame(SIM_DT).unwrap(), 1);
        assert_eq!(*log.borrow(), vec!["load", "update1"]);
    }

    #[test]
    fn test_next_disposes_previous_scene() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = SceneEngine::new();
        engine.next(probe_factory(&log, None)).unwrap();
        engine.next(probe_factory(&log, None)).unwrap();
        assert_eq!(*log.borrow(), vec!["load", "dispose", "load"]);
    }

    #[test]
    fn test_reload_request_rebuilds_scene() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = SceneEngine::new();
        engine.next(probe_factory(&log, Some(1))).unwrap();

        // Two ticks are due but the reload cuts the frame short
        let ran = engine.frame(SIM_DT * 2.5).unwrap();
        assert_eq!(ran, 1);
        assert_eq!(*log.borrow(), vec!["load", "update1", "dispose", "load"]);
    }

    #[test]
    fn test_reload_without_scene_is_noop() {
        let mut engine = SceneEngine::new();
        engine.reload().unwrap();
        assert!(!engine.has_scene());
        assert_eq!(engine.frame(SIM_DT).unwrap(), 0);
    }

    #[test]
    fn test_failed_load_propagates() {
        let mut engine = SceneEngine::new();
        let err = engine
            .next(|| {
                Box::new(Probe {
                    log: Rc::new(RefCell::new(Vec::new())),
                    ticks: 0,
                    reload_after: None,
                    fail_load: true,
                }) as Box<dyn Scene>
            })
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownAsset(_)));
        assert!(!engine.has_scene());
    }
}
