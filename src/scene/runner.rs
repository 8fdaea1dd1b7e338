//! The runner scene: one run from the start prompt to the moon (or the void)

use glam::Vec2;

use super::Scene;
use crate::assets::{AssetRegistry, SheetLayout};
use crate::consts::{PLAYER_SPAWN_X, PLAYER_SPAWN_Y, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::error::Result;
use crate::input::{InputEvent, InputQueue};
use crate::renderer::DrawList;
use crate::settings::Settings;
use crate::sim::entities::{
    Camera, Graph, Moon, OPENING_PROFILE, Platform, Player, PlayerSpawn, PlayerSprites,
};
use crate::sim::systems::{GameStateSystem, register_all};
use crate::sim::{Entity, GamePhase, SystemAgg, World};

/// Textures the scene cannot start without
const PRELOAD: &[&str] = &["running_egg", "jumping_egg", "celebration_egg", "moon"];

const RUNNING_SHEET: SheetLayout = SheetLayout {
    frames: 3,
    frame_width: 237.0,
    frame_height: 269.0,
    animation_speed: 0.15,
};

const JUMPING_SHEET: SheetLayout = SheetLayout {
    frames: 2,
    frame_width: 233.25,
    frame_height: 400.0,
    animation_speed: 0.25,
};

const CELEBRATING_SHEET: SheetLayout = SheetLayout {
    frames: 2,
    frame_width: 409.0,
    frame_height: 386.0,
    animation_speed: 0.1,
};

const PROMPT_COLOR: u32 = 0xffffff;
const PROMPT_SIZE: f32 = 32.0;

pub struct RunnerScene {
    world: World,
    systems: SystemAgg,
    queue: InputQueue,
    registry: AssetRegistry,
}

impl RunnerScene {
    pub fn new(settings: Settings, registry: AssetRegistry, seed: u64) -> Self {
        Self {
            world: World::new(settings, seed),
            systems: SystemAgg::new(),
            queue: InputQueue::new(),
            registry,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn systems(&self) -> &SystemAgg {
        &self.systems
    }

    pub fn phase(&self) -> GamePhase {
        self.world.game.phase()
    }

    fn player_sprites(&self) -> Result<PlayerSprites> {
        Ok(PlayerSprites {
            running: self.registry.animated_sprite("running_egg", RUNNING_SHEET)?,
            jumping: self.registry.animated_sprite("jumping_egg", JUMPING_SHEET)?,
            celebrating: self
                .registry
                .animated_sprite("celebration_egg", CELEBRATING_SHEET)?,
        })
    }

    fn prompt(&self) -> Option<&'static str> {
        match self.phase() {
            GamePhase::Waiting => Some("Press SPACE to start"),
            GamePhase::Playing => None,
            GamePhase::Won => Some("To the moon! SPACE to run again"),
            GamePhase::Lost => Some("Rugged. SPACE to try again"),
        }
    }
}

impl Scene for RunnerScene {
    fn name(&self) -> &'static str {
        "runner"
    }

    fn load(&mut self) -> Result<()> {
        self.registry.preload(PRELOAD)?;
        let sprites = self.player_sprites()?;
        let moon_texture = self.registry.texture("moon")?;

        let world = &mut self.world;
        let settings = world.settings.clone();
        let store = &mut world.store;

        store.spawn(Camera::new);
        let spawn_id = store.spawn(|id| PlayerSpawn::new(id, PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        let spawn_point = store
            .get::<PlayerSpawn>(spawn_id)
            .map(PlayerSpawn::spawn_point)
            .unwrap_or(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));

        store.spawn(|id| {
            let mut player = Player::new(id, sprites);
            player.move_to(spawn_point);
            // Frozen until the run starts
            player.stop_animation();
            player
        });

        for p in &settings.platforms {
            store.spawn(|id| Platform::new(id, p.x, p.y, p.width, p.height));
        }

        let mut graph = Graph::new(store.alloc_id(), &settings.curve, OPENING_PROFILE);
        if settings.curve.generated_samples > 0 {
            graph.generate_samples(
                &mut world.rng,
                settings.curve.generated_samples,
                settings.curve.max_sample_step,
            );
        }
        let moon_at = graph.end_point().unwrap_or(Vec2::ZERO)
            + Vec2::new(settings.moon.offset_x, settings.moon.offset_y);
        store.add([Entity::from(graph)]);

        store.spawn(|id| {
            let mut moon = Moon::new(id, moon_texture, settings.moon.scale, settings.moon.landing_fraction);
            moon.move_to(moon_at);
            moon
        });

        register_all(&mut self.systems);
        log::info!(
            "Runner scene ready: {} entities, {} systems",
            self.world.store.len(),
            self.systems.len()
        );
        Ok(())
    }

    fn update(&mut self, delta: f32) {
        let events = self.queue.drain();
        self.world.input.apply(&events);

        // The state machine always runs; gameplay only once the run started
        self.systems.run(GameStateSystem::NAME, &mut self.world, delta);
        if !self.world.game.is_waiting() {
            self.systems
                .run_except(GameStateSystem::NAME, &mut self.world, delta);
        }

        self.world.input.end_tick();
        self.world.time_ticks += 1;
    }

    fn dispose(&mut self) {
        self.world.store.clear();
        self.systems.clear();
        self.queue.drain();
        log::debug!("Runner scene disposed");
    }

    fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    fn reload_requested(&self) -> bool {
        self.world.reload_requested
    }

    fn render(&mut self, list: &mut DrawList) {
        list.build(&mut self.world.store, self.world.settings.show_collision_boxes);
        if let Some(text) = self.prompt() {
            let at = Vec2::new(VIRTUAL_WIDTH / 2.0, VIRTUAL_HEIGHT / 3.0);
            list.text(text, at, PROMPT_COLOR, PROMPT_SIZE);
        }
    }
}
