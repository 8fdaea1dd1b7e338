//! The scrolling curve the player runs along
//!
//! Two parallel per-sample arrays: base heights and falling offsets. Sample
//! `i` sits at screen x `i * spacing - ticks`. Every scroll tick, samples
//! left of the fall line sink a little further, faster the further behind
//! they are, so standing still lets the ground drop away.
//!
//! Height and slope queries take x in the curve's local space (see
//! [`Graph::local_x`]).

use glam::Vec2;
use rand::Rng;

use crate::consts::{GRAPH_COLOR, GRAPH_LINE_WIDTH, GRAPH_Z, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::lerp;
use crate::settings::CurveTuning;
use crate::sim::entity::{EntityData, EntityId, Node};

#[derive(Debug, Clone)]
pub struct Graph {
    id: EntityId,
    node: Node,
    data_points: Vec<f32>,
    falling_offsets: Vec<f32>,
    /// Scroll accumulator
    ticks: f32,
    point_spacing: f32,
    frames_per_point: f32,
    fall_speed: f32,
    fall_start_distance: f32,
    fall_acceleration: f32,
    pub color: u32,
    pub line_width: f32,
}

impl Graph {
    /// Build a curve seeded with `samples`
    pub fn new(id: EntityId, tuning: &CurveTuning, samples: &[f32]) -> Self {
        let node = Node {
            size: Vec2::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT),
            z_index: GRAPH_Z,
            ..Node::default()
        };
        Self {
            id,
            node,
            data_points: samples.to_vec(),
            falling_offsets: vec![0.0; samples.len()],
            ticks: 0.0,
            point_spacing: tuning.point_spacing,
            frames_per_point: tuning.frames_per_point,
            fall_speed: tuning.fall_speed,
            fall_start_distance: tuning.fall_start_distance,
            fall_acceleration: tuning.fall_acceleration,
            color: GRAPH_COLOR,
            line_width: GRAPH_LINE_WIDTH,
        }
    }

    /// Append `last + delta_value` as a new sample
    pub fn update_curve(&mut self, delta_value: f32) {
        let last = self.data_points.last().copied().unwrap_or(0.0);
        self.data_points.push(last + delta_value);
        self.falling_offsets.push(0.0);
    }

    /// Append `count` samples, each within `max_step` of the previous one
    pub fn generate_samples<R: Rng>(&mut self, rng: &mut R, count: u32, max_step: f32) {
        let step = max_step.abs();
        for _ in 0..count {
            let delta = if step > 0.0 {
                rng.random_range(-step..=step)
            } else {
                0.0
            };
            self.update_curve(delta);
        }
    }

    /// Advance the scroll by `speed_multiplier` and sink samples behind the fall line
    pub fn update_scroll(&mut self, _delta: f32, speed_multiplier: f32) {
        if self.data_points.len() < 2 {
            return;
        }

        self.ticks += speed_multiplier;

        for (i, offset) in self.falling_offsets.iter_mut().enumerate() {
            let screen_x = i as f32 * self.point_spacing - self.ticks;
            if screen_x < self.fall_start_distance {
                let behind = self.fall_start_distance - screen_x;
                *offset += self.fall_speed + behind * self.fall_acceleration;
            }
        }
    }

    /// Horizontal scroll applied when mapping x back to a sample index
    pub fn scroll_offset(&self) -> f32 {
        self.ticks * self.point_spacing / self.frames_per_point
    }

    /// Fractional sample index under local x
    fn point_index(&self, x: f32) -> f32 {
        (x + self.scroll_offset()) / self.point_spacing
    }

    /// Screen x of sample `i`
    pub fn sample_x(&self, i: usize) -> f32 {
        i as f32 * self.point_spacing - self.ticks
    }

    /// Convert a world x to the curve's local x
    pub fn local_x(&self, world_x: f32) -> f32 {
        world_x - self.node.position.x
    }

    /// Surface height (base + falling offset) under x.
    ///
    /// Left of the first sample this is the first sample's height. At or past
    /// the last sample there is no curve and the result is `None`.
    pub fn y_at_x(&self, x: f32) -> Option<f32> {
        if self.data_points.is_empty() {
            return None;
        }

        let index = self.point_index(x);
        if index < 0.0 {
            return Some(self.data_points[0] + self.falling_offsets[0]);
        }
        if index >= (self.data_points.len() - 1) as f32 {
            return None;
        }

        let lower = index.floor() as usize;
        let upper = index.ceil() as usize;
        let t = index - lower as f32;

        let y1 = self.data_points[lower] + self.falling_offsets[lower];
        let y2 = self.data_points[upper] + self.falling_offsets[upper];
        Some(lerp(y1, y2, t))
    }

    /// dy/dx of the base heights under x, `None` outside the sampled range
    pub fn slope_at_x(&self, x: f32) -> Option<f32> {
        let len = self.data_points.len();
        if len < 2 {
            return None;
        }

        let index = self.point_index(x);
        if index < 0.0 || index >= (len - 1) as f32 {
            return None;
        }

        // On a sample, pair it with its successor
        let i1 = index.floor() as usize;
        let i2 = (i1 + 1).min(len - 1);
        let dx = (i2 - i1) as f32 * self.point_spacing;
        if dx == 0.0 {
            return Some(0.0);
        }
        Some((self.data_points[i2] - self.data_points[i1]) / dx)
    }

    /// Interpolated falling offset under x
    pub fn falling_offset_at_x(&self, x: f32) -> f32 {
        if self.falling_offsets.is_empty() {
            return 0.0;
        }

        let index = self.point_index(x);
        if index < 0.0 {
            return self.falling_offsets[0];
        }
        if index >= (self.falling_offsets.len() - 1) as f32 {
            return 0.0;
        }

        let lower = index.floor() as usize;
        let upper = index.ceil() as usize;
        let t = index - lower as f32;
        lerp(self.falling_offsets[lower], self.falling_offsets[upper], t)
    }

    /// Screen position of the last sample's base height
    pub fn end_point(&self) -> Option<Vec2> {
        let last = self.data_points.len().checked_sub(1)?;
        Some(Vec2::new(self.sample_x(last), self.data_points[last]) + self.node.position)
    }

    /// Rewind the scroll and lift every sample back to its base height
    pub fn reset(&mut self) {
        self.ticks = 0.0;
        self.falling_offsets.iter_mut().for_each(|o| *o = 0.0);
    }

    /// Polyline for drawing, offsets applied
    pub fn screen_points(&self) -> Vec<Vec2> {
        self.data_points
            .iter()
            .zip(&self.falling_offsets)
            .enumerate()
            .map(|(i, (h, o))| Vec2::new(self.sample_x(i), h + o) + self.node.position)
            .collect()
    }

    pub fn sample_count(&self) -> usize {
        self.data_points.len()
    }

    pub fn data_points(&self) -> &[f32] {
        &self.data_points
    }

    pub fn falling_offsets(&self) -> &[f32] {
        &self.falling_offsets
    }

    pub fn ticks(&self) -> f32 {
        self.ticks
    }

    pub fn point_spacing(&self) -> f32 {
        self.point_spacing
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    pub fn set_fall_speed(&mut self, speed: f32) {
        self.fall_speed = speed;
    }

    pub fn fall_start_distance(&self) -> f32 {
        self.fall_start_distance
    }

    pub fn set_fall_start_distance(&mut self, distance: f32) {
        self.fall_start_distance = distance;
    }

    pub fn fall_acceleration(&self) -> f32 {
        self.fall_acceleration
    }

    pub fn set_fall_acceleration(&mut self, acceleration: f32) {
        self.fall_acceleration = acceleration;
    }
}

impl EntityData for Graph {
    fn id(&self) -> EntityId {
        self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}
