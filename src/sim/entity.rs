//! Entity identity, render node and the closed set of entity kinds

use std::fmt;

use glam::Vec2;

use super::entities::{Camera, Graph, Moon, Platform, Player, PlayerSpawn, SweatDrop};

/// Stable integer handle issued by the store's id allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Renderable node owned by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Vec2,
    /// Unscaled content size
    pub size: Vec2,
    pub scale: Vec2,
    /// Fraction of the size that `position` refers to (0.5, 1.0 = bottom-center)
    pub anchor: Vec2,
    pub visible: bool,
    pub alpha: f32,
    pub z_index: i32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            scale: Vec2::ONE,
            anchor: Vec2::ZERO,
            visible: true,
            alpha: 1.0,
            z_index: 0,
        }
    }
}

impl Node {
    pub fn sized(size: Vec2) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Rendered size (content size times scale)
    pub fn scaled_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Bounds derived from position, size, scale and anchor
    pub fn bounds(&self) -> Rect {
        let size = self.scaled_size();
        let top_left = self.position - size * self.anchor;
        Rect::new(top_left.x, top_left.y, size.x, size.y)
    }
}

/// Behaviour shared by every entity kind
pub trait EntityData {
    fn id(&self) -> EntityId;
    fn node(&self) -> &Node;
    fn node_mut(&mut self) -> &mut Node;

    /// Collision/bounding rectangle. Defaults to the node bounds.
    fn rect(&self) -> Rect {
        self.node().bounds()
    }
}

/// Typed access to one variant of [`Entity`]
pub trait EntityType: EntityData + Sized {
    const KIND: EntityKind;

    fn from_entity(entity: &Entity) -> Option<&Self>;
    fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self>;
}

/// Generates the closed kind enum, the entity enum and the typed accessors
macro_rules! entity_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// Every kind of entity the store can hold
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EntityKind {
            $($kind),+
        }

        impl EntityKind {
            pub const ALL: &'static [EntityKind] = &[$(EntityKind::$kind),+];
            pub const COUNT: usize = Self::ALL.len();

            /// Position of this kind's list inside the store
            pub fn index(self) -> usize {
                self as usize
            }
        }

        /// A live entity of any kind
        #[derive(Debug, Clone)]
        pub enum Entity {
            $($kind($kind)),+
        }

        impl Entity {
            pub fn kind(&self) -> EntityKind {
                match self {
                    $(Entity::$kind(_) => EntityKind::$kind),+
                }
            }

            fn data(&self) -> &dyn EntityData {
                match self {
                    $(Entity::$kind(e) => e),+
                }
            }

            fn data_mut(&mut self) -> &mut dyn EntityData {
                match self {
                    $(Entity::$kind(e) => e),+
                }
            }
        }

        $(
            impl EntityType for $kind {
                const KIND: EntityKind = EntityKind::$kind;

                fn from_entity(entity: &Entity) -> Option<&Self> {
                    match entity {
                        Entity::$kind(e) => Some(e),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self> {
                    match entity {
                        Entity::$kind(e) => Some(e),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }

            impl From<$kind> for Entity {
                fn from(e: $kind) -> Self {
                    Entity::$kind(e)
                }
            }
        )+
    };
}

entity_kinds!(Camera, Graph, Moon, Platform, Player, PlayerSpawn, SweatDrop);

impl Entity {
    pub fn id(&self) -> EntityId {
        self.data().id()
    }

    pub fn node(&self) -> &Node {
        self.data().node()
    }

    pub fn node_mut(&mut self) -> &mut Node {
        self.data_mut().node_mut()
    }

    pub fn rect(&self) -> Rect {
        self.data().rect()
    }

    pub fn z_index(&self) -> i32 {
        self.node().z_index
    }

    /// Typed view of this entity
    pub fn as_kind<T: EntityType>(&self) -> Option<&T> {
        T::from_entity(self)
    }

    pub fn as_kind_mut<T: EntityType>(&mut self) -> Option<&mut T> {
        T::from_entity_mut(self)
    }
}
