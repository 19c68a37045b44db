/// All game entity types — pure data, no logic.

// ── World dimensions & timing ─────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// One background tile spans exactly one screen.
pub const BACKGROUND_WIDTH: f32 = SCREEN_WIDTH;

/// Physics constants below are tuned against this fixed tick rate; nothing
/// is scaled by elapsed real time.
pub const FPS: u64 = 60;

// ── Player tuning ─────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 64.0;
pub const PLAYER_SPEED: f32 = 2.0;
/// Negative = upward.
pub const JUMP_SPEED: f32 = -15.0;
/// Gravity applied per frame while ascending (vy < 0).
pub const GRAVITY_UP: f32 = 1.0;
/// Gravity applied per frame while descending.  Deliberately weaker than
/// `GRAVITY_UP`: the jump tops out fast and floats back down.
pub const GRAVITY_DOWN: f32 = 0.25;

// ── Zombie tuning ─────────────────────────────────────────────────────────────

pub const ZOMBIE_WIDTH: f32 = 64.0;
pub const ZOMBIE_HEIGHT: f32 = 64.0;
pub const ZOMBIE_SPEED: f32 = 2.5;
/// Patrol range relative to the spawn x: [x - 250, x + 50].
pub const PATROL_BEHIND: f32 = 250.0;
pub const PATROL_AHEAD: f32 = 50.0;

// ── Coins & scoring ───────────────────────────────────────────────────────────

pub const COIN_SIZE: f32 = 32.0;
/// A landing counts as a stomp if the player's bottom edge is within this
/// many units below the zombie's top edge.
pub const STOMP_TOLERANCE: f32 = 10.0;
pub const STOMP_SCORE: u32 = 100;
pub const COIN_SCORE: u32 = 100;
/// Every N banked coins spawns one replacement zombie.
pub const SPAWN_THRESHOLD: u32 = 3;
pub const SPAWN_MIN_X: f32 = 100.0;
pub const SPAWN_MAX_X: f32 = 500.0;
pub const SPAWN_Y: f32 = 10.0;

// ── Camera dead zone ──────────────────────────────────────────────────────────

/// The player's right edge past this column starts a rightward scroll.
pub const SCROLL_RIGHT_EDGE: f32 = 600.0;
/// The player's left edge before this column starts a leftward scroll.
pub const SCROLL_LEFT_EDGE: f32 = 200.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned bounding box, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Aabb { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap — boxes that merely touch along an edge do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Move the box so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Which way a sprite is drawn; flipped by horizontal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub on_ground: bool,
    pub speed: f32,
    pub jump_speed: f32,
    pub gravity_up: f32,
    pub gravity_down: f32,
}

/// Back-and-forth patrol between two x bounds.  `direction` is ±1.
#[derive(Clone, Debug, PartialEq)]
pub struct Patrol {
    pub left: f32,
    pub right: f32,
    pub direction: f32,
}

/// Per-kind state.  A single `Entity` type with a discriminant keeps
/// iteration over mixed collections (scrolling, rendering) trivial.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    Player(PlayerState),
    Hazard(Patrol),
    Pickup,
    Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub body: Aabb,
    pub vel: Vec2,
    pub kind: Kind,
    /// Dead entities are skipped by collision and render passes and swept
    /// out of the active set at the end of the resolution pass.
    pub alive: bool,
    pub facing: Facing,
}

impl Entity {
    pub fn player(x: f32, y: f32) -> Self {
        Entity {
            body: Aabb::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::default(),
            kind: Kind::Player(PlayerState {
                on_ground: true,
                speed: PLAYER_SPEED,
                jump_speed: JUMP_SPEED,
                gravity_up: GRAVITY_UP,
                gravity_down: GRAVITY_DOWN,
            }),
            alive: true,
            facing: Facing::Right,
        }
    }

    pub fn zombie(x: f32, y: f32) -> Self {
        Entity {
            body: Aabb::new(x, y, ZOMBIE_WIDTH, ZOMBIE_HEIGHT),
            vel: Vec2 { x: ZOMBIE_SPEED, y: 0.0 },
            kind: Kind::Hazard(Patrol {
                left: x - PATROL_BEHIND,
                right: x + PATROL_AHEAD,
                direction: 1.0,
            }),
            alive: true,
            facing: Facing::Right,
        }
    }

    pub fn coin(x: f32, y: f32) -> Self {
        Entity {
            body: Aabb::new(x, y, COIN_SIZE, COIN_SIZE),
            vel: Vec2::default(),
            kind: Kind::Pickup,
            alive: true,
            facing: Facing::Right,
        }
    }

    pub fn platform(x: f32, y: f32, w: f32, h: f32) -> Self {
        Entity {
            body: Aabb::new(x, y, w, h),
            vel: Vec2::default(),
            kind: Kind::Block,
            alive: true,
            facing: Facing::Right,
        }
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// In-game phase.  The start menu lives outside the world, in the session
/// loop; `Won` and `Lost` are terminal for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// Master game state for one session.  Cloneable so `tick` can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub player: Entity,
    /// Shrinks on stomps, grows on threshold spawns.
    pub hazards: Vec<Entity>,
    /// Fixed after construction (positions still shift with the camera).
    pub blocks: Vec<Entity>,
    /// Shrinks as coins are collected; empty = won.
    pub pickups: Vec<Entity>,
    /// Two-tile ring buffer of background x positions.
    pub tiles: [f32; 2],
    /// Cumulative camera displacement, clamped to [-BACKGROUND_WIDTH, 0].
    pub scroll_offset: f32,
    pub score: u32,
    /// Coins collected since the last zombie spawn.
    pub pickups_banked: u32,
    pub phase: GamePhase,
    pub frame: u64,
}
