/// Pure game-logic functions.
///
/// `tick` takes an immutable reference to the current `World` and returns a
/// brand-new `World` advanced by one frame.  The per-phase helpers
/// (`step_kinematics`, `resolve_collisions`, `scroll_camera`) mutate a
/// scratch copy in frame order and are public so tests can drive each phase
/// on its own.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Entity, Facing, GamePhase, Kind, World, BACKGROUND_WIDTH, COIN_SCORE, SCREEN_HEIGHT,
    SCROLL_LEFT_EDGE, SCROLL_RIGHT_EDGE, SPAWN_MAX_X, SPAWN_MIN_X, SPAWN_THRESHOLD, SPAWN_Y,
    STOMP_SCORE, STOMP_TOLERANCE,
};
use crate::input::Intent;

// ── Level layout ──────────────────────────────────────────────────────────────

fn authored_zombies() -> Vec<Entity> {
    [400.0, 500.0, 550.0, 575.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0, 1800.0]
        .iter()
        .map(|&x| Entity::zombie(x, SCREEN_HEIGHT - 70.0))
        .collect()
}

fn authored_platforms() -> Vec<Entity> {
    vec![
        Entity::platform(100.0, SCREEN_HEIGHT - 100.0, 150.0, 20.0),
        Entity::platform(500.0, SCREEN_HEIGHT - 100.0, 150.0, 20.0),
        Entity::platform(900.0, SCREEN_HEIGHT - 100.0, 150.0, 20.0),
        Entity::platform(1300.0, SCREEN_HEIGHT - 100.0, 150.0, 20.0),
        Entity::platform(1700.0, SCREEN_HEIGHT - 100.0, 150.0, 20.0),
        Entity::platform(1900.0, SCREEN_HEIGHT - 150.0, 200.0, 20.0),
        Entity::platform(2100.0, SCREEN_HEIGHT - 200.0, 150.0, 20.0),
        Entity::platform(2300.0, SCREEN_HEIGHT - 250.0, 150.0, 20.0),
        Entity::platform(2500.0, SCREEN_HEIGHT - 300.0, 150.0, 20.0),
    ]
}

fn authored_coins() -> Vec<Entity> {
    [
        (200.0, 150.0),
        (300.0, 200.0),
        (500.0, 50.0),
        (700.0, 100.0),
        (900.0, 150.0),
        (1100.0, 200.0),
        (1300.0, 50.0),
        (1500.0, 100.0),
        (1700.0, 150.0),
        (1900.0, 200.0),
        (2100.0, 50.0),
        (2300.0, 100.0),
        (2500.0, 150.0),
    ]
    .iter()
    .map(|&(x, rise)| Entity::coin(x, SCREEN_HEIGHT - rise))
    .collect()
}

/// Build the initial world for a fresh session.
pub fn init_world() -> World {
    World {
        player: Entity::player(100.0, SCREEN_HEIGHT - 70.0),
        hazards: authored_zombies(),
        blocks: authored_platforms(),
        pickups: authored_coins(),
        tiles: [0.0, BACKGROUND_WIDTH],
        scroll_offset: 0.0,
        score: 0,
        pickups_banked: 0,
        phase: GamePhase::Playing,
        frame: 0,
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

/// Integrate the player and every patrolling hazard by one frame.
pub fn step_kinematics(world: &mut World, intent: Intent) {
    step_player(&mut world.player, intent);
    for hazard in &mut world.hazards {
        step_hazard(hazard);
    }
}

/// One Euler step for the player: instantaneous horizontal velocity from
/// intent, grounded-only jump, asymmetric gravity, then a floor clamp.
pub fn step_player(player: &mut Entity, intent: Intent) {
    let Kind::Player(state) = &mut player.kind else {
        return;
    };

    player.vel.x = if intent.left {
        -state.speed
    } else if intent.right {
        state.speed
    } else {
        0.0
    };
    if player.vel.x < 0.0 {
        player.facing = Facing::Left;
    } else if player.vel.x > 0.0 {
        player.facing = Facing::Right;
    }

    // No double-jump, no input buffering: only a grounded player launches.
    if state.on_ground && intent.jump {
        player.vel.y = state.jump_speed;
        state.on_ground = false;
    }

    if player.vel.y < 0.0 {
        player.vel.y += state.gravity_up;
    } else {
        player.vel.y += state.gravity_down;
    }

    player.body.x += player.vel.x;
    player.body.y += player.vel.y;

    if player.body.bottom() >= SCREEN_HEIGHT {
        player.body.set_bottom(SCREEN_HEIGHT);
        player.vel.y = 0.0;
        state.on_ground = true;
    }
}

/// Patrol step: march by `vel.x * direction`, snap to the bound that was
/// crossed and reverse.  Hazards take no gravity.
pub fn step_hazard(hazard: &mut Entity) {
    let Kind::Hazard(patrol) = &mut hazard.kind else {
        return;
    };

    hazard.body.x += hazard.vel.x * patrol.direction;

    if hazard.body.x <= patrol.left {
        hazard.body.x = patrol.left;
        patrol.direction = 1.0;
    } else if hazard.body.x >= patrol.right {
        hazard.body.x = patrol.right;
        patrol.direction = -1.0;
    }

    hazard.facing = if patrol.direction < 0.0 {
        Facing::Left
    } else {
        Facing::Right
    };
}

// ── Collision resolution ──────────────────────────────────────────────────────

/// Resolve all overlaps for this frame: platforms, then zombies, then coins
/// (including the coin-threshold zombie spawn and the win check).
pub fn resolve_collisions(world: &mut World, rng: &mut impl Rng) {
    resolve_blocks(world);
    resolve_hazards(world);
    if world.phase == GamePhase::Lost {
        return;
    }
    resolve_pickups(world, rng);
}

/// One-way platforms: only a descending player whose bottom edge is still
/// above the platform's bottom edge lands.  Side and ceiling contacts pass
/// straight through.
fn resolve_blocks(world: &mut World) {
    let World { player, blocks, .. } = world;
    for block in blocks.iter() {
        if !player.body.overlaps(&block.body) {
            continue;
        }
        if player.vel.y > 0.0 && player.body.bottom() <= block.body.bottom() {
            player.vel.y = 0.0;
            player.body.set_bottom(block.body.y);
            if let Kind::Player(state) = &mut player.kind {
                state.on_ground = true;
            }
        }
    }
}

/// Stomp-or-die.  The stomp test runs first, so a borderline overlap favors
/// survival; any other contact loses the session.
fn resolve_hazards(world: &mut World) {
    let World { player, hazards, phase, score, .. } = world;

    let jump_speed = match &player.kind {
        Kind::Player(state) => state.jump_speed,
        _ => return,
    };

    // Mark stomped zombies during the scan, compact afterwards.
    for hazard in hazards.iter_mut().filter(|h| h.alive) {
        if !player.body.overlaps(&hazard.body) {
            continue;
        }
        let stomp =
            player.vel.y > 0.0 && player.body.bottom() <= hazard.body.y + STOMP_TOLERANCE;
        if stomp {
            hazard.alive = false;
            *score += STOMP_SCORE;
            player.vel.y = jump_speed;
        } else {
            *phase = GamePhase::Lost;
        }
    }

    hazards.retain(|h| h.alive);
}

/// Collect overlapped coins, bank them toward the zombie-spawn threshold,
/// then check the win condition.
fn resolve_pickups(world: &mut World, rng: &mut impl Rng) {
    let World { player, pickups, score, pickups_banked, .. } = world;

    let mut collected = 0u32;
    for coin in pickups.iter_mut().filter(|c| c.alive) {
        if player.body.overlaps(&coin.body) {
            coin.alive = false;
            collected += 1;
        }
    }
    pickups.retain(|c| c.alive);

    *score += collected * COIN_SCORE;
    *pickups_banked += collected;

    // Crossing the threshold several times in one frame spawns several
    // zombies; the difficulty ramps with greed.
    while world.pickups_banked >= SPAWN_THRESHOLD {
        world.pickups_banked -= SPAWN_THRESHOLD;
        let x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
        world.hazards.push(Entity::zombie(x, SPAWN_Y));
    }

    if world.pickups.is_empty() {
        world.phase = GamePhase::Won;
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

/// Shift both background tiles left by `delta`, wrapping any tile that
/// leaves the ±tile-width band back around by two tile widths.
pub fn wrap_tiles(tiles: &mut [f32; 2], delta: f32) {
    for tile in tiles.iter_mut() {
        *tile -= delta;
        if *tile < -BACKGROUND_WIDTH {
            *tile += BACKGROUND_WIDTH * 2.0;
        } else if *tile > BACKGROUND_WIDTH {
            *tile -= BACKGROUND_WIDTH * 2.0;
        }
    }
}

/// Scroll the world when the player pushes past the dead zone while a
/// directional key is held.  The scroll delta equals the player's current
/// run speed, so the camera keeps visual pace with the player, who is
/// clamped back to the dead-zone edge and appears to stand still.
///
/// Note: `scroll_offset` is clamped to the authored level bounds, but the
/// tile ring keeps wrapping off the raw delta regardless — the two are
/// intentionally independent.
pub fn scroll_camera(world: &mut World, intent: Intent) {
    let delta = world.player.vel.x;

    let scrolling = if intent.right && world.player.body.right() > SCROLL_RIGHT_EDGE {
        world.scroll_offset -= delta;
        world.player.body.x = SCROLL_RIGHT_EDGE - world.player.body.w;
        true
    } else if intent.left && world.player.body.x < SCROLL_LEFT_EDGE {
        world.scroll_offset += delta;
        world.player.body.x = SCROLL_LEFT_EDGE;
        true
    } else {
        false
    };

    if !scrolling {
        return;
    }

    world.scroll_offset = world.scroll_offset.clamp(-BACKGROUND_WIDTH, 0.0);

    for entity in world
        .hazards
        .iter_mut()
        .chain(world.blocks.iter_mut())
        .chain(world.pickups.iter_mut())
    {
        entity.body.x -= delta;
    }

    wrap_tiles(&mut world.tiles, delta);
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame: kinematics → collisions → camera.
/// Once the phase leaves `Playing`, nothing else moves that frame; the
/// session loop polls the returned phase for terminal transitions.  All
/// randomness comes through `rng` so callers control determinism.
pub fn tick(world: &World, intent: Intent, rng: &mut impl Rng) -> World {
    let mut next = world.clone();
    next.frame = world.frame + 1;

    if next.phase != GamePhase::Playing {
        return next;
    }

    step_kinematics(&mut next, intent);
    resolve_collisions(&mut next, rng);
    if next.phase != GamePhase::Playing {
        return next;
    }
    scroll_camera(&mut next, intent);

    next
}
