use zombie_jumper::entities::*;

// ── Aabb ──────────────────────────────────────────────────────────────────────

#[test]
fn aabb_edges() {
    let b = Aabb::new(10.0, 20.0, 40.0, 64.0);
    assert_eq!(b.right(), 50.0);
    assert_eq!(b.bottom(), 84.0);
}

#[test]
fn aabb_set_bottom_moves_the_top() {
    let mut b = Aabb::new(10.0, 20.0, 40.0, 64.0);
    b.set_bottom(600.0);
    assert_eq!(b.y, 536.0);
    assert_eq!(b.bottom(), 600.0);
}

#[test]
fn aabb_overlap_is_strict() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let apart = Aabb::new(20.0, 0.0, 10.0, 10.0);
    let touching = Aabb::new(10.0, 0.0, 10.0, 10.0);
    let crossing = Aabb::new(5.0, 5.0, 10.0, 10.0);
    let contained = Aabb::new(2.0, 2.0, 4.0, 4.0);

    assert!(!a.overlaps(&apart));
    assert!(!a.overlaps(&touching)); // shared edge is not contact
    assert!(a.overlaps(&crossing));
    assert!(crossing.overlaps(&a)); // symmetric
    assert!(a.overlaps(&contained));
}

#[test]
fn aabb_vertical_touch_is_not_overlap() {
    let floor_block = Aabb::new(0.0, 100.0, 50.0, 10.0);
    let resting = Aabb::new(0.0, 36.0, 40.0, 64.0); // bottom == 100
    assert!(!resting.overlaps(&floor_block));
}

// ── Constructors ──────────────────────────────────────────────────────────────

#[test]
fn player_constructor_tuning() {
    let p = Entity::player(100.0, 530.0);
    assert_eq!(p.body, Aabb::new(100.0, 530.0, PLAYER_WIDTH, PLAYER_HEIGHT));
    assert!(p.alive);
    assert_eq!(p.facing, Facing::Right);
    match p.kind {
        Kind::Player(state) => {
            assert!(state.on_ground);
            assert_eq!(state.speed, PLAYER_SPEED);
            assert_eq!(state.jump_speed, JUMP_SPEED);
            assert_eq!(state.gravity_up, GRAVITY_UP);
            assert_eq!(state.gravity_down, GRAVITY_DOWN);
        }
        other => panic!("expected a player, got {:?}", other),
    }
}

#[test]
fn zombie_patrol_bounds_derive_from_spawn_x() {
    let z = Entity::zombie(400.0, 530.0);
    assert_eq!(z.vel.x, ZOMBIE_SPEED);
    match z.kind {
        Kind::Hazard(patrol) => {
            assert_eq!(patrol.left, 400.0 - PATROL_BEHIND);
            assert_eq!(patrol.right, 400.0 + PATROL_AHEAD);
            assert_eq!(patrol.direction, 1.0);
        }
        other => panic!("expected a hazard, got {:?}", other),
    }
}

#[test]
fn coin_and_platform_constructors() {
    let c = Entity::coin(200.0, 450.0);
    assert_eq!(c.body, Aabb::new(200.0, 450.0, COIN_SIZE, COIN_SIZE));
    assert_eq!(c.kind, Kind::Pickup);

    let p = Entity::platform(100.0, 500.0, 150.0, 20.0);
    assert_eq!(p.body, Aabb::new(100.0, 500.0, 150.0, 20.0));
    assert_eq!(p.kind, Kind::Block);
    assert_eq!(p.vel, Vec2::default());
}

// ── World ─────────────────────────────────────────────────────────────────────

#[test]
fn world_clone_is_independent() {
    let original = World {
        player: Entity::player(100.0, 530.0),
        hazards: vec![Entity::zombie(400.0, 530.0)],
        blocks: vec![Entity::platform(100.0, 500.0, 150.0, 20.0)],
        pickups: vec![Entity::coin(200.0, 450.0)],
        tiles: [0.0, BACKGROUND_WIDTH],
        scroll_offset: 0.0,
        score: 0,
        pickups_banked: 0,
        phase: GamePhase::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 999.0;
    cloned.score = 999;
    cloned.hazards.clear();
    cloned.phase = GamePhase::Lost;

    assert_eq!(original.player.body.x, 100.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.hazards.len(), 1);
    assert_eq!(original.phase, GamePhase::Playing);
}
