use seagull_son::collision::*;
use seagull_son::entities::*;

fn field() -> Playfield {
    Playfield::default() // 800 × 600
}

/// A player whose hit circle is centred on (`cx`, `cy`).
fn player_centred_at(cx: f32, cy: f32) -> Player {
    let mut p = Player::new(&field());
    p.x = cx - p.size / 2.0;
    p.y = cy;
    p
}

fn chimney_with_top(x: f32, top: f32) -> Obstacle {
    let gap = field().height / 3.5;
    Obstacle {
        x,
        width: 60.0,
        speed: 5.0,
        kind: ObstacleKind::Chimney { top, bottom: field().height - top - gap },
    }
}

fn crab(x: f32, anchor: Anchor) -> Obstacle {
    let y = match anchor {
        Anchor::Ceiling => 0.0,
        Anchor::Floor => field().height - 30.0,
    };
    Obstacle {
        x,
        width: 40.0,
        speed: 5.0,
        kind: ObstacleKind::Crab { anchor, y, height: 30.0 },
    }
}

// ── Chimneys ──────────────────────────────────────────────────────────────────

#[test]
fn chimney_hit_matches_vertical_extent_rule() {
    let c = chimney_with_top(100.0, 100.0);
    let ObstacleKind::Chimney { top, bottom } = c.kind else {
        unreachable!()
    };
    let r = 15.0;
    let mut y = 0.0;
    while y <= 600.0 {
        let p = player_centred_at(130.0, y);
        let expected = y - r < top || y + r > field().height - bottom;
        assert_eq!(obstacle_hits(&c, &p, &field()), expected, "y = {y}");
        y += 0.5;
    }
}

#[test]
fn chimney_edges_of_the_gap() {
    let c = chimney_with_top(100.0, 100.0);
    // Exactly touching the upper barrier is not a hit; crossing it is
    assert!(!obstacle_hits(&c, &player_centred_at(130.0, 115.0), &field()));
    assert!(obstacle_hits(&c, &player_centred_at(130.0, 114.0), &field()));
    // Middle of the gap is safe
    assert!(!obstacle_hits(&c, &player_centred_at(130.0, 185.0), &field()));
    // Deep in the lower barrier
    assert!(obstacle_hits(&c, &player_centred_at(130.0, 400.0), &field()));
}

#[test]
fn chimney_ignored_outside_its_columns() {
    let c = chimney_with_top(100.0, 100.0);
    // Would be inside the barrier vertically, but horizontally clear
    assert!(!obstacle_hits(&c, &player_centred_at(99.0, 20.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(161.0, 20.0), &field()));
    // Span is open at both ends
    assert!(!obstacle_hits(&c, &player_centred_at(100.0, 20.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(160.0, 20.0), &field()));
    assert!(obstacle_hits(&c, &player_centred_at(100.5, 20.0), &field()));
}

// ── Crabs ─────────────────────────────────────────────────────────────────────

#[test]
fn ceiling_crab() {
    let c = crab(100.0, Anchor::Ceiling); // occupies y 0..30
    assert!(obstacle_hits(&c, &player_centred_at(120.0, 40.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(120.0, 45.0), &field()));
    // A ceiling crab never reaches the floor
    assert!(!obstacle_hits(&c, &player_centred_at(120.0, 585.0), &field()));
}

#[test]
fn floor_crab() {
    let c = crab(100.0, Anchor::Floor); // occupies y 570..600
    assert!(obstacle_hits(&c, &player_centred_at(120.0, 556.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(120.0, 555.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(120.0, 15.0), &field()));
}

#[test]
fn crab_ignored_outside_its_columns() {
    let c = crab(100.0, Anchor::Floor);
    assert!(!obstacle_hits(&c, &player_centred_at(141.0, 585.0), &field()));
    assert!(!obstacle_hits(&c, &player_centred_at(100.0, 585.0), &field()));
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn power_up_box_overlap() {
    // Player box (495, 290, 30, 30)
    let mut p = Player::new(&field());
    p.x = 495.0;
    p.y = 305.0;
    assert_eq!(p.bounds(), (495.0, 290.0, 30.0, 30.0));

    let mut fries = PowerUp { x: 500.0, y: 300.0, width: 25.0, height: 35.0, speed: 5.0 };
    assert!(power_up_hits(&fries, &p));

    fries.x = 600.0;
    assert!(!power_up_hits(&fries, &p));
}

#[test]
fn power_up_uses_the_full_box_not_the_circle() {
    // Touching the bird's bounding-box corner counts, even though that
    // corner is outside its hit circle.
    let p = player_centred_at(215.0, 300.0); // box (200, 285, 30, 30)
    let corner = PowerUp { x: 230.0, y: 315.0, width: 25.0, height: 35.0, speed: 5.0 };
    assert!(power_up_hits(&corner, &p));
}

#[test]
fn rect_rect_examples() {
    assert!(rect_rect((495.0, 290.0, 30.0, 30.0), (500.0, 300.0, 25.0, 35.0)));
    assert!(!rect_rect((495.0, 290.0, 30.0, 30.0), (600.0, 300.0, 25.0, 35.0)));
    assert!(!rect_rect((0.0, 0.0, 10.0, 10.0), (0.0, 20.0, 10.0, 10.0)));
}
