use seagull_son::entities::*;
use seagull_son::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn field_of_height(height: f32) -> Playfield {
    Playfield { width: 800.0, height }
}

#[test]
fn chimney_barriers_fill_the_field_exactly() {
    for height in [10.0, 50.0, 120.0, 240.0, 600.0, 1080.0, 2160.0] {
        let field = field_of_height(height);
        let gap = chimney_gap(&field);
        let mut rng = StdRng::seed_from_u64(height as u64);
        for _ in 0..500 {
            let o = spawn_chimney(&mut rng, &field);
            let ObstacleKind::Chimney { top, bottom } = o.kind else {
                panic!("spawn_chimney produced {:?}", o.kind);
            };
            assert!(top >= 0.0, "top {top} at height {height}");
            assert!(bottom >= 0.0, "bottom {bottom} at height {height}");
            assert!(
                (top + gap + bottom - height).abs() < 1e-3,
                "top {top} + gap {gap} + bottom {bottom} != {height}"
            );
        }
    }
}

#[test]
fn chimney_keeps_the_margin_on_a_normal_field() {
    let field = field_of_height(600.0);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let ObstacleKind::Chimney { top, bottom } = spawn_chimney(&mut rng, &field).kind else {
            unreachable!()
        };
        assert!(top >= 50.0 - 1e-3);
        assert!(bottom >= 50.0 - 1e-3);
    }
}

#[test]
fn chimney_gap_is_a_fixed_fraction() {
    assert!((chimney_gap(&field_of_height(700.0)) - 200.0).abs() < 1e-4);
}

#[test]
fn crabs_cling_to_ceiling_or_floor() {
    let field = field_of_height(600.0);
    let mut rng = StdRng::seed_from_u64(3);
    let (mut ceiling, mut floor) = (0, 0);
    for _ in 0..1_000 {
        let o = spawn_crab(&mut rng, &field);
        assert_eq!(o.x, 800.0);
        assert_eq!(o.width, 40.0);
        match o.kind {
            ObstacleKind::Crab { anchor: Anchor::Ceiling, y, height } => {
                assert_eq!(y, 0.0);
                assert_eq!(height, 30.0);
                ceiling += 1;
            }
            ObstacleKind::Crab { anchor: Anchor::Floor, y, .. } => {
                assert_eq!(y, 570.0);
                floor += 1;
            }
            ObstacleKind::Chimney { .. } => panic!("crab spawner made a chimney"),
        }
    }
    // Roughly even split
    assert!(ceiling > 400 && floor > 400, "ceiling {ceiling}, floor {floor}");
}

#[test]
fn obstacle_mix_favours_chimneys() {
    let field = field_of_height(600.0);
    let mut rng = StdRng::seed_from_u64(11);
    let chimneys = (0..2_000)
        .filter(|_| matches!(spawn_obstacle(&mut rng, &field).kind, ObstacleKind::Chimney { .. }))
        .count();
    // ~60%
    assert!((1_080..=1_320).contains(&chimneys), "chimneys {chimneys}");
}

#[test]
fn power_ups_stay_in_the_middle_band() {
    let field = field_of_height(600.0);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1_000 {
        let p = spawn_power_up(&mut rng, &field);
        assert!(p.y >= 120.0 && p.y <= 480.0, "y = {}", p.y);
        assert_eq!(p.x, 800.0);
        assert_eq!((p.width, p.height), (25.0, 35.0));
    }
}

#[test]
fn cadence_predicates() {
    let obstacles: Vec<u64> = (1..=300).filter(|&f| obstacle_due(f)).collect();
    let power_ups: Vec<u64> = (1..=300).filter(|&f| power_up_due(f)).collect();
    assert_eq!(obstacles, vec![90, 180, 270]);
    assert_eq!(power_ups, vec![150, 300]);
}
