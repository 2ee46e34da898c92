//! Piece catalog tests

use blockfit::core::pieces::catalog;
use blockfit::core::{random_shape, shape_by_name, shapes_for, SimpleRng};
use blockfit::types::{Difficulty, MAX_SHAPE_CELLS};

#[test]
fn test_catalog_shapes_are_well_formed() {
    assert_eq!(catalog().len(), 16);
    for shape in catalog() {
        assert!(shape.is_well_formed(), "{} is malformed", shape.name);
        assert!(shape.cell_count() <= MAX_SHAPE_CELLS);
    }
}

#[test]
fn test_shape_names_are_unique() {
    for (i, a) in catalog().iter().enumerate() {
        for b in &catalog()[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn test_tier_pools_are_supersets() {
    let easy = shapes_for(Difficulty::Easy);
    let medium = shapes_for(Difficulty::Medium);
    let hard = shapes_for(Difficulty::Hard);
    assert_eq!((easy.len(), medium.len(), hard.len()), (7, 12, 16));

    for shape in easy {
        assert!(medium.contains(shape));
    }
    for shape in medium {
        assert!(hard.contains(shape));
    }
}

#[test]
fn test_tier_pools_respect_min_difficulty() {
    for tier in Difficulty::ALL {
        for shape in shapes_for(tier) {
            assert!(shape.min_difficulty <= tier, "{} in {:?}", shape.name, tier);
        }
    }
    // Pools are identical across calls
    assert_eq!(shapes_for(Difficulty::Medium), shapes_for(Difficulty::Medium));
}

#[test]
fn test_random_shape_stays_in_pool() {
    let mut rng = SimpleRng::new(2024);
    for tier in Difficulty::ALL {
        let pool = shapes_for(tier);
        for _ in 0..200 {
            let shape = random_shape(tier, &mut rng);
            assert!(pool.contains(shape));
        }
    }
}

#[test]
fn test_random_shape_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(77);
    let mut b = SimpleRng::new(77);
    for _ in 0..50 {
        assert_eq!(
            random_shape(Difficulty::Hard, &mut a).name,
            random_shape(Difficulty::Hard, &mut b).name
        );
    }
}

#[test]
fn test_hard_pool_eventually_deals_every_shape() {
    let mut rng = SimpleRng::new(5);
    let mut seen = [false; 16];
    for _ in 0..2000 {
        let shape = random_shape(Difficulty::Hard, &mut rng);
        let idx = catalog().iter().position(|s| s == shape).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_center_of_catalog_shapes() {
    assert_eq!(shape_by_name("Single").unwrap().center(), (0.0, 0.0));
    assert_eq!(shape_by_name("Square2x2").unwrap().center(), (0.5, 0.5));
    assert_eq!(shape_by_name("Line5_H").unwrap().center(), (2.0, 0.0));
    assert_eq!(shape_by_name("Square3x3").unwrap().extent(), (3, 3));
}

#[test]
fn test_unknown_name_is_none() {
    assert!(shape_by_name("Tetromino_S").is_none());
}
