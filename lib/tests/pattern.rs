use rand::{rngs::StdRng, Rng, SeedableRng};
use rlifefind_lib::{Error, Grid, Orientation, Pattern};
use std::error::Error as StdError;

const GLIDER: &str = "x = 3, y = 3\nbo$2bo$3o!";

/// A glider heading south-east, wrapping around the edges.
fn glider_at(width: usize, height: usize, x: usize, y: usize) -> Pattern {
    let mut pattern = Pattern::new(width, height);
    for (dx, dy) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        pattern.set(x + dx, y + dy, true);
    }
    pattern
}

fn random_pattern(rng: &mut StdRng, width: usize, height: usize) -> Pattern {
    let mut pattern = Pattern::new(width, height);
    for y in 0..height {
        for x in 0..width {
            pattern.set(x, y, rng.gen_bool(0.4));
        }
    }
    pattern
}

/// Cell by cell, without any bit tricks.
fn naive_advance(pattern: &Pattern) -> Pattern {
    let (width, height) = (pattern.width(), pattern.height());
    let mut next = Pattern::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut count = 0;
            for (i, dy) in [height - 1, 0, 1].into_iter().enumerate() {
                for (j, dx) in [width - 1, 0, 1].into_iter().enumerate() {
                    if (i, j) != (1, 1) && pattern.get(x + dx, y + dy) {
                        count += 1;
                    }
                }
            }
            next.set(x, y, count == 3 || (count == 2 && pattern.get(x, y)));
        }
    }
    next
}

#[test]
fn advance_matches_naive() {
    let mut rng = StdRng::seed_from_u64(23);
    for &(width, height) in &[
        (1, 1),
        (1, 5),
        (5, 1),
        (2, 3),
        (8, 8),
        (63, 5),
        (64, 7),
        (65, 9),
        (130, 4),
    ] {
        let mut pattern = random_pattern(&mut rng, width, height);
        for _ in 0..4 {
            let next = pattern.advance();
            assert_eq!(next, naive_advance(&pattern), "{}x{}", width, height);
            pattern = next;
        }
    }
}

#[test]
fn glider_moves() -> Result<(), Box<dyn StdError>> {
    for &(width, height) in &[(8, 8), (64, 6), (65, 7), (129, 10)] {
        let mut glider = Pattern::new(width, height);
        glider.stamp(&GLIDER.parse()?, 1, 1)?;
        assert_eq!(glider, glider_at(width, height, 1, 1));
        assert_eq!(glider.advance_by(4), glider_at(width, height, 2, 2));
        assert_eq!(glider.advance().population(), 5);
    }
    Ok(())
}

#[test]
fn glider_crosses_words_and_edges() {
    // Starts right before a word boundary and wraps around the right edge.
    let glider = glider_at(65, 8, 61, 0);
    assert_eq!(glider.advance_by(8), glider_at(65, 8, 63, 2));
    assert_eq!(glider.advance_by(32), glider_at(65, 8, 69, 8));

    // A whole lap around a small torus.
    let glider = glider_at(8, 8, 2, 3);
    assert_eq!(glider.advance_by(32), glider);
}

#[test]
fn block_is_stable() -> Result<(), Box<dyn StdError>> {
    for &(width, height) in &[(4, 4), (64, 4), (65, 5)] {
        let mut block = Pattern::new(width, height);
        block.stamp(&"x = 2, y = 2\n2o$2o!".parse()?, width - 3, 1)?;
        assert_eq!(block.advance(), block);
    }
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn StdError>> {
    let mut blinker = Pattern::new(5, 5);
    blinker.stamp(&"x = 3, y = 1\n3o!".parse()?, 1, 2)?;
    let next = blinker.advance();
    assert_ne!(next, blinker);
    assert_eq!(next, blinker.transformed(Orientation::ROTATE_90));
    assert_eq!(next.advance(), blinker);
    Ok(())
}

#[test]
fn empty_stays_empty() {
    let pattern = Pattern::new(70, 3);
    assert!(pattern.advance().is_empty());
}

#[test]
fn clear() -> Result<(), Box<dyn StdError>> {
    let mut pattern: Pattern = "x = 4, y = 3\n4o$4o$4o!".parse()?;
    pattern.clear(1, 1, 3, 2)?;
    assert_eq!(pattern.population(), 6);
    assert!(pattern.get(0, 2));
    assert!(!pattern.get(3, 2));
    assert_eq!(
        pattern.clear(2, 0, 3, 1),
        Err(Error::OutOfBounds {
            x: 2,
            y: 0,
            width: 3,
            height: 1
        })
    );
    assert!(pattern.clear(0, 3, 1, 1).is_err());
    Ok(())
}

#[test]
fn search() -> Result<(), Box<dyn StdError>> {
    let block: Pattern = "x = 4, y = 4\n$b2o$b2o!".parse()?;
    let mut pattern = Pattern::new(10, 8);
    pattern.stamp(&block, 5, 3)?;
    pattern.stamp(&block, 1, 0)?;
    assert_eq!(pattern.search(&block, 0, 0, 10, 8)?, Some((1, 0)));
    assert_eq!(pattern.search(&block, 2, 0, 8, 8)?, Some((5, 3)));
    assert_eq!(pattern.search(&block, 6, 3, 4, 5)?, None);
    assert_eq!(
        pattern.search(&block, 0, 0, 3, 8),
        Err(Error::TemplateTooLarge(4, 4, 3, 8))
    );
    assert!(pattern.search(&block, 8, 0, 4, 4).is_err());
    Ok(())
}

#[test]
fn stamp() -> Result<(), Box<dyn StdError>> {
    let mut pattern: Pattern = "x = 3, y = 3\no!".parse()?;
    pattern.stamp(&"x = 2, y = 2\nbo$o!".parse()?, 1, 1)?;
    assert_eq!(pattern, "x = 3, y = 3\no$2bo$bo!".parse::<Pattern>()?);
    // Living cells are never killed.
    pattern.stamp(&Pattern::new(3, 3), 0, 0)?;
    assert_eq!(pattern.population(), 3);
    assert!(pattern.stamp(&Pattern::new(2, 2), 2, 0).is_err());
    Ok(())
}

#[test]
fn wrapping_access() {
    let mut pattern = Pattern::new(5, 4);
    pattern.set(7, 9, true);
    assert!(pattern.get(2, 1));
    assert!(pattern.get(12, 5));
    assert_eq!(pattern.population(), 1);
}
