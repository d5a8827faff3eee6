use rand::{rngs::StdRng, Rng, SeedableRng};
use rlifefind_lib::{
    rle::{parse_header, read_rle, MAX_LINE_LENGTH},
    Error, Pattern, State, Template, MAX_CELLS,
};
use std::error::Error as StdError;

#[test]
fn read_glider() -> Result<(), Box<dyn StdError>> {
    let glider: Pattern = "#N Glider\n\
                           #C A comment.\n\
                           x = 3, y = 3, rule = B3/S23\n\
                           bo$2bo$3o!"
        .parse()?;
    assert_eq!((glider.width(), glider.height()), (3, 3));
    assert_eq!(glider.population(), 5);
    for &(x, y) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        assert!(glider.get(x, y));
    }
    assert!(!glider.get(0, 0));
    Ok(())
}

#[test]
fn read_multiline() -> Result<(), Box<dyn StdError>> {
    let pattern: Pattern = "x = 4, y = 2\n2b\n2o$\n\n4o\n!".parse()?;
    assert_eq!(pattern, "x = 4, y = 2\n2b2o$4o!".parse::<Pattern>()?);
    Ok(())
}

#[test]
fn header() {
    assert_eq!(parse_header("x = 3, y = 4"), Ok((3, 4)));
    assert_eq!(parse_header("x=12,y=1,rule=B36/S23"), Ok((12, 1)));
    assert_eq!(
        parse_header("x = 3"),
        Err(Error::InvalidHeader(String::from("x = 3")))
    );
    assert_eq!(
        parse_header("x = a, y = 3"),
        Err(Error::InvalidHeader(String::from("x = a, y = 3")))
    );
    assert_eq!(
        parse_header("x = -1, y = 3"),
        Err(Error::InvalidHeader(String::from("x = -1, y = 3")))
    );
    assert_eq!(
        parse_header("x = 3, z = 3"),
        Err(Error::InvalidHeader(String::from("x = 3, z = 3")))
    );
    assert_eq!(parse_header("x = 0, y = 3"), Err(Error::NonPositiveError));
    assert_eq!(parse_header("x = 3, y = 0"), Err(Error::NonPositiveError));
    assert_eq!(
        parse_header("x = 100000, y = 100000"),
        Err(Error::TooLarge(100000, 100000))
    );
}

#[test]
fn huge_header() {
    let widest = format!("x = {}, y = 1\no!", usize::MAX);
    assert_eq!(
        widest.parse::<Pattern>(),
        Err(Error::TooLarge(usize::MAX, 1))
    );
    assert_eq!(
        "x = 4294967295, y = 4294967295\nA!".parse::<Template>(),
        Err(Error::TooLarge(4294967295, 4294967295))
    );
    let limit = format!("x = {}, y = 2\n!", MAX_CELLS / 2 + 1);
    assert_eq!(
        limit.parse::<Template>(),
        Err(Error::TooLarge(MAX_CELLS / 2 + 1, 2))
    );
    assert_eq!(
        parse_header(&format!("x = {}, y = 1", MAX_CELLS)),
        Ok((MAX_CELLS, 1))
    );
}

#[test]
fn header_errors() {
    assert_eq!("o!".parse::<Pattern>(), Err(Error::MissingHeader));
    assert_eq!("".parse::<Pattern>(), Err(Error::MissingHeader));
    assert_eq!("#C nothing".parse::<Template>(), Err(Error::MissingHeader));
    assert_eq!(
        "x = 1, y = 1\nx = 1, y = 1\no!".parse::<Pattern>(),
        Err(Error::DuplicateHeader)
    );
    assert_eq!(
        "x = 0, y = 1\n!".parse::<Pattern>(),
        Err(Error::NonPositiveError)
    );
}

#[test]
fn wrapping_runs() -> Result<(), Box<dyn StdError>> {
    // A run longer than the row fills the row once.
    let pattern: Pattern = "x = 3, y = 2\n4o!".parse()?;
    assert_eq!(pattern.population(), 3);
    assert!(!pattern.get(0, 1));

    // The position after a long run wraps around.
    let pattern: Pattern = "x = 3, y = 2\n4bo!".parse()?;
    assert_eq!(pattern.population(), 1);
    assert!(pattern.get(1, 0));

    // So do the rows.
    let pattern: Pattern = "x = 2, y = 2\n3$o!".parse()?;
    assert_eq!(pattern.population(), 1);
    assert!(pattern.get(0, 1));
    Ok(())
}

#[test]
fn stop_at_bang() -> Result<(), Box<dyn StdError>> {
    let pattern: Pattern = "x = 2, y = 2\no!$2o\n2o!".parse()?;
    assert_eq!(pattern.population(), 1);
    Ok(())
}

#[test]
fn unknown_tags() -> Result<(), Box<dyn StdError>> {
    // Template tags in a pattern and pattern tags in a template are skipped.
    let pattern: Pattern = "x = 3, y = 1\noAo!".parse()?;
    assert!(pattern.get(0, 0) && pattern.get(1, 0) && !pattern.get(2, 0));
    let template: Template = "x = 3, y = 1\nAoA!".parse()?;
    assert_eq!(template.get(0, 0), State(1));
    assert_eq!(template.get(1, 0), State(1));
    assert_eq!(template.get(2, 0), State(0));
    Ok(())
}

#[test]
fn template_tags() -> Result<(), Box<dyn StdError>> {
    let template: Template = "x = 6, y = 2\n.AB2C$Z!".parse()?;
    let states = (0..5).map(|x| template.get(x, 0).0).collect::<Vec<_>>();
    assert_eq!(states, vec![0, 1, 2, 3, 3]);
    assert_eq!(template.get(5, 0), State(0));
    assert_eq!(template.get(0, 1), State(26));
    Ok(())
}

#[test]
fn write() -> Result<(), Box<dyn StdError>> {
    let glider: Pattern = "x = 3, y = 3\nbo$2bo$3o!".parse()?;
    assert_eq!(glider.to_rle(None), "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
    assert_eq!(glider.to_string(), glider.to_rle(None));

    let empty = Pattern::new(4, 2);
    assert_eq!(empty.to_rle(None), "x = 4, y = 2, rule = B3/S23\n!\n");

    let mut rows = Pattern::new(1, 4);
    rows.set(0, 0, true);
    rows.set(0, 3, true);
    assert_eq!(rows.to_rle(None), "x = 1, y = 4, rule = B3/S23\no3$o!\n");

    assert_eq!(
        glider.to_rle(Some("Glider\nFound by Richard K. Guy")),
        "#C Glider\n#C Found by Richard K. Guy\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n"
    );
    Ok(())
}

#[test]
fn write_long_lines() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pattern = Pattern::new(200, 30);
    for y in 0..30 {
        for x in 0..200 {
            pattern.set(x, y, rng.gen_bool(0.5));
        }
    }
    let rle = pattern.to_rle(None);
    assert!(rle.lines().all(|line| line.len() <= MAX_LINE_LENGTH));
    assert!(rle.lines().count() > 2);
    assert_eq!(rle.parse::<Pattern>()?, pattern);
    Ok(())
}

#[test]
fn read_write_random() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let width = rng.gen_range(1..100);
        let height = rng.gen_range(1..20);
        let mut pattern = Pattern::new(width, height);
        for y in 0..height {
            for x in 0..width {
                pattern.set(x, y, rng.gen_bool(0.3));
            }
        }
        let rle = pattern.to_rle(Some("random"));
        assert_eq!(read_rle::<Pattern, _, _>(rle.lines())?, pattern);
    }
    Ok(())
}
