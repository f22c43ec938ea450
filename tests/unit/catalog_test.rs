//! Unit tests for the built-in catalog and the visibility predicate

use hairstyle_studio::catalog::filter::{Filter, StyleQuery};
use hairstyle_studio::catalog::{Catalog, Gender, HairColor, HairLength};

#[test]
fn test_gender_filter_over_builtin_catalog() {
    let catalog = Catalog::builtin().unwrap();

    for gender in Gender::SELECTABLE {
        let visible: Vec<_> = StyleQuery::new(gender)
            .apply(catalog)
            .into_iter()
            .map(|s| s.id.clone())
            .collect();

        for style in catalog.iter() {
            let expected = style.gender == gender || style.gender == Gender::Unisex;
            assert_eq!(
                visible.contains(&style.id),
                expected,
                "style {} under {:?}",
                style.id,
                gender
            );
        }
    }
}

#[test]
fn test_filters_are_intersection() {
    let catalog = Catalog::builtin().unwrap();
    let lengths = [Filter::All]
        .into_iter()
        .chain(HairLength::ALL.into_iter().map(Filter::Only));
    let lengths: Vec<_> = lengths.collect();
    let colors: Vec<_> = [Filter::All]
        .into_iter()
        .chain(HairColor::ALL.into_iter().map(Filter::Only))
        .collect();

    for gender in Gender::SELECTABLE {
        let base = StyleQuery::new(gender).apply(catalog);
        for length in &lengths {
            for color in &colors {
                let query = StyleQuery {
                    gender,
                    length: *length,
                    color: *color,
                };
                let expected: Vec<_> = base
                    .iter()
                    .filter(|s| length.accepts(&s.length) && color.accepts(&s.color))
                    .map(|s| s.id.as_str())
                    .collect();
                let actual: Vec<_> = query.apply(catalog).iter().map(|s| s.id.as_str()).collect();
                assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn test_all_filters_are_identity() {
    let catalog = Catalog::builtin().unwrap();
    let query = StyleQuery::new(Gender::Male);
    assert_eq!(query.length, Filter::All);
    assert_eq!(query.color, Filter::All);
    assert_eq!(
        query.apply(catalog).len(),
        catalog
            .iter()
            .filter(|s| s.gender != Gender::Female)
            .count()
    );
}

#[test]
fn test_builtin_ids_are_unique_and_prompted() {
    let catalog = Catalog::builtin().unwrap();
    let mut ids: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
    assert!(catalog.iter().all(|s| !s.prompt.trim().is_empty()));
}
