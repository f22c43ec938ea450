//! Style visibility predicate over the catalog

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Gender, HairColor, HairLength, StyleOption};
use crate::error::AppError;

/// A per-field filter with an "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(v) => v.fmt(f),
        }
    }
}

impl<T: FromStr<Err = AppError>> FromStr for Filter<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// Active demographic plus the length and color filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleQuery {
    pub gender: Gender,
    pub length: Filter<HairLength>,
    pub color: Filter<HairColor>,
}

impl StyleQuery {
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            length: Filter::All,
            color: Filter::All,
        }
    }

    /// Unisex styles match every demographic
    pub fn matches(&self, style: &StyleOption) -> bool {
        let gender_match = style.gender == self.gender || style.gender == Gender::Unisex;
        gender_match && self.length.accepts(&style.length) && self.color.accepts(&style.color)
    }

    /// Visible styles, in catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a StyleOption> {
        catalog.iter().filter(|s| self.matches(s)).collect()
    }
}
