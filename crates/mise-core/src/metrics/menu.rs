//! Menu engineering matrix: items are placed by popularity and contribution
//! relative to the menu averages.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClass {
    Star,
    PlowHorse,
    Puzzle,
    Dog,
}

impl MenuClass {
    pub fn label(self) -> &'static str {
        match self {
            MenuClass::Star => "star",
            MenuClass::PlowHorse => "plow horse",
            MenuClass::Puzzle => "puzzle",
            MenuClass::Dog => "dog",
        }
    }
}

impl fmt::Display for MenuClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItemFigures {
    pub popularity: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuAnalysis {
    pub average_popularity: f64,
    pub average_contribution: f64,
    pub classes: Vec<MenuClass>,
}

/// Classifies every item; values at the average count as high.
pub fn classify_items(items: &[MenuItemFigures]) -> MenuAnalysis {
    if items.is_empty() {
        return MenuAnalysis {
            average_popularity: 0.0,
            average_contribution: 0.0,
            classes: Vec::new(),
        };
    }
    let count = items.len() as f64;
    let average_popularity = items.iter().map(|item| item.popularity).sum::<f64>() / count;
    let average_contribution = items.iter().map(|item| item.contribution).sum::<f64>() / count;
    let classes = items
        .iter()
        .map(|item| {
            match (
                item.popularity >= average_popularity,
                item.contribution >= average_contribution,
            ) {
                (true, true) => MenuClass::Star,
                (true, false) => MenuClass::PlowHorse,
                (false, true) => MenuClass::Puzzle,
                (false, false) => MenuClass::Dog,
            }
        })
        .collect();
    MenuAnalysis {
        average_popularity,
        average_contribution,
        classes,
    }
}
