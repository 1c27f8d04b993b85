//! Menu catalog: the fixed set of purchasable meals and their unit prices.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{self, Write};

use crate::config::ConfigError;
use crate::constants::{DEFAULT_MENU, MENU_HEADER};
use crate::numbers::format_price;
use crate::transcript::{PlainStyle, TranscriptStyle};

/// A single meal available on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Unit price in whole currency units
    pub price: f64,
}

impl MenuItem {
    /// Create an item, folding the name to its lookup form.
    #[must_use]
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: normalize_meal_name(name),
            price,
        }
    }
}

/// Read-only catalog of meals, kept in insertion order for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MenuItem>", into = "Vec<MenuItem>")]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

/// Fold user input or catalog keys into the form used for lookups.
#[must_use]
pub fn normalize_meal_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl MenuCatalog {
    /// Build a catalog from items; names are folded to lowercase.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| MenuItem::new(&item.name, item.price))
            .collect();
        Self { items }
    }

    /// Load a catalog from a JSON array of `{ "name", "price" }` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into menu items.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Price of a meal, matched case-insensitively after trimming.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        let key = normalize_meal_name(name);
        self.items
            .iter()
            .find(|item| item.name == key)
            .map(|item| item.price)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// `(name, price)` pairs in a stable order.
    pub fn list(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|item| (item.name.as_str(), item.price))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the catalog is usable for ordering.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty catalog, a blank or repeated meal name,
    /// or a price that is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.name.is_empty() {
                return Err(ConfigError::BlankMealName);
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateMeal {
                    name: item.name.clone(),
                });
            }
            if !item.price.is_finite() || item.price <= 0.0 {
                return Err(ConfigError::InvalidPrice {
                    name: item.name.clone(),
                    price: item.price,
                });
            }
        }
        Ok(())
    }

    /// Write the `Menu:` header and one `name: $price` line per meal.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_listing_styled(out, &PlainStyle)
    }

    /// Write the listing with a decorated header.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_listing_styled<W, S>(&self, out: &mut W, style: &S) -> io::Result<()>
    where
        W: Write,
        S: TranscriptStyle + ?Sized,
    {
        writeln!(out, "{}", style.menu_header(MENU_HEADER))?;
        for line in self.listing_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// `name: $price` lines in menu order, without the header.
    #[must_use]
    pub fn listing_lines(&self) -> Vec<String> {
        self.list()
            .map(|(name, price)| format!("{name}: ${}", format_price(price)))
            .collect()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_MENU
                .iter()
                .map(|(name, price)| MenuItem::new(name, *price)),
        )
    }
}

impl From<Vec<MenuItem>> for MenuCatalog {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}

impl From<MenuCatalog> for Vec<MenuItem> {
    fn from(catalog: MenuCatalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_meals() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup("meal1"), Some(10.0));
        assert_eq!(catalog.lookup("meal2"), Some(15.0));
        assert_eq!(catalog.lookup("meal3"), Some(20.0));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn lookup_folds_case_and_whitespace() {
        let catalog = MenuCatalog::default();
        for query in ["Meal1", " meal1 ", "MEAL1", "\tmeal1\n"] {
            assert_eq!(catalog.lookup(query), Some(10.0), "query {query:?}");
        }
        assert!(catalog.lookup("meal4").is_none());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let catalog = MenuCatalog::new([
            MenuItem::new("Soup", 4.5),
            MenuItem::new("Bread", 2.0),
            MenuItem::new("Stew", 12.0),
        ]);
        let names: Vec<&str> = catalog.list().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["soup", "bread", "stew"]);
        let again: Vec<&str> = catalog.list().map(|(name, _)| name).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn listing_uses_dollar_price_lines() {
        let catalog = MenuCatalog::new([MenuItem::new("meal1", 10.0), MenuItem::new("tea", 2.5)]);
        let mut out = Vec::new();
        catalog.write_listing(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Menu:\nmeal1: $10.0\ntea: $2.5\n");
    }

    #[test]
    fn from_json_folds_names() {
        let catalog =
            MenuCatalog::from_json(r#"[{"name":"Pasta","price":11.5},{"name":"SALAD","price":7}]"#)
                .unwrap();
        assert_eq!(catalog.lookup("pasta"), Some(11.5));
        assert_eq!(catalog.lookup("salad"), Some(7.0));
    }

    #[test]
    fn validate_rejects_duplicates_and_bad_prices() {
        let dup = MenuCatalog::new([MenuItem::new("meal1", 1.0), MenuItem::new("MEAL1", 2.0)]);
        assert_eq!(
            dup.validate(),
            Err(ConfigError::DuplicateMeal {
                name: "meal1".to_string()
            })
        );

        let free = MenuCatalog::new([MenuItem::new("water", 0.0)]);
        assert!(matches!(
            free.validate(),
            Err(ConfigError::InvalidPrice { .. })
        ));

        let empty = MenuCatalog::new(Vec::new());
        assert_eq!(empty.validate(), Err(ConfigError::EmptyMenu));

        let blank = MenuCatalog::new([MenuItem::new("   ", 3.0)]);
        assert_eq!(blank.validate(), Err(ConfigError::BlankMealName));
    }
}
