use crate::catalog::{Card, Condition, Rarity};

/// Sort keys offered by the collection view, in select-value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    PriceLowHigh,
    PriceHighLow,
    Rarity,
}

impl SortKey {
    /// Parses the `<select>` value; unknown values fall back to name order.
    pub fn from_value(value: &str) -> SortKey {
        match value {
            "price-low" => SortKey::PriceLowHigh,
            "price-high" => SortKey::PriceHighLow,
            "rarity" => SortKey::Rarity,
            _ => SortKey::Name,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLowHigh => "price-low",
            SortKey::PriceHighLow => "price-high",
            SortKey::Rarity => "rarity",
        }
    }
}

/// Current search/filter/sort parameters for the collection view.
/// `None` on the select fields means the "all" sentinel is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    pub search: String,
    pub card_type: Option<String>,
    pub rarity: Option<Rarity>,
    pub condition: Option<Condition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl Criteria {
    pub fn matches(&self, card: &Card) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || card.name.to_lowercase().contains(&term)
            || card.set.to_lowercase().contains(&term);

        let matches_type = self
            .card_type
            .as_ref()
            .map_or(true, |t| &card.card_type == t);
        let matches_rarity = self.rarity.map_or(true, |r| card.rarity == r);
        let matches_condition = self.condition.map_or(true, |c| card.condition == c);
        let matches_min = self.min_price.map_or(true, |min| card.price >= min);
        let matches_max = self.max_price.map_or(true, |max| card.price <= max);

        matches_search
            && matches_type
            && matches_rarity
            && matches_condition
            && matches_min
            && matches_max
    }
}

/// Parses a price-bound text field. Anything that is not a finite number
/// means the bound is unset, never an error.
pub fn parse_bound(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Derives the filtered, sorted view of the catalog. The source slice is
/// never mutated; the whole result set is materialised (the catalog is
/// small and fixed).
pub fn filter_and_sort<'a>(cards: &'a [Card], criteria: &Criteria) -> Vec<&'a Card> {
    let mut filtered: Vec<&Card> = cards.iter().filter(|card| criteria.matches(card)).collect();

    // sort_by is stable, so price ties keep catalog order.
    match criteria.sort {
        SortKey::Name => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLowHigh => {
            filtered.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::PriceHighLow => {
            filtered.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::Rarity => {
            filtered.sort_by(|a, b| b.rarity.cmp(&a.rarity));
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn empty_criteria_keeps_every_card() {
        let catalog = catalog();
        let result = filter_and_sort(catalog.cards(), &Criteria::default());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_set() {
        let catalog = catalog();
        let mut criteria = Criteria {
            search: "CHAR".to_string(),
            ..Criteria::default()
        };
        let by_name = filter_and_sort(catalog.cards(), &criteria);
        assert!(by_name.iter().any(|card| card.name == "Charizard"));

        criteria.search = "team rocket".to_string();
        let by_set = filter_and_sort(catalog.cards(), &criteria);
        assert_eq!(by_set.len(), 1);
        assert_eq!(by_set[0].name, "Gyarados");
    }

    #[test]
    fn rarity_filter_excludes_other_tiers() {
        let catalog = catalog();
        let criteria = Criteria {
            rarity: Some(Rarity::Common),
            ..Criteria::default()
        };
        let result = filter_and_sort(catalog.cards(), &criteria);
        // Charizard is Ultra Rare, so a Common filter must drop it.
        assert!(result.iter().all(|card| card.rarity == Rarity::Common));
        assert!(!result.iter().any(|card| card.name == "Charizard"));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = catalog();
        let criteria = Criteria {
            search: "base".to_string(),
            card_type: Some("Psychic".to_string()),
            condition: Some(Condition::Mint),
            ..Criteria::default()
        };
        let result = filter_and_sort(catalog.cards(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Mewtwo");

        // Every excluded card violates at least one active predicate.
        for card in catalog.cards() {
            if !result.iter().any(|kept| kept.id == card.id) {
                assert!(!criteria.matches(card));
            }
        }
    }

    #[test]
    fn price_bounds_are_independent() {
        let catalog = catalog();
        let min_only = Criteria {
            min_price: Some(100.0),
            ..Criteria::default()
        };
        for card in filter_and_sort(catalog.cards(), &min_only) {
            assert!(card.price >= 100.0);
        }

        let max_only = Criteria {
            max_price: Some(100.0),
            ..Criteria::default()
        };
        for card in filter_and_sort(catalog.cards(), &max_only) {
            assert!(card.price <= 100.0);
        }

        let both = Criteria {
            min_price: Some(50.0),
            max_price: Some(200.0),
            ..Criteria::default()
        };
        for card in filter_and_sort(catalog.cards(), &both) {
            assert!(card.price >= 50.0 && card.price <= 200.0);
        }
    }

    #[test]
    fn name_sort_is_non_decreasing() {
        let catalog = catalog();
        let criteria = Criteria {
            sort: SortKey::Name,
            ..Criteria::default()
        };
        let result = filter_and_sort(catalog.cards(), &criteria);
        for pair in result.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn price_sorts_order_numerically() {
        let catalog = catalog();
        let ascending = filter_and_sort(
            catalog.cards(),
            &Criteria {
                sort: SortKey::PriceLowHigh,
                ..Criteria::default()
            },
        );
        for pair in ascending.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }

        let descending = filter_and_sort(
            catalog.cards(),
            &Criteria {
                sort: SortKey::PriceHighLow,
                ..Criteria::default()
            },
        );
        for pair in descending.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn rarity_sort_groups_higher_tiers_first() {
        let catalog = catalog();
        let result = filter_and_sort(
            catalog.cards(),
            &Criteria {
                sort: SortKey::Rarity,
                ..Criteria::default()
            },
        );
        for pair in result.windows(2) {
            assert!(pair[0].rarity >= pair[1].rarity);
        }
    }

    #[test]
    fn malformed_bounds_are_treated_as_unset() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("12abc"), None);
        assert_eq!(parse_bound("NaN"), None);
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound(" 42.5 "), Some(42.5));
    }

    #[test]
    fn sort_key_parses_select_values() {
        assert_eq!(SortKey::from_value("name"), SortKey::Name);
        assert_eq!(SortKey::from_value("price-low"), SortKey::PriceLowHigh);
        assert_eq!(SortKey::from_value("price-high"), SortKey::PriceHighLow);
        assert_eq!(SortKey::from_value("rarity"), SortKey::Rarity);
        assert_eq!(SortKey::from_value("garbage"), SortKey::Name);
    }
}
