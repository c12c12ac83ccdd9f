use crate::config::ExploreConfig;
use crate::explore::filter::{normalize_query, FilterState};
use crate::models::Property;

/// Size of the featured strip
pub const FEATURED_LIMIT: usize = 3;
/// Size of the hot deals carousel
pub const HOT_DEALS_LIMIT: usize = 8;
/// Default size of the "similar homes" row on the detail page
pub const SIMILAR_LIMIT: usize = 3;

/// Derives the explore views from a catalog and a filter snapshot.
///
/// Every view is recomputed on demand. Nothing here mutates the catalog or
/// the filter state, and results keep catalog order.
#[derive(Debug, Clone)]
pub struct Explorer {
    featured_limit: usize,
    hot_deals_limit: usize,
    similar_limit: usize,
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            featured_limit: FEATURED_LIMIT,
            hot_deals_limit: HOT_DEALS_LIMIT,
            similar_limit: SIMILAR_LIMIT,
        }
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExploreConfig) -> Self {
        Self {
            featured_limit: config.featured_limit,
            hot_deals_limit: config.hot_deals_limit,
            similar_limit: config.similar_limit,
        }
    }

    /// All listings matching every criterion of `state`
    pub fn filtered<'a>(&self, catalog: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
        let query = state.normalized_query();
        catalog
            .iter()
            .filter(|p| matches(p, state, query.as_deref()))
            .collect()
    }

    /// Leading matches shown in the featured strip
    pub fn featured<'a>(&self, catalog: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
        self.prefix(catalog, state, self.featured_limit)
    }

    /// Leading matches fed to the hot deals carousel
    pub fn hot_deals<'a>(&self, catalog: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
        self.prefix(catalog, state, self.hot_deals_limit)
    }

    /// Other listings of the same category, using the configured limit
    pub fn similar<'a>(&self, catalog: &'a [Property], property: &Property) -> Vec<&'a Property> {
        similar_properties(catalog, property, self.similar_limit)
    }

    fn prefix<'a>(
        &self,
        catalog: &'a [Property],
        state: &FilterState,
        limit: usize,
    ) -> Vec<&'a Property> {
        let mut result = self.filtered(catalog, state);
        result.truncate(limit);
        result
    }
}

/// Predicates run in a fixed order: category, listing type, text, price,
/// bedrooms, bathrooms, new listing, open house.
fn matches(property: &Property, state: &FilterState, query: Option<&str>) -> bool {
    let filters = &state.filters;
    property.category == state.selected_category
        && property.listing_type == state.selected_listing_type
        && query.map_or(true, |q| matches_text(property, q))
        && property.price >= filters.min_price
        && property.price <= filters.max_price
        && property.bedrooms >= filters.min_bedrooms
        && property.bathrooms >= filters.min_bathrooms
        && (!filters.new_listing_only || property.is_new_listing)
        && (!filters.open_house_only || property.is_open_house)
}

/// `query` must already be trimmed and lowercased
fn matches_text(property: &Property, query: &str) -> bool {
    [
        &property.title,
        &property.address,
        &property.city,
        &property.state,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

pub fn filtered_properties<'a>(catalog: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
    Explorer::default().filtered(catalog, state)
}

/// First three filtered listings
pub fn featured_properties<'a>(catalog: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
    Explorer::default().featured(catalog, state)
}

/// First eight filtered listings
pub fn hot_deals_properties<'a>(
    catalog: &'a [Property],
    state: &FilterState,
) -> Vec<&'a Property> {
    Explorer::default().hot_deals(catalog, state)
}

/// Up to `limit` other listings sharing `property`'s category. Listing type,
/// price and distance are not considered.
pub fn similar_properties<'a>(
    catalog: &'a [Property],
    property: &Property,
    limit: usize,
) -> Vec<&'a Property> {
    catalog
        .iter()
        .filter(|p| p.id != property.id && p.category == property.category)
        .take(limit)
        .collect()
}

/// Free-text search across every category and listing type, as used by the
/// standalone search tab. A blank query finds nothing.
pub fn search_catalog<'a>(catalog: &'a [Property], query: &str) -> Vec<&'a Property> {
    match normalize_query(query) {
        Some(q) => catalog.iter().filter(|p| matches_text(p, &q)).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{self, mock_properties};
    use crate::explore::filter::PropertyFilters;
    use crate::models::{ListingType, PropertyCategory};

    fn titles(result: &[&Property]) -> Vec<String> {
        result.iter().map(|p| p.title.clone()).collect()
    }

    fn state_for(category: PropertyCategory, listing_type: ListingType) -> FilterState {
        FilterState {
            selected_category: category,
            selected_listing_type: listing_type,
            ..FilterState::default()
        }
    }

    #[test]
    fn test_default_state_returns_residential_sales_in_order() {
        let catalog = mock_properties();
        let state = FilterState::default();

        let result = filtered_properties(&catalog, &state);
        assert_eq!(
            titles(&result),
            vec![
                "Modern Downtown Loft",
                "Family Home with Garden",
                "Cozy Townhouse"
            ]
        );
        assert_eq!(featured_properties(&catalog, &state), result);
    }

    #[test]
    fn test_every_result_satisfies_all_criteria() {
        let mut catalog = mock_properties();
        let mut both_flags = catalog
            .iter()
            .find(|p| p.id == mock::FAMILY_HOME)
            .unwrap()
            .clone();
        both_flags.id = uuid::Uuid::from_u128(0xfeed_0001);
        both_flags.title = "Garden Estate".to_string();
        both_flags.is_new_listing = true;
        catalog.push(both_flags.clone());

        let state = FilterState {
            search_text: " GARDEN ".to_string(),
            filters: PropertyFilters {
                min_price: 500_000,
                max_price: 700_000,
                min_bedrooms: 3,
                min_bathrooms: 2.0,
                new_listing_only: true,
                open_house_only: true,
            },
            ..FilterState::default()
        };

        let result = filtered_properties(&catalog, &state);
        assert_eq!(titles(&result), vec!["Garden Estate"]);
        for p in result {
            assert!(catalog.contains(p));
            assert_eq!(p.category, state.selected_category);
            assert_eq!(p.listing_type, state.selected_listing_type);
            assert!([&p.title, &p.address, &p.city, &p.state]
                .iter()
                .any(|field| field.to_lowercase().contains("garden")));
            assert!(p.price >= state.filters.min_price && p.price <= state.filters.max_price);
            assert!(p.bedrooms >= state.filters.min_bedrooms);
            assert!(p.bathrooms >= state.filters.min_bathrooms);
            assert!(p.is_new_listing);
            assert!(p.is_open_house);
        }

        // Dropping the new-listing flag lets the original garden home back in.
        let mut relaxed = state.clone();
        relaxed.filters.new_listing_only = false;
        assert_eq!(
            titles(&filtered_properties(&catalog, &relaxed)),
            vec!["Family Home with Garden", "Garden Estate"]
        );
    }

    #[test]
    fn test_category_and_type_hold_for_every_combination() {
        let catalog = mock_properties();
        for category in PropertyCategory::ALL {
            for listing_type in ListingType::ALL {
                let state = state_for(category, listing_type);
                for p in filtered_properties(&catalog, &state) {
                    assert_eq!(p.category, category);
                    assert_eq!(p.listing_type, listing_type);
                }
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let catalog = mock_properties();
        let mut upper = FilterState::default();
        upper.search_text = "HOUSTON".to_string();
        let mut lower = FilterState::default();
        lower.search_text = "  houston ".to_string();

        let a = filtered_properties(&catalog, &upper);
        let b = filtered_properties(&catalog, &lower);
        assert_eq!(a, b);
        assert_eq!(titles(&a), vec!["Modern Downtown Loft"]);
    }

    #[test]
    fn test_search_matches_any_text_field() {
        let catalog = mock_properties();
        let mut state = FilterState::default();

        state.search_text = "garden".to_string(); // title
        assert_eq!(titles(&filtered_properties(&catalog, &state)), vec!["Family Home with Garden"]);

        state.search_text = "brooks st".to_string(); // address
        assert_eq!(titles(&filtered_properties(&catalog, &state)), vec!["Cozy Townhouse"]);

        state.search_text = "sugar".to_string(); // city
        assert_eq!(titles(&filtered_properties(&catalog, &state)), vec!["Cozy Townhouse"]);

        state.search_text = "tx".to_string(); // state
        assert_eq!(filtered_properties(&catalog, &state).len(), 3);

        // description is not searched
        state.search_text = "exposed brick".to_string();
        assert!(filtered_properties(&catalog, &state).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = mock_properties();
        let mut state = FilterState::default();
        state.filters.min_price = 359_000;
        state.filters.max_price = 485_000;
        assert_eq!(
            titles(&filtered_properties(&catalog, &state)),
            vec!["Modern Downtown Loft", "Cozy Townhouse"]
        );
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let catalog = mock_properties();
        let mut state = FilterState::default();
        state.filters.min_price = 600_000;
        state.filters.max_price = 400_000;
        assert!(filtered_properties(&catalog, &state).is_empty());
    }

    #[test]
    fn test_room_thresholds() {
        let catalog = mock_properties();
        let mut state = FilterState::default();
        state.filters.min_bedrooms = 3;
        assert_eq!(
            titles(&filtered_properties(&catalog, &state)),
            vec!["Family Home with Garden", "Cozy Townhouse"]
        );

        state.filters.min_bathrooms = 2.5;
        assert_eq!(
            titles(&filtered_properties(&catalog, &state)),
            vec!["Family Home with Garden", "Cozy Townhouse"]
        );

        state.filters.min_bathrooms = 3.0;
        assert_eq!(
            titles(&filtered_properties(&catalog, &state)),
            vec!["Family Home with Garden"]
        );
    }

    #[test]
    fn test_flag_filters() {
        let catalog = mock_properties();
        let mut state = FilterState::default();
        state.filters.new_listing_only = true;
        assert_eq!(titles(&filtered_properties(&catalog, &state)), vec!["Modern Downtown Loft"]);

        state.filters = PropertyFilters {
            open_house_only: true,
            ..PropertyFilters::default()
        };
        assert_eq!(titles(&filtered_properties(&catalog, &state)), vec!["Family Home with Garden"]);

        state.filters.new_listing_only = true;
        assert!(filtered_properties(&catalog, &state).is_empty());
    }

    #[test]
    fn test_featured_and_hot_deals_are_prefixes() {
        let mut catalog = mock_properties();
        // Grow the residential-sale pool past both caps.
        for i in 0..10u128 {
            let mut copy = catalog[0].clone();
            copy.id = uuid::Uuid::from_u128(0xc0ffee00 + i);
            copy.title = format!("Loft copy {}", i);
            catalog.push(copy);
        }
        let state = FilterState::default();
        let all = filtered_properties(&catalog, &state);
        assert_eq!(all.len(), 13);

        let featured = featured_properties(&catalog, &state);
        let hot = hot_deals_properties(&catalog, &state);
        assert_eq!(featured.len(), 3);
        assert_eq!(hot.len(), 8);
        assert_eq!(featured[..], all[..3]);
        assert_eq!(hot[..], all[..8]);
    }

    #[test]
    fn test_short_results_are_not_padded() {
        let catalog = mock_properties();
        let state = state_for(PropertyCategory::Land, ListingType::Sale);
        assert_eq!(titles(&featured_properties(&catalog, &state)), vec!["Ranch Land Parcel"]);
        assert_eq!(titles(&hot_deals_properties(&catalog, &state)), vec!["Ranch Land Parcel"]);

        let state = state_for(PropertyCategory::Land, ListingType::Lease);
        assert!(hot_deals_properties(&catalog, &state).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let state = FilterState::default();
        assert!(filtered_properties(&[], &state).is_empty());
        assert!(featured_properties(&[], &state).is_empty());
        assert!(hot_deals_properties(&[], &state).is_empty());
        assert!(search_catalog(&[], "houston").is_empty());
    }

    #[test]
    fn test_filtering_is_repeatable() {
        let catalog = mock_properties();
        let before = catalog.clone();
        let mut state = FilterState::default();
        state.search_text = "TX".to_string();
        let snapshot = state.clone();

        let first = titles(&filtered_properties(&catalog, &state));
        let second = titles(&filtered_properties(&catalog, &state));
        assert_eq!(first, second);
        assert_eq!(state, snapshot);
        assert_eq!(
            catalog.iter().map(|p| &p.title).collect::<Vec<_>>(),
            before.iter().map(|p| &p.title).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_similar_excludes_self_and_keeps_category() {
        let catalog = mock_properties();
        let loft = &catalog[0];

        let similar = similar_properties(&catalog, loft, SIMILAR_LIMIT);
        assert_eq!(
            titles(&similar),
            vec![
                "Skyline View Apartment",
                "Family Home with Garden",
                "Riverside Studio"
            ]
        );
        assert!(similar.iter().all(|p| p.id != loft.id));
        assert!(similar.iter().all(|p| p.category == loft.category));

        let office = catalog.iter().find(|p| p.id == mock::OFFICE_SUITE).unwrap();
        assert_eq!(
            titles(&similar_properties(&catalog, office, 3)),
            vec!["Corner Retail Space"]
        );

        let parcel = catalog.iter().find(|p| p.id == mock::RANCH_PARCEL).unwrap();
        assert!(similar_properties(&catalog, parcel, 3).is_empty());
        assert!(similar_properties(&catalog, loft, 0).is_empty());
    }

    #[test]
    fn test_explorer_uses_configured_limits() {
        let catalog = mock_properties();
        let config = ExploreConfig {
            featured_limit: 1,
            hot_deals_limit: 2,
            similar_limit: 4,
            ..ExploreConfig::default()
        };
        let explorer = Explorer::from_config(&config);
        let state = FilterState::default();

        assert_eq!(titles(&explorer.featured(&catalog, &state)), vec!["Modern Downtown Loft"]);
        assert_eq!(explorer.hot_deals(&catalog, &state).len(), 2);
        assert_eq!(explorer.similar(&catalog, &catalog[0]).len(), 4);
    }

    #[test]
    fn test_search_catalog_ignores_category_and_type() {
        let catalog = mock_properties();
        assert!(search_catalog(&catalog, "   ").is_empty());
        assert_eq!(
            titles(&search_catalog(&catalog, "Houston")),
            vec![
                "Modern Downtown Loft",
                "Skyline View Apartment",
                "Downtown Office Suite"
            ]
        );
        assert_eq!(titles(&search_catalog(&catalog, "CONROE")), vec!["Ranch Land Parcel"]);
    }
}
