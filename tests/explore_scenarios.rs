use listing_scout::catalog::mock::{self, MockCatalog};
use listing_scout::catalog::CatalogSource;
use listing_scout::explore::{featured_properties, filtered_properties, similar_properties};
use listing_scout::models::{PropertyCategory, PropertyImages};
use listing_scout::session::{Session, SessionEvent};

#[tokio::test]
async fn test_default_explore_screen() {
    let catalog = MockCatalog::new().load().await.unwrap();
    let session = Session::new();

    let residential = catalog
        .properties
        .iter()
        .filter(|p| p.category == PropertyCategory::Residential)
        .count();
    assert_eq!(residential, 5);

    let titles: Vec<_> = filtered_properties(&catalog.properties, session.filter())
        .iter()
        .map(|p| p.title.clone())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Modern Downtown Loft",
            "Family Home with Garden",
            "Cozy Townhouse"
        ]
    );
    assert_eq!(
        featured_properties(&catalog.properties, session.filter()).len(),
        3
    );
}

#[tokio::test]
async fn test_save_and_unsave_loft() {
    let catalog = MockCatalog::new().load().await.unwrap();
    let mut session = Session::new();
    let mut events = session.subscribe();

    session.toggle_saved(mock::DOWNTOWN_LOFT);
    let saved = session.saved_properties(&catalog.properties);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Modern Downtown Loft");

    session.toggle_saved(mock::DOWNTOWN_LOFT);
    assert!(session.saved_properties(&catalog.properties).is_empty());

    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::SavedToggled {
            id: mock::DOWNTOWN_LOFT,
            saved: true
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::SavedToggled {
            id: mock::DOWNTOWN_LOFT,
            saved: false
        }
    );
}

#[tokio::test]
async fn test_detail_page_data() {
    let catalog = MockCatalog::new().load().await.unwrap();
    let loft = catalog.property(mock::DOWNTOWN_LOFT).unwrap();

    assert_eq!(loft.price_formatted(), "$485,000");
    assert_eq!(
        catalog.agent_for(loft).map(|a| a.company.as_str()),
        Some("Premier Realty")
    );
    assert_eq!(loft.images().primary(), Some("LoftLiving"));

    let office = catalog.property(mock::OFFICE_SUITE).unwrap();
    assert!(matches!(office.images(), PropertyImages::Remote(_)));

    let similar = similar_properties(&catalog.properties, loft, 3);
    assert_eq!(similar.len(), 3);
    assert!(!similar.iter().any(|p| p.id == loft.id));
}

#[test]
fn test_search_history_through_session() {
    let mut session = Session::new();
    for i in 0..11 {
        session.add_search_history(&format!("city {}", i));
    }
    session.add_search_history("CITY 5");

    let entries: Vec<_> = session.history().entries().collect();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0], "CITY 5");
    assert_eq!(entries[1], "city 10");
    assert!(!entries.contains(&"city 0"));
    assert!(!entries.contains(&"city 5"));
}
