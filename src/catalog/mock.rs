use crate::catalog::{Catalog, CatalogSource};
use crate::models::{
    Agent, Coordinate, ImageRefs, ListingType, Property, PropertyCategory, PropertyType,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

pub const SARAH_MITCHELL: Uuid = Uuid::from_u128(0xa1b2c3d4_0001_4000_8000_000000000001);
pub const JAMES_CHEN: Uuid = Uuid::from_u128(0xa1b2c3d4_0002_4000_8000_000000000002);
pub const EMILY_RODRIGUEZ: Uuid = Uuid::from_u128(0xa1b2c3d4_0003_4000_8000_000000000003);

pub const DOWNTOWN_LOFT: Uuid = Uuid::from_u128(0xb2c3d4e5_0001_4000_8000_000000000001);
pub const SKYLINE_APARTMENT: Uuid = Uuid::from_u128(0xb2c3d4e5_0002_4000_8000_000000000002);
pub const FAMILY_HOME: Uuid = Uuid::from_u128(0xb2c3d4e5_0003_4000_8000_000000000003);
pub const RIVERSIDE_STUDIO: Uuid = Uuid::from_u128(0xb2c3d4e5_0004_4000_8000_000000000004);
pub const COZY_TOWNHOUSE: Uuid = Uuid::from_u128(0xb2c3d4e5_0005_4000_8000_000000000005);
pub const OFFICE_SUITE: Uuid = Uuid::from_u128(0xb2c3d4e5_0006_4000_8000_000000000006);
pub const CORNER_RETAIL: Uuid = Uuid::from_u128(0xb2c3d4e5_0007_4000_8000_000000000007);
pub const RANCH_PARCEL: Uuid = Uuid::from_u128(0xb2c3d4e5_0008_4000_8000_000000000008);

/// Built-in offline catalog
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn load(&self) -> Result<Catalog> {
        let catalog = mock_catalog();
        info!("📋 Loaded {} mock properties", catalog.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

pub fn mock_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: SARAH_MITCHELL,
            name: "Sarah Mitchell".to_string(),
            rating: 4.9,
            review_count: 127,
            company: "Premier Realty".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "sarah.mitchell@premierrealty.com".to_string(),
        },
        Agent {
            id: JAMES_CHEN,
            name: "James Chen".to_string(),
            rating: 4.8,
            review_count: 89,
            company: "Urban Homes".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            email: "james.chen@urbanhomes.com".to_string(),
        },
        Agent {
            id: EMILY_RODRIGUEZ,
            name: "Emily Rodriguez".to_string(),
            rating: 5.0,
            review_count: 64,
            company: "Luxury Estates".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            email: "emily.r@luxuryestates.com".to_string(),
        },
    ]
}

/// Eight Houston-area listings: five residential, two commercial, one land
pub fn mock_properties() -> Vec<Property> {
    vec![
        Property {
            id: DOWNTOWN_LOFT,
            title: "Modern Downtown Loft".to_string(),
            address: "1200 Main St".to_string(),
            city: "Houston".to_string(),
            state: "TX".to_string(),
            price: 485_000,
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: 1_450,
            listing_type: ListingType::Sale,
            category: PropertyCategory::Residential,
            property_type: PropertyType::Condo,
            description: "Open floor plan loft with exposed brick and skyline views.".to_string(),
            amenities: vec![
                "Rooftop deck".to_string(),
                "Gym".to_string(),
                "Concierge".to_string(),
            ],
            coordinate: Coordinate::new(29.7589, -95.3677),
            agent_id: SARAH_MITCHELL,
            is_new_listing: true,
            is_open_house: false,
            image_refs: ImageRefs {
                image_style_index: 0,
                image_names: Some(vec!["LoftLiving".to_string(), "LoftKitchen".to_string()]),
                ..ImageRefs::default()
            },
        },
        Property {
            id: SKYLINE_APARTMENT,
            title: "Skyline View Apartment".to_string(),
            address: "820 Westheimer Rd".to_string(),
            city: "Houston".to_string(),
            state: "TX".to_string(),
            price: 2_400,
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: 780,
            listing_type: ListingType::Lease,
            category: PropertyCategory::Residential,
            property_type: PropertyType::Apartment,
            description: "Bright one-bedroom in Montrose, walking distance to cafes.".to_string(),
            amenities: vec!["Pool".to_string(), "Covered parking".to_string()],
            coordinate: Coordinate::new(29.7425, -95.3902),
            agent_id: JAMES_CHEN,
            is_new_listing: false,
            is_open_house: true,
            image_refs: ImageRefs::placeholder(1),
        },
        Property {
            id: FAMILY_HOME,
            title: "Family Home with Garden".to_string(),
            address: "2415 Cinco Ranch Blvd".to_string(),
            city: "Katy".to_string(),
            state: "TX".to_string(),
            price: 625_000,
            bedrooms: 4,
            bathrooms: 3.0,
            square_feet: 2_980,
            listing_type: ListingType::Sale,
            category: PropertyCategory::Residential,
            property_type: PropertyType::House,
            description: "Two-story home with a landscaped garden and a three-car garage."
                .to_string(),
            amenities: vec![
                "Garden".to_string(),
                "Garage".to_string(),
                "Garden".to_string(),
            ],
            coordinate: Coordinate::new(29.7355, -95.8190),
            agent_id: EMILY_RODRIGUEZ,
            is_new_listing: false,
            is_open_house: true,
            image_refs: ImageRefs {
                image_style_index: 2,
                image_name: Some("PropertyHouse".to_string()),
                ..ImageRefs::default()
            },
        },
        Property {
            id: RIVERSIDE_STUDIO,
            title: "Riverside Studio".to_string(),
            address: "55 Waterway Square Pl".to_string(),
            city: "The Woodlands".to_string(),
            state: "TX".to_string(),
            price: 1_650,
            bedrooms: 0,
            bathrooms: 1.0,
            square_feet: 540,
            listing_type: ListingType::Lease,
            category: PropertyCategory::Residential,
            property_type: PropertyType::Apartment,
            description: "Compact studio overlooking the Waterway.".to_string(),
            amenities: Vec::new(),
            coordinate: Coordinate::new(30.1620, -95.4613),
            agent_id: SARAH_MITCHELL,
            is_new_listing: true,
            is_open_house: false,
            image_refs: ImageRefs::placeholder(3),
        },
        Property {
            id: COZY_TOWNHOUSE,
            title: "Cozy Townhouse".to_string(),
            address: "310 Brooks St".to_string(),
            city: "Sugar Land".to_string(),
            state: "TX".to_string(),
            price: 359_000,
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: 1_820,
            listing_type: ListingType::Sale,
            category: PropertyCategory::Residential,
            property_type: PropertyType::Townhouse,
            description: "End-unit townhouse near the town square with a private patio."
                .to_string(),
            amenities: vec!["Patio".to_string(), "Community pool".to_string()],
            coordinate: Coordinate::new(29.6197, -95.6349),
            agent_id: JAMES_CHEN,
            is_new_listing: false,
            is_open_house: false,
            image_refs: ImageRefs::placeholder(4),
        },
        Property {
            id: OFFICE_SUITE,
            title: "Downtown Office Suite".to_string(),
            address: "700 Louisiana St".to_string(),
            city: "Houston".to_string(),
            state: "TX".to_string(),
            price: 8_500,
            bedrooms: 0,
            bathrooms: 2.0,
            square_feet: 3_200,
            listing_type: ListingType::Lease,
            category: PropertyCategory::Commercial,
            property_type: PropertyType::Office,
            description: "Class A office space on the 32nd floor.".to_string(),
            amenities: vec!["Reception".to_string(), "Conference room".to_string()],
            coordinate: Coordinate::new(29.7604, -95.3665),
            agent_id: EMILY_RODRIGUEZ,
            is_new_listing: false,
            is_open_house: false,
            image_refs: ImageRefs {
                image_style_index: 5,
                image_urls: Some(vec![
                    "https://images.example.com/office-suite/lobby.jpg".to_string(),
                ]),
                ..ImageRefs::default()
            },
        },
        Property {
            id: CORNER_RETAIL,
            title: "Corner Retail Space".to_string(),
            address: "5110 Bellaire Blvd".to_string(),
            city: "Bellaire".to_string(),
            state: "TX".to_string(),
            price: 1_150_000,
            bedrooms: 0,
            bathrooms: 1.0,
            square_feet: 2_400,
            listing_type: ListingType::Sale,
            category: PropertyCategory::Commercial,
            property_type: PropertyType::Retail,
            description: "High-traffic corner storefront with dedicated parking.".to_string(),
            amenities: vec!["Parking".to_string()],
            coordinate: Coordinate::new(29.7058, -95.4588),
            agent_id: SARAH_MITCHELL,
            is_new_listing: true,
            is_open_house: false,
            image_refs: ImageRefs::placeholder(0),
        },
        Property {
            id: RANCH_PARCEL,
            title: "Ranch Land Parcel".to_string(),
            address: "FM 1097".to_string(),
            city: "Conroe".to_string(),
            state: "TX".to_string(),
            price: 275_000,
            bedrooms: 0,
            bathrooms: 0.0,
            square_feet: 0,
            listing_type: ListingType::Sale,
            category: PropertyCategory::Land,
            property_type: PropertyType::Lot,
            description: "Twelve wooded acres with road frontage.".to_string(),
            amenities: Vec::new(),
            coordinate: Coordinate::new(30.3119, -95.4561),
            agent_id: JAMES_CHEN,
            is_new_listing: false,
            is_open_house: false,
            image_refs: ImageRefs::placeholder(1),
        },
    ]
}

pub fn mock_catalog() -> Catalog {
    Catalog::new(mock_properties(), mock_agents())
}
