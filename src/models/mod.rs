use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod images;

pub use images::{ImageRefs, PropertyImages, HERO_STYLE_COUNT};

/// Whether a listing is offered for lease or for sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListingType {
    Lease,
    Sale,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::Lease, ListingType::Sale];

    pub fn label(self) -> &'static str {
        match self {
            ListingType::Lease => "Lease",
            ListingType::Sale => "Sale",
        }
    }
}

/// Top-level category used by the explore picker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyCategory {
    Residential,
    Commercial,
    Land,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 3] = [
        PropertyCategory::Residential,
        PropertyCategory::Commercial,
        PropertyCategory::Land,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyCategory::Residential => "Residential",
            PropertyCategory::Commercial => "Commercial",
            PropertyCategory::Land => "Land",
        }
    }
}

/// Concrete kind of building or lot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Office,
    Retail,
    Lot,
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic position of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Listing agent attached to one or more properties
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
    /// 0.0 to 5.0
    pub rating: f64,
    pub review_count: u32,
    pub company: String,
    pub phone: String,
    pub email: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: u64,
    pub bedrooms: u32,
    /// Half values allowed (2.5 baths)
    pub bathrooms: f64,
    pub square_feet: u32,
    pub listing_type: ListingType,
    pub category: PropertyCategory,
    pub property_type: PropertyType,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub coordinate: Coordinate,
    pub agent_id: Uuid,
    #[serde(default)]
    pub is_new_listing: bool,
    #[serde(default)]
    pub is_open_house: bool,
    #[serde(flatten)]
    pub image_refs: ImageRefs,
}

impl Property {
    /// "address, city, state"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }

    /// US currency without cents, e.g. `$1,250,000`
    pub fn price_formatted(&self) -> String {
        format_usd(self.price)
    }

    /// Resolved image representation for the view layer
    pub fn images(&self) -> PropertyImages {
        self.image_refs.resolve()
    }

    /// Map pin for this listing
    pub fn pin(&self) -> (Uuid, Coordinate) {
        (self.id, self.coordinate)
    }
}

// Listings are identified by id alone.
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Property {}

impl std::hash::Hash for Property {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Format a whole-dollar amount with thousands separators
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
