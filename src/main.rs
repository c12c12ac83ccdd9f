use listing_scout::catalog::{map_center, source_from_config};
use listing_scout::config::{load_config, ScoutConfig};
use listing_scout::explore::Explorer;
use listing_scout::models::Property;
use listing_scout::reminders::hot_deals_reminders;
use listing_scout::session::Session;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => ScoutConfig::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .init();

    info!("🏠 Listing Scout");
    info!("================");

    let source = source_from_config(&config.catalog)?;
    info!("Loading catalog from the {} source...", source.source_name());
    let catalog = source.load().await?;

    let issues = catalog.log_issues();
    if issues > 0 {
        info!("Catalog loaded with {} soft issues", issues);
    }

    let explorer = Explorer::from_config(&config.explore);
    let mut session = Session::from_config(&config.explore);
    let filter = session.filter().clone();

    info!(
        "Exploring {} / {} listings",
        filter.selected_category, filter.selected_listing_type
    );

    println!("\n🔥 Hot deals");
    print_listings(&explorer.hot_deals(&catalog.properties, &filter));

    println!("\n⭐ Featured");
    let featured = explorer.featured(&catalog.properties, &filter);
    print_listings(&featured);

    println!("\n📋 All matches");
    let matches = explorer.filtered(&catalog.properties, &filter);
    print_listings(&matches);

    let center = map_center();
    println!(
        "\n🗺️  Map centered on ({}, {})",
        center.latitude, center.longitude
    );
    for (id, coordinate) in matches.iter().map(|p| p.pin()) {
        println!("   📍 {} at ({}, {})", id, coordinate.latitude, coordinate.longitude);
    }

    if let Some(first) = featured.first() {
        println!("\n🏘️  Similar to {}", first.title);
        print_listings(&explorer.similar(&catalog.properties, first));

        session.toggle_saved(first.id);
        println!("\n❤️  Saved");
        print_listings(&session.saved_properties(&catalog.properties));
    }

    for reminder in hot_deals_reminders(&catalog) {
        info!("⏰ {} at {}: {}", reminder.id, reminder.at, reminder.body);
    }

    Ok(())
}

fn print_listings(properties: &[&Property]) {
    if properties.is_empty() {
        println!("   No properties found");
        return;
    }
    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price_formatted());
        println!(
            "   {} bd, {} ba, {} sqft",
            property.bedrooms, property.bathrooms, property.square_feet
        );
        println!("   {}", property.full_address());
        println!("   ID: {}", property.id);
    }
}
