//! Read-only property catalog and the sources it can be loaded from.

pub mod file;
pub mod mock;
pub mod remote;
pub mod traits;

pub use file::FileCatalog;
pub use mock::MockCatalog;
pub use remote::RemoteCatalog;
pub use traits::CatalogSource;

use crate::config::{CatalogConfig, SourceKind};
use crate::models::{Agent, Coordinate, Property};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;
use uuid::Uuid;

const HOUSTON_CENTER: Coordinate = Coordinate::new(29.7604, -95.3698);

/// Where the map view opens before a listing is selected: Houston, TX
pub fn map_center() -> Coordinate {
    HOUSTON_CENTER
}

/// Properties and agents for one session. Never mutated after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(skip, default = "Utc::now")]
    pub loaded_at: DateTime<Utc>,
}

/// Soft invariant violations found in a loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    DuplicateId(Uuid),
    NegativeBathrooms(Uuid),
    UnknownAgent { property: Uuid, agent: Uuid },
    RatingOutOfRange(Uuid),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId(id) => write!(f, "duplicate property id {}", id),
            CatalogIssue::NegativeBathrooms(id) => {
                write!(f, "property {} has a negative bathroom count", id)
            }
            CatalogIssue::UnknownAgent { property, agent } => {
                write!(f, "property {} references unknown agent {}", property, agent)
            }
            CatalogIssue::RatingOutOfRange(id) => {
                write!(f, "agent {} has a rating outside 0.0..=5.0", id)
            }
        }
    }
}

impl Catalog {
    pub fn new(properties: Vec<Property>, agents: Vec<Agent>) -> Self {
        Self {
            properties,
            agents,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property(&self, id: Uuid) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn agent(&self, id: Uuid) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Listing agent for a property, if the catalog knows it
    pub fn agent_for(&self, property: &Property) -> Option<&Agent> {
        self.agent(property.agent_id)
    }

    /// Check the soft invariants. Nothing is rejected; callers decide what
    /// to do with the findings.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let agent_ids: HashSet<Uuid> = self.agents.iter().map(|a| a.id).collect();

        for property in &self.properties {
            if !seen.insert(property.id) {
                issues.push(CatalogIssue::DuplicateId(property.id));
            }
            if property.bathrooms < 0.0 {
                issues.push(CatalogIssue::NegativeBathrooms(property.id));
            }
            if !agent_ids.contains(&property.agent_id) {
                issues.push(CatalogIssue::UnknownAgent {
                    property: property.id,
                    agent: property.agent_id,
                });
            }
        }

        for agent in &self.agents {
            if !(0.0..=5.0).contains(&agent.rating) {
                issues.push(CatalogIssue::RatingOutOfRange(agent.id));
            }
        }

        issues
    }

    /// Validate and log every finding, returning how many were found
    pub fn log_issues(&self) -> usize {
        let issues = self.validate();
        for issue in &issues {
            warn!("Catalog issue: {}", issue);
        }
        issues.len()
    }
}

/// Build the catalog source selected in the configuration
pub fn source_from_config(config: &CatalogConfig) -> anyhow::Result<Box<dyn CatalogSource>> {
    let source: Box<dyn CatalogSource> = match config.source {
        SourceKind::Mock => Box::new(MockCatalog::new()),
        SourceKind::File => {
            let path = config
                .path
                .clone()
                .ok_or_else(|| anyhow::anyhow!("catalog.path is required for the file source"))?;
            Box::new(FileCatalog::new(path))
        }
        SourceKind::Remote => {
            let url = config
                .url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("catalog.url is required for the remote source"))?;
            Box::new(RemoteCatalog::new(url, config.timeout_seconds)?)
        }
    };
    Ok(source)
}
