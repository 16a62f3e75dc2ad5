//! Catalog data model and the sequential builder that assembles it.
//!
//! The catalog is an ordered list of interface families, one per configured
//! family identifier. Field names are pinned with serde renames because the
//! on-disk JSON shape is what the render phase reads back.

use crate::extract;
use crate::fetch::HttpClient;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Base URL of the vendor documentation site.
pub const BASE_URL: &str = "https://open.epic.com";

/// Placeholder link for entries without a specification document.
pub const NO_SPEC_LINK: &str = "#";

/// Interface family identifiers, in catalog order.
pub const FAMILY_IDS: [&str; 9] = [
    "HL7v2",
    "HL7v3",
    "IHE",
    "FHIR",
    "WebServices",
    "DICOM",
    "NCPDP",
    "X12",
    "Other",
];

/// One documented specification item within a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntry {
    pub heading: String,
    pub description: String,
    #[serde(rename = "specLink")]
    pub spec_link: String,
}

/// One vendor-defined interface category and its extracted entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceFamily {
    #[serde(rename = "interfaceHeading")]
    pub heading: String,
    #[serde(rename = "interfaceDescription")]
    pub description: String,
    #[serde(rename = "interfaceLink")]
    pub source_url: String,
    #[serde(rename = "list")]
    pub entries: Vec<InterfaceEntry>,
}

/// The complete ordered collection of families for one scrape run.
pub type Catalog = Vec<InterfaceFamily>;

/// Family page URL: base URL, fixed path segment, family identifier.
pub fn family_url(base_url: &str, family_id: &str) -> String {
    format!("{base_url}/Interface/{family_id}")
}

/// Fetch and extract every configured family, in identifier order.
///
/// Each fetch is awaited to completion before the next begins. A family
/// page that cannot be extracted at all aborts the run; no partial catalog
/// survives.
pub async fn build_catalog(client: &HttpClient, base_url: &str) -> Result<Catalog> {
    let mut catalog = Vec::with_capacity(FAMILY_IDS.len());

    for family_id in FAMILY_IDS {
        let url = family_url(base_url, family_id);
        info!("fetching interface family {family_id}");

        let resp = client
            .get(&url)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        debug!("GET {url} -> {}", resp.status);

        let family = extract::parse_family_page(&resp.body, base_url, &url)
            .with_context(|| format!("failed to extract interface family {family_id}"))?;
        info!("{family_id}: {} entries", family.entries.len());

        catalog.push(family);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_url_format() {
        for id in FAMILY_IDS {
            assert_eq!(
                family_url(BASE_URL, id),
                format!("https://open.epic.com/Interface/{id}")
            );
        }
    }

    #[test]
    fn test_nine_families_in_fixed_order() {
        assert_eq!(FAMILY_IDS.len(), 9);
        assert_eq!(FAMILY_IDS[0], "HL7v2");
        assert_eq!(FAMILY_IDS[3], "FHIR");
        assert_eq!(FAMILY_IDS[8], "Other");
    }

    #[test]
    fn test_family_serializes_with_pinned_field_names() {
        let family = InterfaceFamily {
            heading: "FHIR Interfaces".to_string(),
            description: "All FHIR integration points.".to_string(),
            source_url: "https://open.epic.com/Interface/FHIR".to_string(),
            entries: vec![InterfaceEntry {
                heading: "Patient Read".to_string(),
                description: "Reads one patient record.".to_string(),
                spec_link: NO_SPEC_LINK.to_string(),
            }],
        };

        let value = serde_json::to_value(&family).unwrap();
        assert_eq!(value["interfaceHeading"], "FHIR Interfaces");
        assert_eq!(value["interfaceDescription"], "All FHIR integration points.");
        assert_eq!(value["interfaceLink"], "https://open.epic.com/Interface/FHIR");
        assert_eq!(value["list"][0]["heading"], "Patient Read");
        assert_eq!(value["list"][0]["specLink"], "#");
    }
}
