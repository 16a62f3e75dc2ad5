//! Render the catalog into one self-contained HTML document.
//!
//! Static HTML, no external assets, no styling. Extracted text goes into
//! the markup verbatim; the render phase trusts what the scrape stored.

use crate::catalog::{InterfaceFamily, NO_SPEC_LINK};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default report file name, written to the working directory.
pub const RESULTS_HTML: &str = "scrape_results.html";

/// Render every family and its entries as nested headings and list items.
pub fn render(catalog: &[InterfaceFamily]) -> String {
    let mut html = String::from("<html><body>");

    for family in catalog {
        html.push_str(&format!(
            "<h2><a href='{}'>{}</a></h2>",
            family.source_url, family.heading
        ));
        html.push_str(&format!("<p>{}</p>", family.description));

        html.push_str("<ul>");
        for entry in &family.entries {
            if entry.spec_link == NO_SPEC_LINK {
                html.push_str(&format!(
                    "<li><strong>{}</strong>: {}</li>",
                    entry.heading, entry.description
                ));
            } else {
                html.push_str(&format!(
                    "<li><strong><a href='{}'>{}</a></strong>: {}</li>",
                    entry.spec_link, entry.heading, entry.description
                ));
            }
        }
        html.push_str("</ul>");
    }

    html.push_str("</body></html>");
    html
}

/// Render the catalog and write the report file.
pub fn write_report(path: &Path, catalog: &[InterfaceFamily]) -> Result<()> {
    fs::write(path, render(catalog))
        .with_context(|| format!("failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InterfaceEntry;

    fn family(entries: Vec<InterfaceEntry>) -> InterfaceFamily {
        InterfaceFamily {
            heading: "FHIR Interfaces".to_string(),
            description: "All FHIR integration points.".to_string(),
            source_url: "https://open.epic.com/Interface/FHIR".to_string(),
            entries,
        }
    }

    #[test]
    fn test_family_with_no_entries_renders_empty_list() {
        let html = render(&[family(vec![])]);
        assert_eq!(
            html,
            "<html><body>\
             <h2><a href='https://open.epic.com/Interface/FHIR'>FHIR Interfaces</a></h2>\
             <p>All FHIR integration points.</p>\
             <ul></ul>\
             </body></html>"
        );
    }

    #[test]
    fn test_linked_entry_renders_bold_anchor() {
        let html = render(&[family(vec![InterfaceEntry {
            heading: "Patient Read".to_string(),
            description: "Reads one patient record.".to_string(),
            spec_link: "https://open.epic.com//Spec/123".to_string(),
        }])]);

        assert!(html.contains(
            "<li><strong><a href='https://open.epic.com//Spec/123'>Patient Read</a></strong>: \
             Reads one patient record.</li>"
        ));
    }

    #[test]
    fn test_sentinel_entry_renders_without_anchor() {
        let html = render(&[family(vec![InterfaceEntry {
            heading: "Bulk Export".to_string(),
            description: "Population-level export.".to_string(),
            spec_link: NO_SPEC_LINK.to_string(),
        }])]);

        assert!(html.contains("<li><strong>Bulk Export</strong>: Population-level export.</li>"));
        assert!(!html.contains("href='#'"));
    }

    #[test]
    fn test_empty_catalog_renders_bare_document() {
        assert_eq!(render(&[]), "<html><body></body></html>");
    }

    #[test]
    fn test_families_render_in_catalog_order() {
        let mut second = family(vec![]);
        second.heading = "DICOM Interfaces".to_string();

        let html = render(&[family(vec![]), second]);
        let fhir = html.find("FHIR Interfaces").unwrap();
        let dicom = html.find("DICOM Interfaces").unwrap();
        assert!(fhir < dicom);
    }
}
