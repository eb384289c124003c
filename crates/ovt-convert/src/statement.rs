//! The synthesized `source` tag.

use std::collections::BTreeSet;

use ovt_model::Source;

/// Attribution suffix appended to every source statement.
pub const PRODUCT_NAME: &str = "overture2osm";

/// `"<datasets> via overture2osm"`, or `None` when there are no sources.
///
/// Dataset names are trimmed of surrounding commas and spaces, deduplicated,
/// sorted and joined with `", "`.
pub fn source_statement(sources: &[Source]) -> Option<String> {
    if sources.is_empty() {
        return None;
    }
    let datasets: BTreeSet<&str> = sources
        .iter()
        .map(|source| source.dataset.trim_matches([',', ' ']))
        .collect();
    let datasets: Vec<&str> = datasets.into_iter().collect();
    Some(format!("{} via {PRODUCT_NAME}", datasets.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(dataset: &str) -> Source {
        Source {
            property: String::new(),
            dataset: dataset.to_string(),
            record_id: None,
            confidence: None,
            update_time: None,
        }
    }

    #[test]
    fn datasets_are_trimmed_sorted_and_unique() {
        let sources = [
            source("microsoftMLBuildings,"),
            source("metaLidarExtractions,"),
            source(" microsoftMLBuildings"),
        ];
        assert_eq!(
            source_statement(&sources).as_deref(),
            Some("metaLidarExtractions, microsoftMLBuildings via overture2osm")
        );
    }

    #[test]
    fn no_sources_no_statement() {
        assert_eq!(source_statement(&[]), None);
    }
}
