use std::collections::HashMap;

use tracing::debug;

use crate::nexus::search_response::RepositoryDetail;

const SERVICE_PATH_SEGMENT: &str = "service/local";
const CONTENT_PATH_SEGMENT: &str = "content";

/// Nexus reports a repository's REST URL (".../service/local/repositories/<id>"), files are
///  served below ".../content/repositories/<id>".
///
/// NB: only the first occurrence is replaced so that a repository id which happens to contain
///  "service/local" stays intact
pub fn content_url(repository_url: &str) -> String {
    repository_url.replacen(SERVICE_PATH_SEGMENT, CONTENT_PATH_SEGMENT, 1)
}

/// repository id -> content base URL. If an id occurs more than once, the last entry wins.
pub fn repository_content_urls(details: &[RepositoryDetail]) -> HashMap<String, String> {
    let mut result = HashMap::with_capacity(details.len());
    for detail in details {
        if let Some(previous) = result.insert(detail.repository_id.clone(), content_url(&detail.repository_url)) {
            debug!("duplicate repository id {} in search response, replacing {}", detail.repository_id, previous);
        }
    }
    result
}
