use anyhow::anyhow;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use tracing::{debug, info, trace, warn};

use crate::maven::classifier_policy::ClassifierPolicy;
use crate::maven::paths::{base_download_path, maven_file_suffix};
use crate::nexus::query::QueryCriteria;
use crate::nexus::repository_urls::repository_content_urls;
use crate::nexus::search_response::SearchNgResponse;
use crate::nexus::transport::{HyperSearchTransport, SearchTransport};
use crate::version_reader::VersionReader;

/// Lists download URLs of artifacts found through the Lucene search service of a Nexus
///  repository manager.
///
/// The transport is created on first use and reused afterwards.
pub struct LuceneSearchResolver<T: SearchTransport = HyperSearchTransport> {
    criteria: QueryCriteria,
    connect: fn(&str) -> anyhow::Result<T>,
    transport: OnceCell<T>,
}

impl LuceneSearchResolver<HyperSearchTransport> {
    pub fn new(base_url: &str, group_id: &str, artifact_id: &str, packaging: &str) -> Self {
        Self::with_policy(base_url, group_id, artifact_id, packaging, ClassifierPolicy::default_policy())
    }

    pub fn with_policy(base_url: &str, group_id: &str, artifact_id: &str, packaging: &str, classifier_policy: ClassifierPolicy) -> Self {
        Self::from_criteria(QueryCriteria::new(base_url, group_id, artifact_id, packaging, classifier_policy))
    }

    pub fn from_criteria(criteria: QueryCriteria) -> Self {
        LuceneSearchResolver {
            criteria,
            connect: HyperSearchTransport::new,
            transport: OnceCell::new(),
        }
    }
}

impl <T: SearchTransport> LuceneSearchResolver<T> {
    /// uses a ready-made transport instead of connecting lazily
    pub fn with_transport(criteria: QueryCriteria, transport: T) -> Self {
        LuceneSearchResolver {
            criteria,
            connect: |_| Err(anyhow!("transport is initialized on construction")),
            transport: OnceCell::with_value(transport),
        }
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    fn transport(&self) -> anyhow::Result<&T> {
        self.transport.get_or_try_init(|| {
            debug!("creating search transport for {}", self.criteria.base_url);
            (self.connect)(&self.criteria.base_url)
        })
    }
}

#[async_trait]
impl <T: SearchTransport> VersionReader for LuceneSearchResolver<T> {
    async fn retrieve_versions(&self) -> anyhow::Result<Vec<String>> {
        let criteria = &self.criteria;
        debug!(
            "query nexus with arguments: r:{}, g:{}, a:{}, p:{}, c:{:?}",
            criteria.base_url, criteria.group_id, criteria.artifact_id, criteria.packaging, criteria.classifier_policy,
        );

        let query = criteria.to_search_query();
        let response = self.transport()?
            .search(&query)
            .await?;

        Ok(filter_download_urls(response.as_ref(), criteria))
    }
}

/// Turns a search response into download URLs, keeping only links that match the criteria's
///  packaging and classifier policy. The order of artifacts, hits and links is preserved.
pub fn filter_download_urls(response: Option<&SearchNgResponse>, criteria: &QueryCriteria) -> Vec<String> {
    let response = match response {
        None => {
            info!("response from Nexus is empty");
            return vec![];
        }
        Some(r) if r.total_count == 0 => {
            info!("response from Nexus does not contain any results");
            return vec![];
        }
        Some(r) => r,
    };

    let repo_urls = repository_content_urls(&response.repo_details);

    let mut result = Vec::new();
    for artifact in &response.data {
        let base_path = base_download_path(&artifact.coordinates());

        for hit in &artifact.artifact_hits {
            let repo_url = match repo_urls.get(&hit.repository_id) {
                Some(url) => url,
                None => {
                    warn!("no URL for repository {} referenced by {}:{}:{} - skipping {} link(s)",
                        hit.repository_id, artifact.group_id, artifact.artifact_id, artifact.version, hit.artifact_links.len());
                    continue;
                }
            };

            for link in &hit.artifact_links {
                if !criteria.matches_packaging(&link.extension) {
                    trace!("skipping {}{} with extension {}", repo_url, base_path, link.extension);
                    continue;
                }

                let classifier = link.maven_classifier();
                if !criteria.classifier_policy.accepts(&classifier) {
                    trace!("skipping {}{} with classifier {} ({:?})", repo_url, base_path, classifier, criteria.classifier_policy.membership(&classifier));
                    continue;
                }

                result.push(format!("{}{}{}", repo_url, base_path, maven_file_suffix(&classifier, &link.extension)));
            }
        }
    }
    result
}
