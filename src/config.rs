use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::maven::classifier_policy::ClassifierPolicy;
use crate::nexus::lucene_search::LuceneSearchResolver;
use crate::nexus::query::QueryCriteria;

/// JSON representation of a search, e.g.
///
/// ```json
/// {
///   "base_url": "https://nexus.example.com/nexus/",
///   "group_id": "com.example",
///   "artifact_id": "foo",
///   "packaging": "tar.gz",
///   "classifiers": { "valid": ["", "bin"], "invalid": ["sources"] }
/// }
/// ```
///
/// Missing coordinates mean 'no restriction', missing classifiers mean the default policy.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub base_url: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub packaging: String,
    #[serde(default)]
    pub classifiers: ClassifierPolicy,
}

impl ResolverConfig {
    pub fn from_json(json: &str) -> anyhow::Result<ResolverConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> anyhow::Result<ResolverConfig> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("invalid resolver configuration in {}", path.display()))
    }

    pub fn into_criteria(self) -> QueryCriteria {
        QueryCriteria {
            base_url: self.base_url,
            group_id: self.group_id,
            artifact_id: self.artifact_id,
            packaging: self.packaging,
            classifier_policy: self.classifiers,
        }
    }
}

impl LuceneSearchResolver {
    pub fn from_config(config: ResolverConfig) -> LuceneSearchResolver {
        LuceneSearchResolver::from_criteria(config.into_criteria())
    }
}
