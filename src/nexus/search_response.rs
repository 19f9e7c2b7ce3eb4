//! Typed model of the `searchNGResponse` document returned by the Nexus 2.x Lucene search
//!  service (`service/local/lucene/search`), see
//!  https://repository.sonatype.org/nexus-indexer-lucene-plugin/default/docs/path__lucene_search.html
//!
//! The XML wraps every list in an extra element (`<data><artifact>..</artifact></data>`), the
//!  model flattens those wrappers away during deserialization.

use serde::{Deserialize, Deserializer};

use crate::maven::coordinates::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "searchNGResponse", rename_all = "camelCase")]
pub struct SearchNgResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub too_many_results: Option<bool>,
    #[serde(default)]
    pub collapsed: Option<bool>,
    #[serde(default, deserialize_with = "flatten_repo_details")]
    pub repo_details: Vec<RepositoryDetail>,
    #[serde(default, deserialize_with = "flatten_data")]
    pub data: Vec<Artifact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetail {
    pub repository_id: String,
    #[serde(default)]
    pub repository_name: Option<String>,
    #[serde(default)]
    pub repository_content_class: Option<String>,
    #[serde(default)]
    pub repository_kind: Option<String>,
    #[serde(default)]
    pub repository_policy: Option<String>,
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub latest_release: Option<String>,
    #[serde(default)]
    pub latest_release_repository_id: Option<String>,
    #[serde(default)]
    pub latest_snapshot: Option<String>,
    #[serde(default)]
    pub latest_snapshot_repository_id: Option<String>,
    #[serde(default, deserialize_with = "flatten_artifact_hits")]
    pub artifact_hits: Vec<ArtifactHit>,
}
impl Artifact {
    /// the coordinates as resolved by the search service
    pub fn coordinates(&self) -> MavenCoordinates {
        MavenCoordinates {
            group_id: MavenGroupId(self.group_id.clone()),
            artifact_id: MavenArtifactId(self.artifact_id.clone()),
            version: MavenVersion(self.version.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactHit {
    pub repository_id: String,
    #[serde(default, deserialize_with = "flatten_artifact_links")]
    pub artifact_links: Vec<ArtifactLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactLink {
    #[serde(default)]
    pub classifier: Option<String>,
    pub extension: String,
}
impl ArtifactLink {
    pub fn maven_classifier(&self) -> MavenClassifier {
        MavenClassifier::from(self.classifier.as_deref())
    }
}

impl SearchNgResponse {
    pub fn parse_xml(xml: &str) -> anyhow::Result<SearchNgResponse> {
        Ok(serde_xml_rs::from_str(xml)?)
    }
}

#[derive(Deserialize)]
struct RepoDetailsElement {
    #[serde(rename = "org.sonatype.nexus.rest.model.NexusNGRepositoryDetail", default)]
    entries: Vec<RepositoryDetail>,
}

#[derive(Deserialize)]
struct DataElement {
    #[serde(rename = "artifact", default)]
    entries: Vec<Artifact>,
}

#[derive(Deserialize)]
struct ArtifactHitsElement {
    #[serde(rename = "artifactHit", default)]
    entries: Vec<ArtifactHit>,
}

#[derive(Deserialize)]
struct ArtifactLinksElement {
    #[serde(rename = "artifactLink", default)]
    entries: Vec<ArtifactLink>,
}

fn flatten_repo_details<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RepositoryDetail>, D::Error> {
    Ok(RepoDetailsElement::deserialize(deserializer)?.entries)
}

fn flatten_data<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Artifact>, D::Error> {
    Ok(DataElement::deserialize(deserializer)?.entries)
}

fn flatten_artifact_hits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ArtifactHit>, D::Error> {
    Ok(ArtifactHitsElement::deserialize(deserializer)?.entries)
}

fn flatten_artifact_links<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ArtifactLink>, D::Error> {
    Ok(ArtifactLinksElement::deserialize(deserializer)?.entries)
}
