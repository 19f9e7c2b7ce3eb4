use async_trait::async_trait;

/// Something that lists download URLs for all versions of an artifact that match some
///  configured filter.
#[async_trait]
pub trait VersionReader: Send + Sync {
    /// The URLs in the order the underlying source reports them. No match is an empty list,
    ///  not an error.
    async fn retrieve_versions(&self) -> anyhow::Result<Vec<String>>;
}
