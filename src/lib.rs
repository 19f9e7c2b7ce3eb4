pub mod config;
pub mod maven;
pub mod nexus;
pub mod version_reader;

pub use maven::classifier_policy::ClassifierPolicy;
pub use nexus::lucene_search::LuceneSearchResolver;
pub use version_reader::VersionReader;
