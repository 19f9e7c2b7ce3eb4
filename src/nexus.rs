pub mod lucene_search;
pub mod query;
pub mod repository_urls;
pub mod search_response;
pub mod transport;
