use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;

use nexus_artifact_versions::maven::coordinates::MavenClassifier;
use nexus_artifact_versions::{ClassifierPolicy, LuceneSearchResolver, VersionReader};

const SEARCH_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<searchNGResponse>
  <totalCount>1</totalCount>
  <from>-1</from>
  <count>-1</count>
  <tooManyResults>false</tooManyResults>
  <collapsed>false</collapsed>
  <repoDetails>
    <org.sonatype.nexus.rest.model.NexusNGRepositoryDetail>
      <repositoryId>releases</repositoryId>
      <repositoryName>Releases</repositoryName>
      <repositoryURL>http://nexus.example.com/nexus/service/local/repositories/releases</repositoryURL>
    </org.sonatype.nexus.rest.model.NexusNGRepositoryDetail>
  </repoDetails>
  <data>
    <artifact>
      <groupId>com.example.tools</groupId>
      <artifactId>installer</artifactId>
      <version>106</version>
      <artifactHits>
        <artifactHit>
          <repositoryId>releases</repositoryId>
          <artifactLinks>
            <artifactLink>
              <extension>pom</extension>
            </artifactLink>
            <artifactLink>
              <extension>tar.gz</extension>
            </artifactLink>
            <artifactLink>
              <classifier>bin</classifier>
              <extension>tar.gz</extension>
            </artifactLink>
            <artifactLink>
              <classifier>sources</classifier>
              <extension>tar.gz</extension>
            </artifactLink>
          </artifactLinks>
        </artifactHit>
      </artifactHits>
    </artifact>
  </data>
</searchNGResponse>
"#;

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(Option<String>, Option<String>)>>>,
}

async fn search(State(recorded): State<Recorded>, RawQuery(query): RawQuery, headers: HeaderMap) -> (StatusCode, &'static str) {
    let accept = headers.get("accept")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    recorded.requests.lock().unwrap().push((query, accept));
    (StatusCode::OK, SEARCH_RESPONSE)
}

async fn failing_search() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn empty_search() -> (StatusCode, &'static str) {
    (StatusCode::OK, "")
}

async fn garbage_search() -> (StatusCode, &'static str) {
    (StatusCode::OK, "this is not xml")
}

async fn start_server() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/nexus/service/local/lucene/search", get(search))
        .route("/broken/service/local/lucene/search", get(failing_search))
        .route("/empty/service/local/lucene/search", get(empty_search))
        .route("/garbage/service/local/lucene/search", get(garbage_search))
        .with_state(recorded.clone());

    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    (addr, recorded)
}

#[tokio::test]
async fn test_resolve_against_server() {
    let (addr, recorded) = start_server().await;

    let policy = ClassifierPolicy::new(
        [MavenClassifier::Unclassified, MavenClassifier::from("bin")],
        [MavenClassifier::from("sources")],
    );
    let resolver = LuceneSearchResolver::with_policy(
        &format!("http://{}/nexus/", addr),
        "com.example.tools",
        "installer",
        "tar.gz",
        policy,
    );

    let urls = resolver.retrieve_versions().await.unwrap();
    assert_eq!(urls, vec![
        "http://nexus.example.com/nexus/content/repositories/releases/com/example/tools/installer/106/installer-106.tar.gz",
        "http://nexus.example.com/nexus/content/repositories/releases/com/example/tools/installer/106/installer-106-bin.tar.gz",
    ]);

    // second call reuses the same resolver and its client
    assert_eq!(resolver.retrieve_versions().await.unwrap().len(), 2);

    let requests = recorded.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].0.as_deref(), Some("g=com.example.tools&a=installer&p=tar.gz&c=bin"));
    assert_eq!(requests[0].1.as_deref(), Some("application/xml"));
}

#[tokio::test]
async fn test_default_policy_against_server() {
    let (addr, _) = start_server().await;

    let resolver = LuceneSearchResolver::new(&format!("http://{}/nexus", addr), "com.example.tools", "installer", "");
    assert_eq!(resolver.retrieve_versions().await.unwrap(), vec![
        "http://nexus.example.com/nexus/content/repositories/releases/com/example/tools/installer/106/installer-106.pom",
        "http://nexus.example.com/nexus/content/repositories/releases/com/example/tools/installer/106/installer-106.tar.gz",
    ]);
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let (addr, _) = start_server().await;

    let resolver = LuceneSearchResolver::new(&format!("http://{}/broken", addr), "g", "a", "");
    let err = resolver.retrieve_versions().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_empty_body_yields_no_versions() {
    let (addr, _) = start_server().await;

    let resolver = LuceneSearchResolver::new(&format!("http://{}/empty", addr), "g", "a", "");
    assert!(resolver.retrieve_versions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let (addr, _) = start_server().await;

    let resolver = LuceneSearchResolver::new(&format!("http://{}/garbage", addr), "g", "a", "");
    assert!(resolver.retrieve_versions().await.is_err());
}

#[tokio::test]
async fn test_unreachable_server_is_an_error() {
    // nothing listens on port 9 (discard) in test environments
    let resolver = LuceneSearchResolver::new("http://127.0.0.1:9/nexus", "g", "a", "");
    assert!(resolver.retrieve_versions().await.is_err());
}
