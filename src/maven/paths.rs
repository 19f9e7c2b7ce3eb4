use crate::maven::coordinates::*;

/// The path of an artifact's files relative to a repository root, without the classifier
///  and extension, e.g. "/com/example/foo/1.2/foo-1.2" for com.example:foo:1.2.
///
/// NB: the leading '/' is part of the path, repository base URLs are expected to have no
///  trailing slash
pub fn base_download_path(coordinates: &MavenCoordinates) -> String {
    format!(
        "/{}/{}/{}/{}-{}",
        coordinates.group_id.0.replace('.', "/"),
        coordinates.artifact_id.0,
        coordinates.version.0,
        coordinates.artifact_id.0,
        coordinates.version.0,
    )
}

/// `extension` without leading '.', e.g. "jar" or "tar.gz"
pub fn maven_file_suffix(classifier: &MavenClassifier, extension: &str) -> String {
    format!("{}.{}", classifier.as_suffix(), extension)
}
