use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenGroupId(pub String);

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenArtifactId(pub String);

/// A version string as it is echoed by a repository, e.g. "1.2" or "1.2-SNAPSHOT"
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenVersion(pub String);

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenCoordinates {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: MavenVersion,
}

/// NB: 'no classifier' is a value of its own and never equal to any named classifier. In
///  configuration files it is written as the empty string.
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MavenClassifier {
    Unclassified,
    Classified(String),
}
impl MavenClassifier {
    pub fn as_suffix(&self) -> String {
        match self {
            MavenClassifier::Unclassified => "".to_string(),
            MavenClassifier::Classified(c) => format!("-{}", c),
        }
    }
}

impl From<Option<&str>> for MavenClassifier {
    fn from(value: Option<&str>) -> Self {
        match value {
            None | Some("") => MavenClassifier::Unclassified,
            Some(s) => MavenClassifier::Classified(s.to_string()),
        }
    }
}

impl From<&str> for MavenClassifier {
    fn from(value: &str) -> Self {
        Some(value).into()
    }
}

impl From<String> for MavenClassifier {
    fn from(value: String) -> Self {
        if value.is_empty() {
            MavenClassifier::Unclassified
        }
        else {
            MavenClassifier::Classified(value)
        }
    }
}

impl From<MavenClassifier> for String {
    fn from(value: MavenClassifier) -> Self {
        match value {
            MavenClassifier::Unclassified => String::new(),
            MavenClassifier::Classified(s) => s,
        }
    }
}

impl Display for MavenClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MavenClassifier::Unclassified => write!(f, "<none>"),
            MavenClassifier::Classified(s) => write!(f, "{}", s),
        }
    }
}
