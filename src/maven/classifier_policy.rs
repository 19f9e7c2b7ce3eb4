use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::maven::coordinates::MavenClassifier;

/// Result of looking up a classifier in a [ClassifierPolicy]
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ClassifierMembership {
    Valid,
    Invalid,
    Unspecified,
}

/// Two explicit sets of classifiers: those that are accepted and those that are rejected.
///  Everything that is in neither set is 'unspecified', and unspecified classifiers are
///  rejected as well.
///
/// If a classifier is in both sets, rejection wins.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPolicy {
    #[serde(default)]
    valid: BTreeSet<MavenClassifier>,
    #[serde(default)]
    invalid: BTreeSet<MavenClassifier>,
}

impl ClassifierPolicy {
    pub fn new(
        valid: impl IntoIterator<Item = MavenClassifier>,
        invalid: impl IntoIterator<Item = MavenClassifier>,
    ) -> ClassifierPolicy {
        ClassifierPolicy {
            valid: valid.into_iter().collect(),
            invalid: invalid.into_iter().collect(),
        }
    }

    /// Accepts unclassified artifacts only, and explicitly rejects source and javadoc jars.
    pub fn default_policy() -> ClassifierPolicy {
        ClassifierPolicy::new(
            [MavenClassifier::Unclassified],
            [MavenClassifier::from("sources"), MavenClassifier::from("javadoc")],
        )
    }

    pub fn valid(&self) -> impl Iterator<Item = &MavenClassifier> {
        self.valid.iter()
    }

    pub fn invalid(&self) -> impl Iterator<Item = &MavenClassifier> {
        self.invalid.iter()
    }

    pub fn is_valid(&self, classifier: &MavenClassifier) -> bool {
        self.valid.contains(classifier)
    }

    pub fn is_invalid(&self, classifier: &MavenClassifier) -> bool {
        self.invalid.contains(classifier)
    }

    pub fn membership(&self, classifier: &MavenClassifier) -> ClassifierMembership {
        if self.is_invalid(classifier) {
            ClassifierMembership::Invalid
        }
        else if self.is_valid(classifier) {
            ClassifierMembership::Valid
        }
        else {
            ClassifierMembership::Unspecified
        }
    }

    pub fn accepts(&self, classifier: &MavenClassifier) -> bool {
        match self.membership(classifier) {
            ClassifierMembership::Valid => true,
            ClassifierMembership::Invalid | ClassifierMembership::Unspecified => false,
        }
    }
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        ClassifierPolicy::default_policy()
    }
}
