use std::fmt::{Display, Formatter};

use url::form_urlencoded;

use crate::maven::classifier_policy::ClassifierPolicy;
use crate::maven::coordinates::MavenClassifier;

/// What to search for. Empty strings mean 'no restriction' for the respective field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QueryCriteria {
    pub base_url: String,
    pub group_id: String,
    pub artifact_id: String,
    pub packaging: String,
    pub classifier_policy: ClassifierPolicy,
}

impl QueryCriteria {
    pub fn new(base_url: &str, group_id: &str, artifact_id: &str, packaging: &str, classifier_policy: ClassifierPolicy) -> QueryCriteria {
        QueryCriteria {
            base_url: base_url.to_string(),
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            packaging: packaging.to_string(),
            classifier_policy,
        }
    }

    /// true if a link with the given extension passes the packaging filter
    pub fn matches_packaging(&self, extension: &str) -> bool {
        self.packaging.is_empty() || self.packaging == extension
    }

    pub fn to_search_query(&self) -> SearchQuery {
        let mut query = SearchQuery::default();
        query.put_if_not_empty("g", &self.group_id);
        query.put_if_not_empty("a", &self.artifact_id);
        query.put_if_not_empty("p", &self.packaging);

        // Only the valid classifiers go to the server as a hint, rejection happens locally.
        //  'no classifier' can not be expressed as a query parameter.
        for classifier in self.classifier_policy.valid() {
            if let MavenClassifier::Classified(c) = classifier {
                query.add("c", c);
            }
        }
        query
    }
}

/// Multi-valued query parameters in insertion order
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn add(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    fn put_if_not_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.add(key, value);
        }
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params.iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `application/x-www-form-urlencoded`, without a leading '?'
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}
