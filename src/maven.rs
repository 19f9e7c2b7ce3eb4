pub mod classifier_policy;
pub mod coordinates;
pub mod paths;
