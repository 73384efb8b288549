use serde::{Deserialize, Serialize};

/// A `{"name": ...}` sub-object as Redmine nests them (status, project,
/// priority). Extra fields like `id` are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedField {
    pub name: String,
}

/// One issue as returned by the `/issues.json` listing.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub id: u64,
    pub subject: String,
    pub status: NamedField,
    pub project: NamedField,
    pub priority: Option<NamedField>,
}

/// Full issue as returned by `/issues/{id}.json`. Adds the description;
/// never merged back into a listing.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IssueDetail {
    pub id: u64,
    pub subject: String,
    pub description: Option<String>,
    pub status: NamedField,
    pub project: NamedField,
}
