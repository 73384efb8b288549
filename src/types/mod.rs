mod filter;
mod issue;

pub use filter::{FilterOptions, FilterState};
pub use issue::{Issue, IssueDetail, NamedField};
