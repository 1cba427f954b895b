//! Subject repository interface.

use async_trait::async_trait;

use super::model::SubjectWithDepartment;
use crate::domain::DomainResult;
use crate::shared::pagination::{PageRequest, PaginatedResult};

/// Normalized query plan for the subject listing.
///
/// Built at the HTTP boundary; by the time it reaches a repository both
/// filters are non-empty strings and the page request is clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectListQuery {
    /// Case-insensitive substring match against subject name or code.
    pub search: Option<String>,
    /// Case-insensitive substring match against department name.
    pub department: Option<String>,
    pub page: PageRequest,
}

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// List subjects with their departments, filtered and paginated.
    ///
    /// The total count and the page rows come from two independent reads
    /// with no transaction between them; under concurrent writes `total`
    /// and the returned page can disagree. Accepted limitation.
    async fn list(
        &self,
        query: &SubjectListQuery,
    ) -> DomainResult<PaginatedResult<SubjectWithDepartment>>;
}
