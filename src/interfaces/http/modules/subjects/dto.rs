//! Subject listing DTOs and query-parameter normalization

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::subject::{SubjectListQuery, SubjectWithDepartment};
use crate::shared::pagination::{InvalidPagination, PageRequest, PaginatedResult};

/// Raw listing parameters as they arrive on the query string.
///
/// A single logical parameter may arrive zero, one, or many times; the
/// boundary rule is "first value wins" before any parsing runs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListSubjectsParams {
    pub search: Option<String>,
    pub department: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListSubjectsParams {
    /// Collapse decoded query pairs, keeping the first occurrence of each
    /// known key. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut params.search,
                "department" => &mut params.department,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Normalize into a query plan.
    ///
    /// Empty filter strings count as absent; pagination values go through
    /// `PageRequest::parse` and malformed ones surface as an error here,
    /// before any store access.
    pub fn into_query(self) -> Result<SubjectListQuery, InvalidPagination> {
        let page = PageRequest::parse(self.page.as_deref(), self.limit.as_deref())?;
        Ok(SubjectListQuery {
            search: self.search.filter(|s| !s.is_empty()),
            department: self.department.filter(|s| !s.is_empty()),
            page,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// Joined department, null when the subject has none
    pub department: Option<DepartmentDto>,
}

impl SubjectDto {
    fn from_domain(row: SubjectWithDepartment) -> Self {
        Self {
            id: row.subject.id,
            name: row.subject.name,
            code: row.subject.code,
            department_id: row.subject.department_id,
            created_at: row.subject.created_at,
            department: row.department.map(|d| DepartmentDto {
                id: d.id,
                name: d.name,
            }),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Success envelope of the listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectListResponse {
    pub data: Vec<SubjectDto>,
    pub pagination: PaginationDto,
}

impl SubjectListResponse {
    pub fn from_result(result: PaginatedResult<SubjectWithDepartment>) -> Self {
        Self {
            pagination: PaginationDto {
                page: result.page,
                limit: result.limit,
                total: result.total,
                total_pages: result.total_pages,
            },
            data: result
                .items
                .into_iter()
                .map(SubjectDto::from_domain)
                .collect(),
        }
    }
}
