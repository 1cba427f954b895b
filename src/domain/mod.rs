pub mod error;
pub mod repositories;
pub mod subject;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use subject::{Department, Subject, SubjectListQuery, SubjectRepository, SubjectWithDepartment};
