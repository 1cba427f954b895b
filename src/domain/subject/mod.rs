pub mod model;
pub mod repository;

pub use model::{Department, Subject, SubjectWithDepartment};
pub use repository::{SubjectListQuery, SubjectRepository};
