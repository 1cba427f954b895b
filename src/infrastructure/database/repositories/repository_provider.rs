//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::subject::SubjectRepository;

use super::subject_repository::SeaOrmSubjectRepository;

/// Repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    subjects: SeaOrmSubjectRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            subjects: SeaOrmSubjectRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn subjects(&self) -> &dyn SubjectRepository {
        &self.subjects
    }
}
