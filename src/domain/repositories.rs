//! Repository provider interface.
//!
//! Handlers depend on this trait instead of a concrete store so they stay
//! testable against a substitute implementation.

use super::subject::SubjectRepository;

pub trait RepositoryProvider: Send + Sync {
    fn subjects(&self) -> &dyn SubjectRepository;
}
