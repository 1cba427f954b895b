pub mod like;
pub mod pagination;
pub mod shutdown;

pub use like::escape_like;
pub use pagination::{InvalidPagination, PageRequest, PaginatedResult};
pub use shutdown::{listen_for_shutdown_signals, ShutdownSignal};
