//! Shared types reused across endpoints.

mod pagination;
mod response;

pub use pagination::PageParams;
pub use response::Acknowledgement;
