//! DTO modules that bridge the backend wire format with the domain.

pub mod api;
