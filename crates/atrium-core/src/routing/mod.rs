//! # Atrium Routing
//!
//! Routes associate a URL path with a view unit. Modules declare
//! [`RouteDescriptor`](route::RouteDescriptor)s; after graph validation the
//! [`RouteTable`](table::RouteTable) collects them application-wide,
//! rejecting duplicate paths. [`DefaultRouter`](router::DefaultRouter)
//! exposes the table as a kernel service.

pub mod error;
pub mod route;
pub mod router;
pub mod table;

pub use error::RoutingError;
pub use route::{normalize_path, RouteDescriptor};
pub use router::DefaultRouter;
pub use table::{RouteEntry, RouteTable};

#[cfg(test)]
mod tests;
