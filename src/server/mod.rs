// HTTP server: hyper HTTP/1 connections, routing, and the form page.

pub mod connection;
pub mod page;
pub mod response;
pub mod router;

pub use connection::{bind, serve};
pub use router::{handle_request, AppState};
