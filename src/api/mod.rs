/*
 * Responsibility
 * - public interface of the api layer (routes() re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
