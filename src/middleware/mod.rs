/*
 * Responsibility
 * - public interface of the middleware layer (re-exports)
 */
pub mod cors;
pub mod http;
