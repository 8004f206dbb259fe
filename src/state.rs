/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - empty for now; this is where a db pool or clients would go
 * - Held by Clone (internals should be Arc / cheap to clone)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
