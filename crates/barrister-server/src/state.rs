use barrister_core::Backend;

/// Shared application state, available to all route handlers via `State<Arc<AppState<B>>>`.
pub struct AppState<B: Backend> {
    pub backend: B,
}

impl<B: Backend> AppState<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}
