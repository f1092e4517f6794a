use std::sync::Arc;

use crate::download::LinkPolicy;
use crate::release::ReleaseSource;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReleaseSource>,
    pub policy: LinkPolicy,
}

impl AppState {
    pub fn new(source: Arc<dyn ReleaseSource>, policy: LinkPolicy) -> Self {
        Self { source, policy }
    }
}
