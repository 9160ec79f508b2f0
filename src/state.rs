//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::identity::IdentityDirectory;
use crate::middleware::AccessGuard;

/// State shared by the router and its guards.
///
/// Generic over the directory so tests can swap in a mock or a wiremock-backed
/// client without touching the router.
pub struct AppState<D> {
    config: Arc<Config>,
    directory: Arc<D>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<D> AppState<D>
where
    D: IdentityDirectory + 'static,
{
    pub fn new(config: Config, directory: D) -> Self {
        Self {
            config: Arc::new(config),
            directory: Arc::new(directory),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    /// Guard configured with this state's directory and admin email
    pub fn access_guard(&self) -> AccessGuard<D> {
        AccessGuard::new(Arc::clone(&self.directory), self.config.admin.clone())
    }
}
