//! Application state and dependency injection.

use roster_postgres::PgClient;

use crate::service::{Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pub postgres: PgClient,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to the database and applies pending migrations.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            postgres: config.connect_postgres().await?,
        };

        Ok(service_state)
    }

    /// Creates application state from an already-connected client.
    pub fn new(postgres: PgClient) -> Self {
        Self { postgres }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(postgres: PgClient);
