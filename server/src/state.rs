use std::sync::Arc;

use delivery::{AreaTable, SERVICE_TABLE};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub areas: &'static AreaTable,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        Arc::new(Self {
            config,
            areas: &SERVICE_TABLE,
        })
    }
}
