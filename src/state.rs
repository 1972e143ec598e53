//! Shared application state: the gateway handle injected into every handler.

use crate::entity::Entity;
use crate::gateway::Gateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState<E: Entity> {
    pub gateway: Arc<dyn Gateway<E>>,
}

impl<E: Entity> AppState<E> {
    pub fn new(gateway: Arc<dyn Gateway<E>>) -> Self {
        AppState { gateway }
    }
}
