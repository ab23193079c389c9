use std::sync::Arc;

use relink_admin::LinkAdmin;
use relink_resolver::Resolver;

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn Resolver>,
    admin: Arc<dyn LinkAdmin>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn Resolver>, admin: Arc<dyn LinkAdmin>) -> Self {
        Self { resolver, admin }
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn admin(&self) -> &dyn LinkAdmin {
        self.admin.as_ref()
    }
}
