use std::sync::Arc;
use parking_lot::Mutex;

#[derive(Clone)]
pub struct CacheConnectorMemcache {
    pub(crate) client: Arc<Mutex<memcache::Client>>,
}
