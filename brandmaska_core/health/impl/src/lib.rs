use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use brandmaska_core_health_contracts::{HealthService, HealthStatus};
use brandmaska_email_contracts::EmailService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
    config: HealthServiceConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl CachedStatus {
    fn fresh(&self, now: Instant, ttl: Duration) -> bool {
        now < self.timestamp + ttl
    }
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email, config: HealthServiceConfig) -> Self {
        Self {
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = Instant::now();
        let ttl = self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| c.fresh(now, ttl)) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| c.fresh(now, ttl)) {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { email },
                timestamp: now,
            })
            .status
    }
}
