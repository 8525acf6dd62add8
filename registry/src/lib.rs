use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::registration::RegistrationRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::event::EventRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::registration::RegistrationRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
    app_config: Arc<AppConfig>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        Self::from_parts(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(pool.clone())),
            Arc::new(UserRepositoryImpl::new(pool.clone())),
            Arc::new(EventRepositoryImpl::new(pool.clone())),
            Arc::new(RegistrationRepositoryImpl::new(pool)),
            app_config,
        )
    }

    /// Wires a registry from pre-built repositories. The API tests use
    /// this seam to substitute in-memory implementations.
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        user_repository: Arc<dyn UserRepository>,
        event_repository: Arc<dyn EventRepository>,
        registration_repository: Arc<dyn RegistrationRepository>,
        app_config: AppConfig,
    ) -> Self {
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            event_repository,
            registration_repository,
            app_config: Arc::new(app_config),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn registration_repository(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repository.clone()
    }

    pub fn app_config(&self) -> Arc<AppConfig> {
        self.app_config.clone()
    }
}
