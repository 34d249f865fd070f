//! Server construction and middleware wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use mockable::{Clock, DefaultClock};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{
    ActivityFeedService, DashboardService, DirectoryService, StockAlertService,
};
use crate::inbound::http::appointments::recent_appointments;
use crate::inbound::http::dashboard::dashboard_metrics;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::inventory::inventory_alerts;
use crate::inbound::http::users::list_users;
use crate::inbound::http::AdminState;
use crate::middleware::trace::Trace;
use crate::outbound::persistence::{
    DbPool, DieselAppointmentRepository, DieselInventoryRepository, DieselUserDirectoryRepository,
};

/// Server configuration: where to listen and which store to read from.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// When absent the server runs on fixture data, for development and
    /// handler tests without a database.
    pub db_pool: Option<DbPool>,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

/// Wire the driving ports for the configured store: Diesel-backed services
/// when a pool is available, fixtures otherwise.
pub fn build_admin_state(config: &ServerConfig) -> AdminState {
    match &config.db_pool {
        Some(pool) => {
            let users = Arc::new(DieselUserDirectoryRepository::new(pool.clone()));
            let appointments = Arc::new(DieselAppointmentRepository::new(pool.clone()));
            let inventory = Arc::new(DieselInventoryRepository::new(pool.clone()));
            let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

            AdminState::new(
                Arc::new(DashboardService::new(
                    users.clone(),
                    appointments.clone(),
                    inventory.clone(),
                    clock.clone(),
                )),
                Arc::new(DirectoryService::new(users)),
                Arc::new(ActivityFeedService::new(appointments)),
                Arc::new(StockAlertService::new(inventory, clock)),
            )
        }
        None => AdminState::fixtures(),
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    admin_state: web::Data<AdminState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let admin = web::scope("/api/v1/admin")
        .service(dashboard_metrics)
        .service(list_users)
        .service(recent_appointments)
        .service(inventory_alerts);

    let app = App::new()
        .app_data(health_state)
        .app_data(admin_state)
        .wrap(Trace)
        .service(admin)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let admin_state = web::Data::new(build_admin_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), admin_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
