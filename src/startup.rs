use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{
    calculate_price, clear_harvest_entries, save_harvest_batch, show_harvest_report,
    show_harvest_table, show_price_form,
};
use crate::store::HarvestStore;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware, web};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::TcpListener;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store = HarvestStore::new(get_connection_pool(&configuration.database));
        store.migrate().await?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(configuration.max_connections)
        .connect_lazy_with(configuration.connect_options())
}

/// Route table shared by the server and the http tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_price_form))
        .route("/calcular", web::post().to(calculate_price))
        .route("/tabla_recolectores", web::get().to(show_harvest_table))
        .route("/guardar_recolectores", web::post().to(save_harvest_batch))
        .route("/borrar_registros", web::post().to(clear_harvest_entries))
        .route("/ver_registros", web::get().to(show_harvest_report));
}

fn run(listener: TcpListener, store: HarvestStore) -> Result<Server, anyhow::Error> {
    let store = Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
