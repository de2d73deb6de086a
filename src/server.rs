use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::catalogue::Catalogue;
use crate::server_handlers::{
    course_handler, eligibility_get_handler, eligibility_handler, help_handler, order_handler,
    summary_handler,
};

/// Registra las rutas. Separado de `run_server` para poder montarlo en los
/// tests con `actix_web::test::init_service`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/summary", web::get().to(summary_handler))
        .route("/order", web::get().to(order_handler))
        .route("/eligibility", web::post().to(eligibility_handler))
        .route("/eligibility", web::get().to(eligibility_get_handler))
        .route("/courses/{code}", web::get().to(course_handler))
        .route("/help", web::get().to(help_handler));
}

/// Sirve el catálogo ya construido. Es de sólo lectura: todas las
/// peticiones comparten el mismo `Arc` sin locks.
pub async fn run_server(bind_addr: &str, catalogue: Catalogue) -> std::io::Result<()> {
    let data = web::Data::new(catalogue);
    info!(bind = bind_addr, "iniciando servidor");
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(bind_addr)?
        .run()
        .await
}
