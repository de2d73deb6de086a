use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::collections::{HashMap, HashSet};

use crate::api_json::{CourseResponse, OrderResponse, SummaryResponse};
use crate::catalogue::Catalogue;
use crate::config::split_completed;
use crate::models::CourseCode;

/// GET /summary
pub async fn summary_handler(cat: web::Data<Catalogue>) -> impl Responder {
    HttpResponse::Ok().json(SummaryResponse::build(&cat))
}

/// GET /order
/// Con ciclos igual responde 200: `has_cycle` y `remainder` lo informan.
pub async fn order_handler(cat: web::Data<Catalogue>) -> impl Responder {
    HttpResponse::Ok().json(OrderResponse::from(&cat.order))
}

/// GET /courses/{code}?completed=A,B
pub async fn course_handler(
    cat: web::Data<Catalogue>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let code = CourseCode::new(&path.into_inner());
    if code.as_str().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "course code is required"}));
    }

    // `completed` presente (aunque vacío) activa la evaluación de elegibilidad
    let completed: Option<HashSet<CourseCode>> = query
        .get("completed")
        .map(|s| split_completed(s).into_iter().collect());

    match CourseResponse::build(&cat, &code, completed.as_ref()) {
        Some(resp) => HttpResponse::Ok().json(resp),
        None => HttpResponse::NotFound().json(json!({"error": format!("unknown course '{}'", code)})),
    }
}
