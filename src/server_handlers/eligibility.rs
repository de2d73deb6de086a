use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

use crate::api_json::{CompletedInput, EligibilityRequest, EligibilityResponse};
use crate::catalogue::Catalogue;

/// POST /eligibility
/// Body: `{"completed": ["CHEM 102", ...]}` o `{"completed": "CHEM 102,..."}`
pub async fn eligibility_handler(
    cat: web::Data<Catalogue>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let request = match serde_json::from_value::<EligibilityRequest>(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    let completed = request.completed_set();
    debug!(completed = completed.len(), "consulta de elegibilidad");
    HttpResponse::Ok().json(EligibilityResponse::build(&cat, &completed))
}

/// GET /eligibility?completed=CHEM 102,BIOCH 200
pub async fn eligibility_get_handler(
    cat: web::Data<Catalogue>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();
    let request = EligibilityRequest {
        completed: CompletedInput::Csv(qm.get("completed").cloned().unwrap_or_default()),
    };
    let completed = request.completed_set();
    HttpResponse::Ok().json(EligibilityResponse::build(&cat, &completed))
}
