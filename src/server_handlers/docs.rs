use actix_web::{HttpResponse, Responder};
use serde_json::json;
use crate::api_json::{CompletedInput, EligibilityRequest};

pub async fn help_handler() -> impl Responder {
    let example = EligibilityRequest {
        completed: CompletedInput::List(vec!["CHEM 102".to_string(), "BIOCH 200".to_string()]),
    };

    let help = json!({
        "description": "API de prerequisitos. El catálogo se carga una vez al iniciar y es de sólo lectura.",
        "endpoints": {
            "GET /summary": "resumen del parseo y tamaño del grafo",
            "GET /order": "orden topológico (orden parcial + remainder si hay ciclos)",
            "POST /eligibility": "cursos elegibles para una lista de aprobados (ver 'post_example')",
            "GET /eligibility?completed=A,B": "versión ligera con lista separada por comas",
            "GET /courses/{code}?completed=A,B": "requisitos, prerequisitos y dependientes de un curso"
        },
        "post_example": example,
        "get_example_query": "/eligibility?completed=CHEM%20102,BIOCH%20200",
        "note": "Los códigos se normalizan (mayúsculas, espacios colapsados): 'chem  102' == 'CHEM 102'."
    });

    HttpResponse::Ok().json(help)
}
