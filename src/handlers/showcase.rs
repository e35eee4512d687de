use crate::models::showcase::Provenance;
use crate::services::resolver::ShowcaseResolver;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

pub struct AppState {
    pub resolver: Arc<ShowcaseResolver>,
}

fn cache_control(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Live | Provenance::Cache => {
            "public, max-age=0, s-maxage=3600, stale-while-revalidate=60"
        }
        Provenance::Fallback => "no-store",
    }
}

/// `GET /api/github`. Always answers 200; failures only show up in `provenance`.
pub async fn get_github_data(data: web::Data<AppState>) -> HttpResponse {
    let resolution = data.resolver.resolve().await;
    let provenance = resolution.provenance();

    HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, cache_control(provenance)))
        .json(resolution.into_response())
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "showcase-api"
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/github", web::get().to(get_github_data));
}
