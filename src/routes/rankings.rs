use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::config::RankingSettings;
use crate::core::{
    available_brands, redistribute, score, CatalogFilter, Comparison, PriceRange, Ranker,
};
use crate::models::{
    CatalogResponse, CompareRequest, ComparisonResponse, ComparisonScores, ErrorResponse,
    HealthResponse, RankRequest, RankingsResponse, RedistributeRequest, WeightsResponse,
};
use crate::services::{Catalog, CatalogError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ranker: Ranker,
    pub ranking: RankingSettings,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/catalog", web::get().to(get_catalog))
        .route("/weights/default", web::get().to(default_weights))
        .route("/weights/redistribute", web::post().to(redistribute_weights))
        .route("/rankings", web::post().to(rank))
        .route("/comparisons", web::post().to(compare));
}

fn validation_error(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn catalog_error(err: CatalogError) -> HttpResponse {
    match err {
        CatalogError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        _ => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Catalog error".to_string(),
            message: err.to_string(),
            status_code: 500,
        }),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

/// Catalog listing endpoint
///
/// GET /api/v1/catalog
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    let items = state.catalog.items();

    HttpResponse::Ok().json(CatalogResponse {
        smartphones: items.to_vec(),
        brands: available_brands(items),
        price_range: PriceRange::covering(items),
    })
}

/// Default weights endpoint
///
/// GET /api/v1/weights/default
async fn default_weights(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(WeightsResponse::from(state.ranker.default_weights().clone()))
}

/// Weight redistribution endpoint
///
/// POST /api/v1/weights/redistribute
///
/// Request body:
/// ```json
/// {
///   "weights": [{"id": "camera", "weight": 30}, {"id": "display", "weight": 25}],
///   "criterion": "camera",
///   "value": 60
/// }
/// ```
async fn redistribute_weights(req: web::Json<RedistributeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for redistribute request: {}", errors);
        return validation_error(errors);
    }

    let weights = redistribute(&req.weights, req.criterion, req.value);

    tracing::debug!(
        "Set {} to {}, new total {}",
        req.criterion,
        req.value,
        weights.total()
    );

    HttpResponse::Ok().json(WeightsResponse::from(weights))
}

/// Rankings endpoint
///
/// POST /api/v1/rankings
///
/// Request body:
/// ```json
/// {
///   "weights": [{"id": "camera", "weight": 30}],
///   "priceRange": {"min": 500, "max": 1200},
///   "brands": ["Apple", "Google"],
///   "limit": 20
/// }
/// ```
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rankings request: {}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.unwrap_or(state.ranking.default_limit);
    if limit > state.ranking.max_limit {
        tracing::warn!("Rankings limit {} exceeds max {}", limit, state.ranking.max_limit);
        let mut errors = ValidationErrors::new();
        errors.add("limit", ValidationError::new("range"));
        return validation_error(errors);
    }
    let limit = limit as usize;

    let filter = CatalogFilter::new(req.price_range, req.brands);
    let result = state
        .ranker
        .rank(state.catalog.items(), &filter, req.weights.as_ref(), limit);

    tracing::info!(
        "Ranked {} of {} phones (limit {})",
        result.filtered_candidates,
        result.total_candidates,
        limit
    );

    HttpResponse::Ok().json(RankingsResponse {
        rankings: result.rankings,
        weights: result.weights,
        total_candidates: result.total_candidates,
        filtered_candidates: result.filtered_candidates,
    })
}

/// Comparison endpoint
///
/// POST /api/v1/comparisons
///
/// Request body:
/// ```json
/// {
///   "fromId": "2",
///   "toId": "1",
///   "weights": [{"id": "price", "weight": 40}]
/// }
/// ```
async fn compare(state: web::Data<AppState>, req: web::Json<CompareRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for comparison request: {}", errors);
        return validation_error(errors);
    }

    let to = match state.catalog.get(&req.to_id) {
        Ok(phone) => phone,
        Err(e) => return catalog_error(e),
    };

    let from = match req.from_id.as_deref() {
        Some(id) => match state.catalog.get(id) {
            Ok(phone) => Some(phone),
            Err(e) => return catalog_error(e),
        },
        None => None,
    };

    let weights = req
        .weights
        .as_ref()
        .unwrap_or_else(|| state.ranker.default_weights());
    let comparison = Comparison::between(from, to, weights);

    tracing::info!(
        "Compared {} -> {}: decisive factor {:?}",
        req.from_id.as_deref().unwrap_or("<none>"),
        req.to_id,
        comparison.decisive_factor().map(|f| f.criterion)
    );

    let decisive_factor = comparison.decisive_factor().cloned();
    let net_difference = comparison.net_difference();

    // Totals come from ranking the whole catalog under the same weights
    let scores = from.and_then(|from| {
        let ranked = score(state.catalog.items(), weights);
        let total_of = |id: &str| ranked.iter().find(|s| s.item.id == id).map(|s| s.total_score);
        Some(ComparisonScores::new(total_of(&from.id)?, total_of(&to.id)?))
    });

    HttpResponse::Ok().json(ComparisonResponse {
        from_id: req.from_id.clone(),
        to_id: req.to_id.clone(),
        factors: comparison.into_factors(),
        decisive_factor,
        net_difference,
        scores,
    })
}
