// src/api/handlers/sentiment.rs
use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::client::request_sentiment;
use crate::errors::{ErrorBody, ErrorClassification};
use crate::models::SentimentRequest;
use crate::presenter::DisplayResult;
use crate::validator;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub result: DisplayResult,
    pub analyzed_at: String,
}

fn error_response(kind: ErrorClassification) -> HttpResponse {
    if kind.is_validation() {
        HttpResponse::BadRequest().json(ErrorBody::from(kind))
    } else {
        HttpResponse::BadGateway().json(ErrorBody::from(kind))
    }
}

/// One-shot analysis: validate, call the model API once, return the display rows.
pub async fn analyze_sentiment(
    state: web::Data<AppState>,
    req: web::Json<SentimentRequest>,
) -> Result<HttpResponse> {
    let text = match validator::validate(&req.text) {
        Ok(text) => text,
        Err(kind) => {
            log::info!("Rejected submission: {:?}", kind);
            return Ok(error_response(kind));
        }
    };

    match request_sentiment(&state.sentiment, &text).await {
        Ok(response) => {
            let id = Uuid::new_v4().to_string();
            let result = DisplayResult::from_response(&response, state.config.presentation.order);
            log::info!("Analysis {} completed", id);

            Ok(HttpResponse::Ok().json(AnalysisResponse {
                id,
                result,
                analyzed_at: chrono::Utc::now().to_rfc3339(),
            }))
        }
        Err(kind) => Ok(error_response(kind)),
    }
}
