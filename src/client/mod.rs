// src/client/mod.rs

use crate::errors::{ErrorClassification, Result};
use crate::models::SentimentResponse;
use crate::validator::SubmissionText;

pub mod http;

pub use http::SentimentClient;

/// A backend that scores text for sentiment.
///
/// `SentimentClient` talks to the real model API; tests plug in fakes.
pub trait SentimentApi: Send + Sync {
    /// Scores validated text and returns the three class probabilities.
    fn analyze(
        &self,
        text: &SubmissionText,
    ) -> impl std::future::Future<Output = Result<SentimentResponse>> + Send;
}

/// Runs one upstream round trip. Any failure is logged and reported to the
/// user as `ServerError`.
pub async fn request_sentiment<A: SentimentApi>(
    api: &A,
    text: &SubmissionText,
) -> std::result::Result<SentimentResponse, ErrorClassification> {
    api.analyze(text).await.map_err(|e| {
        log::error!("Sentiment request failed: {}", e);
        ErrorClassification::ServerError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SentimentError;
    use crate::validator::validate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeApi {
        calls: AtomicUsize,
        reply: fn() -> Result<SentimentResponse>,
    }

    impl FakeApi {
        fn new(reply: fn() -> Result<SentimentResponse>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply,
            }
        }
    }

    impl SentimentApi for FakeApi {
        async fn analyze(&self, _text: &SubmissionText) -> Result<SentimentResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_success_passes_response_through() {
        let api = FakeApi::new(|| Ok(SentimentResponse::new([0.7, 0.2, 0.1])));
        let text = validate("ល្អណាស់").unwrap();

        let resp = request_sentiment(&api, &text).await.unwrap();
        assert_eq!(resp.sentiments(), &[0.7, 0.2, 0.1]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_any_client_error_becomes_server_error() {
        let api = FakeApi::new(|| {
            Err(SentimentError::ApiError {
                status: 503,
                body: "overloaded".to_string(),
            })
        });
        let text = validate("អាក្រក់").unwrap();
        assert_eq!(
            request_sentiment(&api, &text).await,
            Err(ErrorClassification::ServerError)
        );

        let api = FakeApi::new(|| {
            Err(SentimentError::UnexpectedResponse("bad shape".to_string()))
        });
        assert_eq!(
            request_sentiment(&api, &text).await,
            Err(ErrorClassification::ServerError)
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }
}
