//! Axum route handlers for the post generation page.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use crate::generation::generator::PostRequest;
use crate::render::{render_page, PageView};
use crate::state::AppState;

/// Raw form fields as the browser sends them. Everything is optional here —
/// validation happens in the handler so rejected input can be echoed back.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub word_count: Option<String>,
}

/// GET /
///
/// Renders the empty form.
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /
///
/// Validates the submission, runs the generation pipeline, and renders the
/// page with the result. Pipeline failures render as an in-page error state,
/// never as a bare 500.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Html<String> {
    let mut view = PageView {
        topic: form.topic.unwrap_or_default(),
        tone: form.tone.unwrap_or_default(),
        platform: form.platform.unwrap_or_default(),
        word_count: form.word_count.unwrap_or_default(),
        ..Default::default()
    };

    // No topic, no generation. Silent re-render matches the form's
    // `required` hint without punishing a bypassed browser check.
    let topic = view.topic.trim();
    if topic.is_empty() {
        return Html(render_page(&view));
    }

    let word_count = match parse_word_count(&view.word_count) {
        Ok(word_count) => word_count,
        Err(message) => {
            view.error = Some(message);
            return Html(render_page(&view));
        }
    };

    let request = PostRequest {
        topic: topic.to_string(),
        platform: non_empty(&view.platform),
        tone: non_empty(&view.tone),
        word_count,
    };

    match state.generator.generate(&request).await {
        Ok(generated) => {
            info!(topic = %request.topic, hashtags = generated.hashtags.len(), "post generated");
            view.result = Some(generated);
        }
        Err(err) => {
            error!(error = %err, topic = %request.topic, "generation pipeline failed");
            view.error = Some(err.user_message().to_string());
        }
    }

    Html(render_page(&view))
}

/// Empty submission means "use the default length phrase"; anything else
/// must be a positive integer.
fn parse_word_count(raw: &str) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err("Word count must be a positive number.".to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::errors::GenerateError;
    use crate::generation::generator::{GeneratedPost, PostGenerator};
    use crate::routes::build_router;

    /// Counts invocations and records the last request so tests can assert
    /// on what actually reached the pipeline.
    struct StubGenerator {
        calls: AtomicUsize,
        fail: bool,
        last_request: Mutex<Option<PostRequest>>,
    }

    impl StubGenerator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
                last_request: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl PostGenerator for StubGenerator {
        async fn generate(&self, request: &PostRequest) -> Result<GeneratedPost, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            if self.fail {
                Err(GenerateError::InvalidOutput("stub failure".to_string()))
            } else {
                Ok(GeneratedPost {
                    post: "X".to_string(),
                    hashtags: vec!["#a".to_string(), "#b".to_string()],
                })
            }
        }
    }

    fn test_app(stub: Arc<StubGenerator>) -> axum::Router {
        build_router(AppState { generator: stub })
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_renders_empty_form() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<form"));
        assert!(!html.contains("class=\"result\""));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_topic_skips_pipeline_and_echoes_fields() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        let response = app
            .oneshot(form_post(
                "topic=&tone=Funny&platform=Instagram&word_count=60",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("value=\"Funny\""));
        assert!(html.contains("value=\"Instagram\""));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_topic_skips_pipeline() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        let response = app.oneshot(form_post("tone=Funny")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_submission_reaches_pipeline_and_renders_result() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        let response = app
            .oneshot(form_post(
                "topic=Coffee&tone=Funny&platform=Instagram&word_count=60",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);

        let request = stub.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.topic, "Coffee");
        assert_eq!(request.platform.as_deref(), Some("Instagram"));
        assert_eq!(request.tone.as_deref(), Some("Funny"));
        assert_eq!(request.word_count, Some(60));

        let html = body_string(response).await;
        assert!(html.contains(">X</p>"));
        let a = html.find("<li>#a</li>").unwrap();
        let b = html.find("<li>#b</li>").unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn test_omitted_word_count_passes_none_to_pipeline() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        app.oneshot(form_post("topic=Coffee&tone=Funny&platform=Instagram"))
            .await
            .unwrap();

        let request = stub.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.word_count, None);
    }

    #[tokio::test]
    async fn test_invalid_word_count_rejected_before_pipeline() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        let response = app
            .oneshot(form_post("topic=Coffee&word_count=sixty"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        let html = body_string(response).await;
        assert!(html.contains("positive number"));
    }

    #[tokio::test]
    async fn test_repeated_submissions_invoke_pipeline_each_time() {
        let stub = StubGenerator::new(false);
        let app = test_app(stub.clone());

        for _ in 0..2 {
            app.clone()
                .oneshot(form_post("topic=Coffee&tone=Funny&platform=Instagram"))
                .await
                .unwrap();
        }

        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_pipeline_failure_renders_error_state() {
        let stub = StubGenerator::new(true);
        let app = test_app(stub.clone());

        let response = app.oneshot(form_post("topic=Coffee")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        let html = body_string(response).await;
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("unexpected response"));
        assert!(!html.contains("class=\"result\""));
    }
}
