use insight::{ContextTag, DataSnapshot, GenerationConfig, InsightService};
use insight_sdk::{
    insight_sdk_test::{MockGenerateResult, MockLanguageModel},
    LanguageModelError, ModelOutcome,
};
use std::{
    io::Write,
    sync::{Arc, Mutex},
};
use tracing::Level;

/// Collects formatted log lines of the current thread.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn error_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn service(config: GenerationConfig, model: Arc<MockLanguageModel>) -> InsightService {
    InsightService::builder(Arc::new(config)).model(model).build()
}

fn configured() -> GenerationConfig {
    GenerationConfig::new("secret-test-key", "gemini-1.5-flash")
}

#[tokio::test]
async fn upstream_failure_is_logged_before_returning() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::StatusCode(
        reqwest::StatusCode::TOO_MANY_REQUESTS,
        "quota exceeded".to_string(),
    ));
    let result = service(configured(), model)
        .generate_insight(&ContextTag::Finance, &DataSnapshot::new())
        .await;

    assert!(result.is_err());
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1, "logs: {}", logs.contents());
    assert!(errors[0].contains("insight generation failed"));
    assert!(errors[0].contains("quota exceeded"));
    assert!(errors[0].contains("finance"));
}

#[tokio::test]
async fn transport_failures_are_logged() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(ModelOutcome::Malformed("expected value".to_string()));
    model.enqueue_generate(LanguageModelError::InvalidInput("bad header".to_string()));
    let service = service(configured(), model);

    assert!(service
        .generate_answer("Why?", &ContextTag::Habits, &DataSnapshot::new())
        .await
        .is_err());
    assert!(service
        .generate_insight(&ContextTag::Habits, &DataSnapshot::new())
        .await
        .is_err());

    let errors = logs.error_lines();
    assert_eq!(errors.len(), 2, "logs: {}", logs.contents());
    assert!(errors[0].contains("expected value"));
    assert!(errors[1].contains("bad header"));
}

#[tokio::test]
async fn successful_and_unconfigured_calls_log_no_errors() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(MockGenerateResult::text("### Analysis\nAll good."));
    model.enqueue_generate(ModelOutcome::Empty);

    let configured_service = service(configured(), model.clone());
    configured_service
        .generate_insight(&ContextTag::Tasks, &DataSnapshot::new())
        .await
        .unwrap();
    configured_service
        .generate_insight(&ContextTag::Tasks, &DataSnapshot::new())
        .await
        .unwrap();
    assert!(service(GenerationConfig::default(), model)
        .generate_insight(&ContextTag::Tasks, &DataSnapshot::new())
        .await
        .is_err());

    assert!(logs.error_lines().is_empty(), "logs: {}", logs.contents());
    assert!(logs.contents().contains("no API key configured"));
}

#[tokio::test]
async fn api_key_never_reaches_the_logs() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::StatusCode(
        reqwest::StatusCode::FORBIDDEN,
        "permission denied".to_string(),
    ));
    let _ = service(configured(), model)
        .generate_insight(&ContextTag::Vision, &DataSnapshot::new())
        .await;

    assert!(logs.contents().contains("compiled prompt"));
    assert!(!logs.contents().contains("secret-test-key"));
}
