use insight::{AppState, ContextTag, DataSnapshot, InsightService, SettingsRecord};
use insight_sdk::google::GoogleModelOptions;
use serde_json::json;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    let state = AppState::with_settings(SettingsRecord {
        ai_api_key: env::var("GOOGLE_API_KEY").ok(),
        ai_model: env::var("GEMINI_MODEL").ok(),
        ..Default::default()
    });
    let service = InsightService::google(state, GoogleModelOptions::default());

    let context: ContextTag = env::args()
        .nth(1)
        .unwrap_or_else(|| "finance".to_string())
        .into();

    let data = DataSnapshot::new()
        .with(
            "expenses",
            json!([
                { "date": "2024-05-02", "category": "Groceries", "amount": 84.20 },
                { "date": "2024-05-04", "category": "Dining", "amount": 56.00 },
                { "date": "2024-05-09", "category": "Dining", "amount": 71.50 },
                { "date": "2024-05-11", "category": "Transport", "amount": 23.00 }
            ]),
        )
        .with(
            "budget",
            json!({ "Groceries": 300, "Dining": 100, "Transport": 80 }),
        )
        .with(
            "tasks",
            json!([
                { "title": "Renew passport", "priority": "high", "due": "2024-05-20", "done": false },
                { "title": "Plan weekend hike", "priority": "low", "done": false }
            ]),
        );

    let insight = service.generate_insight(&context, &data).await?;
    println!("{insight}\n");

    let answer = service
        .generate_answer("Where am I over budget?", &context, &data)
        .await?;
    println!("{answer}");

    Ok(())
}
