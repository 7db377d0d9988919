use anyhow::Result;
use idea_forge::client::{self, GeminiClient, generate_idea};
use idea_forge::config::Config;
use idea_forge::prompt::IdeaRequest;

#[tokio::test]
#[ignore = "Requires GEMINI_API_KEY environment variable"]
async fn test_live_generate_idea() -> Result<()> {
    dotenvy::dotenv().ok();

    if std::env::var("GEMINI_API_KEY").is_err() {
        eprintln!("Skipping live Gemini test - set GEMINI_API_KEY to run");
        return Ok(());
    }

    let config = Config::load()?;
    let client = GeminiClient::new(&config)?;
    let request = IdeaRequest::new("Food", "AI").expect("inputs are non-empty");

    let idea = generate_idea(&client, &request).await;
    assert!(!idea.is_empty());
    assert_ne!(idea, client::ERROR_FALLBACK);

    println!("Generated idea:\n{}", idea);

    Ok(())
}
