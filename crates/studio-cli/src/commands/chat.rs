use std::sync::Arc;

use anyhow::{Context, Result};
use studio_application::ChatPanel;
use studio_core::chat::{Author, ChatEndpoint, SubmitOutcome};
use studio_core::config::StudioConfig;
use studio_infrastructure::HeadlessPage;
use studio_interaction::{HttpChatEndpoint, KeywordResponder};

pub async fn run(config: &StudioConfig, messages: &[String], offline: bool) -> Result<()> {
    let page = Arc::new(HeadlessPage::from_settings(&config.widget));
    let endpoint = build_endpoint(config, offline)?;
    let panel = ChatPanel::from_settings(&config.chat, endpoint, page.clone());

    panel.open();
    for message in messages {
        page.type_input(message);
        let submission = panel.submit(message);
        if let SubmitOutcome::Ignored = submission.outcome {
            tracing::warn!("Skipping blank message");
            continue;
        }
        submission.settled().await;
    }

    for rendered in page.snapshot().messages {
        let who = match rendered.author {
            Author::User => "you",
            Author::Assistant => "studio",
        };
        println!("{who:>6}: {}", rendered.text);
    }
    Ok(())
}

fn build_endpoint(config: &StudioConfig, offline: bool) -> Result<Arc<dyn ChatEndpoint>> {
    if offline || config.chat.endpoint_url().is_none() {
        tracing::info!("Using the offline keyword responder");
        return Ok(Arc::new(KeywordResponder::new()));
    }
    let endpoint =
        HttpChatEndpoint::from_settings(&config.chat).context("Failed to build chat endpoint")?;
    tracing::info!("Using chat endpoint {}", endpoint.url());
    Ok(Arc::new(endpoint))
}
