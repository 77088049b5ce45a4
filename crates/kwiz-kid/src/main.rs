use anyhow::{bail, Context};
use kwiz_config::AppConfig;
use kwiz_kid::actions::{AuthAction, LifecycleAction, QuizAction, SubscriptionAction};
use kwiz_kid::{build_store, logger, seed_bank, AppState, Services};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Longest we wait for the store to reach the next step of the session
const STEP_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may set RUST_LOG, so load it before the logger
    let env_file = dotenvy::dotenv().ok();
    let log_file = logger::init()?;

    log::info!("Starting kwiz-kid");
    if let Some(path) = env_file {
        log::debug!("Loaded .env file from: {:?}", path);
    }

    let config = AppConfig::load();
    let bank = seed_bank(&config).await;
    let mut store = build_store(&config, &Services::with_bank(bank));
    let mut states = store.subscribe();
    let handle = store.spawn();

    handle.dispatch(LifecycleAction::AppLaunched);
    let state = wait_for(&mut states, "categories", |s| {
        !s.categories.is_empty() && !s.is_loading
    })
    .await?;
    let category = state.categories[0].clone();

    handle.dispatch(AuthAction::sign_in("kid@example.com", "kwizkid"));
    wait_for(&mut states, "sign in", |s| s.is_signed_in()).await?;

    handle.dispatch(QuizAction::SelectCategory(category.clone()));
    handle.dispatch(QuizAction::StartQuiz(category));
    let state = wait_for(&mut states, "quiz", |s| {
        s.current_quiz.is_some() || s.error_message.is_some()
    })
    .await?;
    let Some(quiz) = state.current_quiz.clone() else {
        bail!("quiz failed to load: {:?}", state.error_message);
    };

    let answers: Vec<Option<usize>> = quiz
        .questions
        .iter()
        .map(|q| Some(q.correct_answer))
        .collect();
    let score = quiz.grade(&answers, quiz.time_limit / 2, chrono::Utc::now());
    handle.dispatch(QuizAction::SubmitQuiz);
    handle.dispatch(QuizAction::QuizCompleted(score));
    wait_for(&mut states, "results", |s| s.current_quiz.is_none()).await?;

    handle.dispatch(SubscriptionAction::PurchaseSubscription);
    wait_for(&mut states, "purchase", |s| {
        s.subscription_status.has_premium_access() || s.error_message.is_some()
    })
    .await?;

    let store = handle.shutdown().await?;
    let json = serde_json::to_string_pretty(&*store.state()).context("Failed to encode state")?;
    println!("{}", json);
    println!("Log file: {}", log_file.display());

    log::info!("Exiting kwiz-kid");
    Ok(())
}

/// Wait for the first committed state matching `ready`
async fn wait_for(
    states: &mut UnboundedReceiver<Arc<AppState>>,
    step: &str,
    ready: impl Fn(&AppState) -> bool,
) -> anyhow::Result<Arc<AppState>> {
    loop {
        let state = tokio::time::timeout(STEP_TIMEOUT, states.recv())
            .await
            .with_context(|| format!("Timed out waiting for {}", step))?
            .with_context(|| format!("Store stopped before {}", step))?;
        if ready(&state) {
            log::debug!("Session step '{}' reached", step);
            return Ok(state);
        }
    }
}
