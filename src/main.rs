use std::time::Duration;

use clap::Parser;
use moodmind::{names, sessions::QuizSessions, store::Store, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Mark cookies `Secure`. Enable when served over HTTPS.
    #[arg(long, env)]
    secure_cookies: bool,

    /// Simulated thinking time of the demo chatbot, in milliseconds.
    #[arg(long, env, default_value_t = names::DEFAULT_CHATBOT_DELAY_MS)]
    chatbot_delay_ms: u64,

    /// Whether the emotion-detection demo is advertised as available.
    #[arg(long, env, default_value_t = true, action = clap::ArgAction::Set)]
    emotion_detection: bool,

    /// How many quiz sessions to keep before evicting the oldest.
    #[arg(long, env, default_value_t = names::DEFAULT_MAX_QUIZ_SESSIONS)]
    max_quiz_sessions: usize,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,moodmind=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState {
        sessions: QuizSessions::new(args.max_quiz_sessions),
        secure_cookies: args.secure_cookies,
        chatbot_delay: Duration::from_millis(args.chatbot_delay_ms),
        emotion_detection: args.emotion_detection,
        ..AppState::new(Store::new())
    };
    let routes = moodmind::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
