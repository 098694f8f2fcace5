//! Tour binary: wires the store to the terminal UI.

use syntax_tour::app::{AppState, app_reducer};
use syntax_tour::environment::{SystemClock, TourEnvironment};
use syntax_tour::functions;
use syntax_tour::tui;
use syntax_tour_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing. Quiet by default so log lines do not tear the
    // alternate screen; override with RUST_LOG when debugging.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syntax_tour=warn,syntax_tour_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let environment = TourEnvironment::new(SystemClock);
    let welcome = functions::greet("Developer", &environment.clock);
    let store = Store::new(AppState::new(welcome), app_reducer(), environment);

    tui::run(&store).await
}
