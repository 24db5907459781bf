use price_forecast::{ModelKind, PredictionRequest, Predictor, NAME, VERSION};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "price_forecast=info".into()),
        )
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let horizon = 30;
    let predictor = Predictor::default();

    println!("{} v{} - {} forecast over {} days\n", NAME, VERSION, symbol, horizon);

    for model in ModelKind::SELECTABLE {
        // Same seed per model so every report sees the same history
        let mut rng = StdRng::seed_from_u64(2024);
        let report = predictor.predict(&PredictionRequest::new(&symbol, model, horizon), &mut rng)?;
        println!("{}", report);
    }

    Ok(())
}
