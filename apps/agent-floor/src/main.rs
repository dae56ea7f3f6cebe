//! Agent Floor Binary
//!
//! Looks up share prices the way the trading floor's agents do and prints
//! them, along with the trace log the lookup produced.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin agent-floor -- AAPL MSFT NVDA
//! ```
//!
//! # Environment Variables
//!
//! - `POLYGON_API_KEY`: Polygon API key (unset: random prices)
//! - `POLYGON_PLAN`: `paid` | `realtime` | anything else for end-of-day
//! - `RUST_LOG`: Log level (default: info)

use agent_floor::{
    AppConfig, Container, Span, SpanData, SpanKind, Trace, TraceProcessor, make_trace_id,
};

/// Agent name the CLI's own lookups are logged under.
const CLI_AGENT: &str = "floor";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    agent_floor::telemetry::init_tracing();

    tracing::info!(
        plan = %config.plan,
        live_pricing = config.polygon_api_key.is_some(),
        "Configuration loaded"
    );

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        anyhow::bail!("usage: agent-floor SYMBOL [SYMBOL ...]");
    }

    let container = Container::from_config(&config)?;
    let resolver = container.price_resolver();
    let tracer = container.tracer();

    if resolver.has_provider() {
        match resolver.is_market_open().await {
            Ok(open) => tracing::info!(open, "Market status"),
            Err(e) => tracing::warn!(error = %e, "Market status unavailable"),
        }
    }

    let trace = Trace::new(make_trace_id(CLI_AGENT)?, "price-lookup");
    tracer.on_trace_start(&trace)?;

    for (i, symbol) in symbols.iter().enumerate() {
        let span = Span::new(trace.trace_id.clone(), format!("span_{i}"))
            .with_data(SpanData::new(SpanKind::Function).with_name(symbol.clone()));
        tracer.on_span_start(&span)?;

        let price = resolver.get_share_price(symbol).await;
        println!("{symbol}\t{price:.2}");

        tracer.on_span_end(&span)?;
    }

    tracer.on_trace_end(&trace)?;
    tracer.shutdown();

    for event in container.log_store().read_log(CLI_AGENT, usize::MAX) {
        tracing::info!(category = %event.category, "{}", event.message);
    }

    Ok(())
}
