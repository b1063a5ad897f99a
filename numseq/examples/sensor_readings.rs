//! Summarise a batch of sensor readings and export them as JSON

use numseq::{Float64s, JsonConfig, JsonSequence, NonFinitePolicy, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // RUST_LOG=numseq=debug shows encoder decisions
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let readings = Float64s::from(vec![21.5, 22.0, f64::NAN, 19.75, 23.25, 20.0]);

    println!("=== Sensor Readings ===");
    println!("Samples: {}", readings.len());

    let valid = readings.without(|x| x.is_nan());
    println!("Valid samples: {}", valid.len());
    println!("Min: {:.2}  Max: {:.2}", valid.min(), valid.max());
    println!("Average: {:.3}", valid.average());

    let warm = valid.only(|x| *x >= 21.0);
    println!("Warm readings: {}", warm.json_string()?);

    let descending = valid.sort().into_reversed();
    println!("Descending: {}", descending.json_string()?);

    let fahrenheit = valid.transform(|c| c * 9.0 / 5.0 + 32.0);
    println!("Fahrenheit: {}", fahrenheit.json_string()?);

    // Raw readings still contain NaN
    match readings.json_string() {
        Ok(text) => println!("Raw: {text}"),
        Err(err) => println!("Raw export rejected: {err}"),
    }
    let lenient = JsonConfig::new().with_non_finite(NonFinitePolicy::Null);
    println!("Raw (null for NaN): {}", readings.json_string_with(&lenient)?);

    Ok(())
}
