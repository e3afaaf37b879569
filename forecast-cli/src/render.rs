use forecast_core::{FetchState, Forecast};

/// Print the display state: one row per forecast on stdout, or a single
/// error banner on stderr.
pub fn render_state(state: &FetchState) {
    if let Some(message) = state.error() {
        eprintln!("{}", error_banner(message));
        return;
    }

    for forecast in state.forecasts() {
        println!("{}", render_row(forecast));
    }
}

fn render_row(forecast: &Forecast) -> String {
    let condition = forecast.primary_condition().map(capitalize).unwrap_or_default();

    format!("{}  {:>6.1}°C  {}", forecast.timestamp, forecast.temperature_c, condition)
}

fn error_banner(message: &str) -> String {
    format!("Error: {message}")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
