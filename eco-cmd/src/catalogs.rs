//! `catalogs`: list locations and metrics.

use crate::{render, ApiOptions};
use eco_explorer::{CollectingSink, Explorer};

pub async fn run_catalogs(options: &ApiOptions, json: bool) -> anyhow::Result<()> {
    let sink = CollectingSink::new();
    let mut explorer = Explorer::with_sink(options.transport()?, Box::new(sink.clone()));
    explorer.load_catalogs().await;
    let catalogs = &explorer.state().catalogs;

    if !catalogs.location_filter_enabled() && !catalogs.metric_filter_enabled() {
        let reasons: Vec<String> = sink.take().iter().map(ToString::to_string).collect();
        anyhow::bail!("no catalog could be loaded: {}", reasons.join("; "));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(catalogs)?);
    } else {
        if let Some(locations) = &catalogs.locations.data {
            println!("Locations");
            print!("{}", render::render_locations(locations));
        }
        if let Some(metrics) = &catalogs.metrics.data {
            println!("Metrics");
            print!("{}", render::render_metrics(metrics));
        }
    }

    for error in sink.take() {
        eprintln!("warning: {}", error);
    }
    Ok(())
}
