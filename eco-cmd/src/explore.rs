//! `explore`: apply one filter selection and print the result.

use crate::{render, ApiOptions, ExploreArgs};
use eco_core::AnalysisType;
use eco_explorer::{ApplyOutcome, CollectingSink, Explorer};
use log::info;

pub async fn run_explore(options: &ApiOptions, args: ExploreArgs) -> anyhow::Result<()> {
    let sink = CollectingSink::new();
    let mut explorer = Explorer::with_sink(options.transport()?, Box::new(sink.clone()));
    let filters = args.filters.to_filter_state();
    let mode = filters.analysis_type();
    info!("exploring {} data from {}", mode, options.api_url);
    if filters.is_unfiltered() {
        info!("no filters set, requesting all {} data", mode);
    }

    // A non-default page size goes through the pager so page 1 is fetched
    // with it directly.
    let custom_page_size =
        mode == AnalysisType::Raw && args.per_page != explorer.pagination().per_page;
    let mut outcome = if custom_page_size {
        explorer.update_filters(filters);
        explorer.change_per_page(args.per_page).await
    } else {
        explorer.apply(filters).await
    };
    if mode == AnalysisType::Raw && args.page > 1 && outcome.is_applied() {
        outcome = explorer.change_page(args.page).await;
    }

    match outcome {
        ApplyOutcome::Applied(_) => {}
        ApplyOutcome::Blocked(warnings) => {
            let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
            anyhow::bail!("{}", messages.join("; "));
        }
        ApplyOutcome::Failed(error) => return Err(error.into()),
        ApplyOutcome::Superseded | ApplyOutcome::Ignored => {
            anyhow::bail!("no data fetched for {} mode", mode);
        }
    }

    let state = explorer.state();
    let output = match mode {
        AnalysisType::Raw => {
            let view = state.raw.data.clone().unwrap_or_default();
            if args.json {
                serde_json::to_string_pretty(&serde_json::json!({
                    "pagination": state.pagination,
                    "view": view,
                }))?
            } else {
                render::render_raw(&view, &state.pagination)
            }
        }
        AnalysisType::Trends => {
            let view = state.trends.data.clone().unwrap_or_default();
            if args.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::render_trends(&view)
            }
        }
        AnalysisType::Weighted => {
            let view = state.summary.data.clone().unwrap_or_default();
            if args.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::render_summary(&view)
            }
        }
    };
    println!("{}", output.trim_end());

    for error in sink.take() {
        eprintln!("warning: {}", error);
    }
    Ok(())
}
