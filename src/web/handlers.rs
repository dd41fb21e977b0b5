use anyhow::{Context, Result};
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::config::AppConfig;
use crate::models::Dataset;
use crate::util::format_int;
use crate::web::state::AppState;
use crate::{analytics, charts};

/// Body served when the startup load found no data file.
pub const MISSING_DATA_NOTICE: &str = "Data tidak ditemukan. Pastikan file csv ada.";

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    plot_bar: String,
    plot_line: String,
    plot_pie: String,
    total_all: String,
    total_latest: String,
    total_regions: usize,
    tahun_latest: i32,
    rows: Vec<TableRow>,
}

struct TableRow {
    region: String,
    cases: String,
    category: &'static str,
}

/// `GET /` — the full dashboard, or the plain-text notice when the dataset
/// is empty. The empty case short-circuits before any aggregation or chart
/// rendering happens.
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    if state.dataset.is_empty() {
        return MISSING_DATA_NOTICE.into_response();
    }
    match render_dashboard(&state.dataset, &state.config) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "dashboard rendering failed").into_response()
        }
    }
}

/// Recompute every aggregate from the dataset, render the three charts and
/// fill the page template. Runs per request; nothing is cached.
fn render_dashboard(dataset: &Dataset, config: &AppConfig) -> Result<String> {
    let tahun_latest = analytics::latest_year(dataset).context("dataset has no rows")?;
    let latest_rows = analytics::latest_year_rows(dataset, tahun_latest);
    let ranked = analytics::top_n(&latest_rows, config.data.top_n);
    let per_year = analytics::totals_per_year(dataset);
    let distribution = analytics::category_distribution(&latest_rows);

    // Ascending for the bar chart so the largest bar lands visually on top.
    let ascending: Vec<_> = ranked.iter().rev().cloned().collect();
    let plot_bar = charts::bar_chart(&ascending, tahun_latest, config.charts.bar_size())?;
    let plot_line = charts::line_chart(&per_year, config.charts.line_size())?;
    let plot_pie = charts::pie_chart(&distribution, tahun_latest, config.charts.pie_size())?;

    let total_latest: u64 = latest_rows.iter().map(|r| r.cases).sum();
    let rows = ranked
        .into_iter()
        .map(|r| TableRow {
            region: r.region,
            cases: format_int(r.cases),
            category: r.category.label(),
        })
        .collect();

    let template = DashboardTemplate {
        plot_bar,
        plot_line,
        plot_pie,
        total_all: format_int(analytics::grand_total(dataset)),
        total_latest: format_int(total_latest),
        total_regions: analytics::distinct_regions(dataset),
        tahun_latest,
        rows,
    };
    Ok(template.render()?)
}
