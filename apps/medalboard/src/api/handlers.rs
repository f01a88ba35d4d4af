//! Request handlers.
//!
//! Each page handler is one view activation: fetch the dataset once, drive the
//! view state machine, render or redirect.

use super::{AppState, render};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use medalboard_core::{
    AggregateStats, CountryId, CountryRecord, Destination, DetailView, HomeView, Statistic,
    country_medal_totals, resolve_selection_index,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

// =============================================================================
// PAGES
// =============================================================================

pub async fn home(State(state): State<AppState>) -> Response {
    let view = match state.source.fetch().await {
        Ok(countries) => HomeView::activate().on_data(&countries),
        Err(e) => {
            warn!(error = %e, source = %state.source, "dataset unavailable");
            HomeView::activate().on_unavailable()
        }
    };

    let summary = match view {
        HomeView::Ready(summary) => summary,
        HomeView::Loading => return loading_page(),
    };

    match state.charts.medals_pie(&summary.medal_totals) {
        Ok(chart) => Html(render::home(&summary, &chart)).into_response(),
        Err(e) => {
            error!(error = %e, "cannot build medal chart");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render::failure())).into_response()
        }
    }
}

pub async fn detail(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let view = activate_detail(&state, &raw_id).await;
    let detail = match view {
        DetailView::Ready(detail) => detail,
        DetailView::Redirected(destination) => {
            debug!(raw_id = %raw_id, "no such country, redirecting");
            return redirect(destination);
        }
        DetailView::Loading(_) => return loading_page(),
    };

    match state.charts.medals_line(&detail.medals_by_year) {
        Ok(chart) => Html(render::detail(&detail, &chart)).into_response(),
        Err(e) => {
            error!(error = %e, "cannot build country chart");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render::failure())).into_response()
        }
    }
}

/// A pie slice was clicked: map its index back to a country.
pub async fn select(State(state): State<AppState>, Path(raw_index): Path<String>) -> Response {
    let Ok(index) = raw_index.trim().parse::<usize>() else {
        return redirect(Destination::NotFound);
    };

    match state.source.fetch().await {
        Ok(countries) => redirect(resolve_selection_index(&countries, index).destination()),
        Err(e) => {
            warn!(error = %e, source = %state.source, "dataset unavailable");
            loading_page()
        }
    }
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found())).into_response()
}

pub async fn unknown_route() -> Response {
    redirect(Destination::NotFound)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

// =============================================================================
// JSON API
// =============================================================================

#[derive(Debug, Serialize)]
struct StatsBody {
    stats: AggregateStats,
    tiles: Vec<Statistic>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountryListing {
    id: CountryId,
    country: String,
    total_medals: u64,
}

pub async fn api_stats(State(state): State<AppState>) -> Response {
    match load(&state).await {
        Ok(countries) => {
            let stats = AggregateStats::compute(&countries);
            Json(StatsBody {
                stats,
                tiles: stats.all_tiles(),
            })
            .into_response()
        }
        Err(response) => response,
    }
}

/// Countries in chart order; `position` in this list is the pie slice index.
pub async fn api_countries(State(state): State<AppState>) -> Response {
    match load(&state).await {
        Ok(countries) => {
            let listing: Vec<CountryListing> = countries
                .iter()
                .zip(country_medal_totals(&countries))
                .map(|(record, total)| CountryListing {
                    id: record.id,
                    country: total.country,
                    total_medals: total.total,
                })
                .collect();
            Json(listing).into_response()
        }
        Err(response) => response,
    }
}

pub async fn api_country(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    match activate_detail(&state, &raw_id).await {
        DetailView::Ready(detail) => Json(detail).into_response(),
        DetailView::Redirected(destination) => api_not_found(destination),
        DetailView::Loading(_) => api_unavailable(),
    }
}

pub async fn api_medals_chart(State(state): State<AppState>) -> Response {
    match load(&state).await {
        Ok(countries) => match state.charts.medals_pie(&country_medal_totals(&countries)) {
            Ok(chart) => Json(chart).into_response(),
            Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        },
        Err(response) => response,
    }
}

pub async fn api_country_chart(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    match activate_detail(&state, &raw_id).await {
        DetailView::Ready(detail) => match state.charts.medals_line(&detail.medals_by_year) {
            Ok(chart) => Json(chart).into_response(),
            Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        },
        DetailView::Redirected(destination) => api_not_found(destination),
        DetailView::Loading(_) => api_unavailable(),
    }
}

pub async fn dataset_asset(State(state): State<AppState>) -> Response {
    match state.source.fetch_bytes().await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            warn!(error = %e, source = %state.source, "dataset unavailable");
            api_unavailable()
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Drive the detail view. Invalid ids never trigger a fetch.
async fn activate_detail(state: &AppState, raw_id: &str) -> DetailView {
    let view = DetailView::activate(raw_id);
    if !view.needs_data() {
        return view;
    }
    match state.source.fetch().await {
        Ok(countries) => view.on_data(&countries),
        Err(e) => {
            warn!(error = %e, source = %state.source, "dataset unavailable");
            view.on_unavailable()
        }
    }
}

async fn load(state: &AppState) -> Result<Vec<CountryRecord>, Response> {
    state.source.fetch().await.map_err(|e| {
        warn!(error = %e, source = %state.source, "dataset unavailable");
        api_unavailable()
    })
}

fn redirect(destination: Destination) -> Response {
    Redirect::to(&destination.path()).into_response()
}

fn loading_page() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, Html(render::loading())).into_response()
}

fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn api_not_found(destination: Destination) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "country not found", "redirect": destination.path() })),
    )
        .into_response()
}

fn api_unavailable() -> Response {
    api_error(StatusCode::SERVICE_UNAVAILABLE, "dataset unavailable")
}
