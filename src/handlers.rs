use crate::errors::AppError;
use crate::models::{OverviewQuery, OverviewSnapshot, RangeQuery, RangeResponse};
use crate::range::ReportingRange;
use crate::state::AppState;
use crate::ui::render_index;
use crate::upstream::fetch_overview;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let range = ReportingRange::new();
    let (from, to) = range.current_range();
    Html(render_index(from, to, &state.login_url))
}

pub async fn get_range(Query(query): Query<RangeQuery>) -> Json<RangeResponse> {
    let mut range = ReportingRange::new();
    range.apply_preset(query.preset);
    let (from, to) = range.current_range();

    Json(RangeResponse {
        preset: range.preset(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

pub async fn get_overview(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> Result<Json<OverviewSnapshot>, AppError> {
    let range = resolve_range(&query);
    let (from, to) = range.current_range();
    info!(from, to, preset = ?range.preset(), "loading overview snapshot");

    let snapshot = fetch_overview(&state.client, &state.backend_url, from, to).await?;
    Ok(Json(snapshot))
}

/// Resolve the effective reporting window for a query: start from the default
/// window, apply the requested preset, then any explicit boundary overrides.
/// Explicit boundaries flip the range to custom on their own.
fn resolve_range(query: &OverviewQuery) -> ReportingRange {
    let mut range = ReportingRange::new();
    if let Some(preset) = query.preset {
        range.apply_preset(preset);
    }
    if let Some(from) = &query.from {
        range.set_from(from.clone());
    }
    if let Some(to) = &query.to {
        range.set_to(to.clone());
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangePreset;

    #[test]
    fn overview_query_boundaries_override_preset() {
        let query = OverviewQuery {
            preset: Some(RangePreset::Today),
            from: Some("2024-01-01".to_string()),
            to: Some("2024-01-31".to_string()),
        };
        let range = resolve_range(&query);
        assert_eq!(range.preset(), RangePreset::Custom);
        assert_eq!(range.current_range(), ("2024-01-01", "2024-01-31"));
    }

    #[test]
    fn overview_query_without_params_uses_default_window() {
        let query = OverviewQuery {
            preset: None,
            from: None,
            to: None,
        };
        let range = resolve_range(&query);
        assert_eq!(range.preset(), RangePreset::Last7Days);
    }
}
