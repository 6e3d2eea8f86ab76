//! HTTP request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SiteConfig;
use crate::error::RosterError;
use crate::models::{Provider, RosterShift};
use crate::news::{find_public_post, public_news_feed};
use crate::profile::build_model_profile;
use crate::roster::{
    OrderCache, ProviderIndex, RosterFilter, RosterTab, build_roster_entry, filter_roster,
    nationality_facets, order_cache_key, order_roster, roster_day, service_facets,
};

use super::request::{RosterParams, RosterQuery};
use super::response::{ApiErrorResponse, RosterResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster", get(roster_handler))
        .route("/profile/:slug", get(profile_handler))
        .route("/news", get(news_handler))
        .route("/news/:id", get(news_post_handler))
        .with_state(state)
}

/// Handler for GET /roster.
///
/// Fetches providers and both rosters together and renders nothing until
/// every fetch has settled; any failure surfaces as an error rather than
/// a partial view.
async fn roster_handler(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let params = query.into_params();
    info!(
        correlation_id = %correlation_id,
        tab = %params.tab,
        time = %params.filter.time,
        "Processing roster request"
    );

    let fetched = futures::try_join!(
        state.api().providers(),
        state.api().roster_today(),
        state.api().roster_tomorrow(),
    );

    match fetched {
        Ok((providers, today, tomorrow)) => {
            let now = Local::now().naive_local();
            let response = build_roster_view(
                &providers,
                &today,
                &tomorrow,
                &params,
                state.config(),
                state.orders(),
                now,
                &mut rand::thread_rng(),
            );
            info!(
                correlation_id = %correlation_id,
                entries = response.entries.len(),
                tomorrow_pending = response.tomorrow_pending,
                "Roster view built"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Roster fetch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Builds the roster view from already-fetched data.
///
/// Pipeline: resolve the selected day's shifts against the provider
/// index (unresolvable shifts drop out), order them with the
/// session-stable shuffle, then apply the time filter followed by the
/// nationality and service filters. The facet lists reflect the
/// time-filtered view, before nationality/service narrowing.
///
/// A tomorrow-tab request against an unpublished (empty) tomorrow roster
/// short-circuits into the `tomorrow_pending` state.
#[allow(clippy::too_many_arguments)]
pub fn build_roster_view<R: Rng>(
    providers: &[Provider],
    today: &[RosterShift],
    tomorrow: &[RosterShift],
    params: &RosterParams,
    config: &SiteConfig,
    orders: &dyn OrderCache,
    now: NaiveDateTime,
    rng: &mut R,
) -> RosterResponse {
    if params.tab == RosterTab::Tomorrow && tomorrow.is_empty() {
        return RosterResponse {
            tab: params.tab,
            time: params.filter.time,
            tomorrow_pending: true,
            release_time: Some(config.tomorrow_release_time.clone()),
            entries: vec![],
            nationalities: vec![],
            services: vec![],
        };
    }

    let shifts = match params.tab {
        RosterTab::Today => today,
        RosterTab::Tomorrow => tomorrow,
    };

    let index = ProviderIndex::build(providers);
    let entries: Vec<_> = shifts
        .iter()
        .filter_map(|shift| build_roster_entry(shift, &index))
        .collect();

    let day = roster_day(params.tab, now, config.shop_day_start_hour);
    let cache_key = order_cache_key(
        params.tab,
        params.filter.time,
        &params.filter.nationalities,
        &params.filter.services,
    );
    let ordered = order_roster(entries, &cache_key, orders, rng);

    // facets come from the time-filtered day view, before narrowing
    let time_only = RosterFilter {
        time: params.filter.time,
        nationalities: vec![],
        services: vec![],
    };
    let visible = filter_roster(&ordered, &time_only, day, now);
    let nationalities = nationality_facets(&visible);
    let services = service_facets(&visible);

    let narrowing = RosterFilter {
        time: crate::roster::TimeFilter::Today,
        nationalities: params.filter.nationalities.clone(),
        services: params.filter.services.clone(),
    };
    let entries = filter_roster(&visible, &narrowing, day, now);

    RosterResponse {
        tab: params.tab,
        time: params.filter.time,
        tomorrow_pending: false,
        release_time: None,
        entries,
        nationalities,
        services,
    }
}

/// Handler for GET /profile/:slug.
///
/// The provider fetch must succeed; a failed roster fetch only costs the
/// working-time line and does not block the profile.
async fn profile_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, slug = %slug, "Processing profile request");

    let (providers, roster_today) =
        futures::join!(state.api().providers(), state.api().roster_today());

    let providers = match providers {
        Ok(providers) => providers,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Provider fetch failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let roster_today = match roster_today {
        Ok(roster) => roster,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster fetch failed; profile will omit working time"
            );
            vec![]
        }
    };

    match build_model_profile(&slug, &providers, &roster_today) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => {
            info!(correlation_id = %correlation_id, slug = %slug, "Profile not found");
            ApiErrorResponse::from(RosterError::ProfileNotFound { slug }).into_response()
        }
    }
}

/// Handler for GET /news.
async fn news_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.api().news().await {
        Ok(posts) => {
            let feed = public_news_feed(posts);
            info!(correlation_id = %correlation_id, posts = feed.len(), "News feed built");
            (StatusCode::OK, Json(feed)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "News fetch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /news/:id.
///
/// Drafts are invisible here too: a non-public id 404s exactly like an
/// unknown one.
async fn news_post_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.api().news().await {
        Ok(posts) => match find_public_post(posts, id) {
            Some(post) => (StatusCode::OK, Json(post)).into_response(),
            None => {
                info!(correlation_id = %correlation_id, id, "News post not found");
                ApiErrorResponse::from(RosterError::NewsPostNotFound { id }).into_response()
            }
        },
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "News fetch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
