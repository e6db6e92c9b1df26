//! HTTP routes for the survey flow.
//!
//! Every question route runs the core progression gate before touching the
//! stores, so out-of-order requests, repeat visits, and finished surveys
//! all resolve to redirects with a one-shot notice instead of errors.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::pages;
use crate::server::AppState;
use crate::session::{SessionStore, SESSION_COOKIE};
use pulse_core::{advance, gate, Advance, Answer, Gate};

/// Notice shown when a completed survey is re-entered.
const ALREADY_COMPLETED: &str = "The survey has already been completed.";

/// Notice shown when questions are requested out of order.
const OUT_OF_ORDER: &str = "The questions must be completed in order.";

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/surveys/:name", get(intro))
        .route("/begin/:name", post(begin))
        .route("/surveys/:name/question/:index", get(question))
        .route("/surveys/:name/question/:index", post(submit))
        .route("/surveys/:name/thankyou", get(thankyou))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The visitor's session token, minting one (and its cookie) if absent.
fn establish_session(jar: CookieJar) -> (String, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return (cookie.value().to_string(), jar);
    }
    let token = SessionStore::mint_token();
    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .build();
    (token, jar.add(cookie))
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::selection_page(state.catalog.surveys()))
}

async fn intro(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    jar: CookieJar,
) -> Result<Response> {
    let survey = state.catalog.get(&name)?;
    let notice = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.take_flash(cookie.value()).await,
        None => None,
    };
    Ok(Html(pages::intro_page(survey, notice.as_deref())).into_response())
}

async fn begin(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    jar: CookieJar,
) -> Result<Response> {
    let survey = state.catalog.get(&name)?;
    let (token, jar) = establish_session(jar);
    state.sessions.reset(&token, &survey.name).await;

    let redirect = Redirect::to(&format!("/surveys/{}/question/0", survey.name));
    Ok((jar, redirect).into_response())
}

async fn question(
    State(state): State<Arc<AppState>>,
    Path((name, index)): Path<(String, usize)>,
    jar: CookieJar,
) -> Result<Response> {
    let survey = state.catalog.get(&name)?;
    if index >= survey.question_count() {
        return Err(pulse_core::Error::QuestionOutOfRange {
            survey: survey.name.clone(),
            index,
        }
        .into());
    }

    let (token, jar) = establish_session(jar);
    let answered = state.sessions.count(&token, &survey.name).await;
    let completed = state.flags.is_complete(&jar, &survey.name);

    let response = match gate(survey, answered, completed, index) {
        Gate::Serve { index, next } => {
            let current = survey.question(index).ok_or_else(|| {
                pulse_core::Error::QuestionOutOfRange {
                    survey: survey.name.clone(),
                    index,
                }
            })?;
            let notice = state.sessions.take_flash(&token).await;
            Html(pages::question_page(
                survey,
                current,
                index,
                next,
                notice.as_deref(),
            ))
            .into_response()
        }
        Gate::Resume { at } => {
            state.sessions.set_flash(&token, OUT_OF_ORDER).await;
            Redirect::to(&format!("/surveys/{}/question/{at}", survey.name)).into_response()
        }
        Gate::Terminus => {
            Redirect::to(&format!("/surveys/{}/thankyou", survey.name)).into_response()
        }
        Gate::AlreadyCompleted => {
            state.sessions.set_flash(&token, ALREADY_COMPLETED).await;
            Redirect::to(&format!("/surveys/{}", survey.name)).into_response()
        }
    };

    Ok((jar, response).into_response())
}

#[derive(Debug, Deserialize)]
struct SubmitForm {
    answer: Option<String>,
    specify: Option<String>,
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Path((name, index)): Path<(String, usize)>,
    jar: CookieJar,
    Form(form): Form<SubmitForm>,
) -> Result<Response> {
    let survey = state.catalog.get(&name)?;
    if index >= survey.question_count() {
        return Err(pulse_core::Error::QuestionOutOfRange {
            survey: survey.name.clone(),
            index,
        }
        .into());
    }

    let (token, jar) = establish_session(jar);
    let answered = state.sessions.count(&token, &survey.name).await;
    let completed = state.flags.is_complete(&jar, &survey.name);

    // Same gate as the GET: a stale or replayed form redirects instead of
    // appending out of order.
    let response = match gate(survey, answered, completed, index) {
        Gate::Serve { index, .. } => {
            let choice = form.answer.ok_or(Error::MissingField("answer"))?;
            let current = survey.question(index).ok_or_else(|| {
                pulse_core::Error::QuestionOutOfRange {
                    survey: survey.name.clone(),
                    index,
                }
            })?;
            let answer = Answer::build(current, choice, form.specify);
            state
                .sessions
                .append(&token, &survey.name, answer, survey.question_count())
                .await?;

            match advance(survey, index) {
                Advance::Next(next) => {
                    Redirect::to(&format!("/surveys/{}/question/{next}", survey.name))
                        .into_response()
                }
                Advance::Finished => {
                    Redirect::to(&format!("/surveys/{}/thankyou", survey.name)).into_response()
                }
            }
        }
        Gate::Resume { at } => {
            state.sessions.set_flash(&token, OUT_OF_ORDER).await;
            Redirect::to(&format!("/surveys/{}/question/{at}", survey.name)).into_response()
        }
        Gate::Terminus => {
            Redirect::to(&format!("/surveys/{}/thankyou", survey.name)).into_response()
        }
        Gate::AlreadyCompleted => {
            state.sessions.set_flash(&token, ALREADY_COMPLETED).await;
            Redirect::to(&format!("/surveys/{}", survey.name)).into_response()
        }
    };

    Ok((jar, response).into_response())
}

async fn thankyou(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    jar: CookieJar,
) -> Result<Response> {
    let survey = state.catalog.get(&name)?;
    let (token, jar) = establish_session(jar);
    let answered = state.sessions.count(&token, &survey.name).await;
    let completed = state.flags.is_complete(&jar, &survey.name);

    // Walking to the terminus early must not mint a completion flag.
    if !completed && answered < survey.question_count() {
        state.sessions.set_flash(&token, OUT_OF_ORDER).await;
        let redirect =
            Redirect::to(&format!("/surveys/{}/question/{answered}", survey.name));
        return Ok((jar, redirect).into_response());
    }

    let jar = state.flags.mark_complete(jar, &survey.name);
    let answers = state.sessions.answers(&token, &survey.name).await;
    Ok((jar, Html(pages::thankyou_page(survey, &answers))).into_response())
}
