//! Completion flags carried in long-lived cookies.
//!
//! One cookie per (visitor, survey), set when the thank-you page is served
//! and never unset by this application. The flag deliberately does not
//! live in the session store: it must survive session expiry, and its
//! lifetime is exactly the cookie's max-age.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Prefix for per-survey completion cookies ("pulse_done_satisfaction").
pub const COMPLETION_COOKIE_PREFIX: &str = "pulse_done_";

fn cookie_name(survey: &str) -> String {
    format!("{COMPLETION_COOKIE_PREFIX}{survey}")
}

/// Completion flag store, reading the request's cookie jar and writing
/// markers onto the response's.
#[derive(Debug, Clone, Copy)]
pub struct CompletionFlags {
    ttl_days: i64,
}

impl CompletionFlags {
    /// Flags whose markers live for `ttl_days` days.
    pub fn new(ttl_days: i64) -> Self {
        Self { ttl_days }
    }

    /// Whether this visitor has completed `survey`.
    pub fn is_complete(&self, jar: &CookieJar, survey: &str) -> bool {
        jar.get(&cookie_name(survey)).is_some()
    }

    /// Mark `survey` complete for this visitor. Idempotent: re-marking
    /// refreshes the marker's lifetime.
    pub fn mark_complete(&self, jar: CookieJar, survey: &str) -> CookieJar {
        let cookie = Cookie::build((cookie_name(survey), "1"))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(self.ttl_days))
            .build();
        jar.add(cookie)
    }
}
