//! Chat-platform host context.
//!
//! The dashboard runs as a Telegram mini app. The host hands over a launch
//! string (`initData`) with the user identity and accepts best-effort theming
//! calls. Every access is optional: without a host the dashboard still runs
//! with defaults.

use ratatui::style::Color;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Colour the original mini app paints its header and background with.
pub const HOST_THEME_COLOR: &str = "#0B1120";

/// Development-only identity used when no host user is available.
pub const DEV_FALLBACK_USER_ID: i64 = 8_158_002_704;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid colour: {0}")]
    InvalidColor(String),
    #[error("host does not support {0}")]
    Unsupported(&'static str),
}

pub trait HostContext {
    fn expand(&mut self);
    fn set_header_color(&mut self, color: &str) -> Result<(), HostError>;
    fn set_background_color(&mut self, color: &str) -> Result<(), HostError>;
    fn user_id(&self) -> Option<i64>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub username: Option<String>,
}

/// Host context backed by a Telegram `initData` launch string.
#[derive(Debug, Clone, Default)]
pub struct TelegramWebApp {
    user: Option<WebAppUser>,
    expanded: bool,
    header_color: Option<Color>,
    background_color: Option<Color>,
}

impl TelegramWebApp {
    /// Parses the url-encoded launch string, e.g.
    /// `user=%7B%22id%22%3A42%7D&auth_date=1700000000&hash=...`.
    ///
    /// A missing or undecodable `user` field leaves the user absent.
    pub fn from_init_data(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('#').trim_start_matches('?');
        let user = Url::parse("tg://init").ok().and_then(|mut url| {
            url.set_query(Some(raw));
            url.query_pairs()
                .find(|(key, _)| key == "user")
                .and_then(|(_, value)| match serde_json::from_str::<WebAppUser>(&value) {
                    Ok(user) => Some(user),
                    Err(err) => {
                        tracing::warn!("ignoring undecodable host user: {err}");
                        None
                    }
                })
        });

        Self {
            user,
            ..Self::default()
        }
    }

    pub fn user(&self) -> Option<&WebAppUser> {
        self.user.as_ref()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn header_color(&self) -> Option<Color> {
        self.header_color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }
}

impl HostContext for TelegramWebApp {
    fn expand(&mut self) {
        self.expanded = true;
    }

    fn set_header_color(&mut self, color: &str) -> Result<(), HostError> {
        self.header_color = Some(parse_color(color)?);
        Ok(())
    }

    fn set_background_color(&mut self, color: &str) -> Result<(), HostError> {
        self.background_color = Some(parse_color(color)?);
        Ok(())
    }

    fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }
}

fn parse_color(color: &str) -> Result<Color, HostError> {
    color
        .parse::<Color>()
        .map_err(|_| HostError::InvalidColor(color.to_string()))
}

/// Expands the viewport and applies the dashboard colours.
///
/// Theming is best-effort: failures are logged and otherwise ignored.
pub fn prepare_host(host: &mut dyn HostContext) {
    host.expand();
    if let Err(err) = host.set_header_color(HOST_THEME_COLOR) {
        tracing::debug!("host header colour not applied: {err}");
    }
    if let Err(err) = host.set_background_color(HOST_THEME_COLOR) {
        tracing::debug!("host background colour not applied: {err}");
    }
}

/// The user identity to fetch statistics for.
///
/// Falls back to [`DEV_FALLBACK_USER_ID`] when the host supplies no user.
/// Outside local development that fallback is reported with a warning.
pub fn resolve_user_id(host: Option<&dyn HostContext>, local_dev: bool) -> i64 {
    if let Some(id) = host.and_then(|host| host.user_id()) {
        return id;
    }

    if !local_dev {
        tracing::warn!(
            "no host user available outside local development; using placeholder id {DEV_FALLBACK_USER_ID}"
        );
    }
    DEV_FALLBACK_USER_ID
}
