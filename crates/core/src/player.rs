//! Embedding contract for the iframe game player
//!
//! The player itself lives in the presentation layer; this module fixes the
//! URL it embeds, the sandbox it grants and the order it tries fullscreen APIs.

use serde::Serialize;

use crate::models::GameRecord;

/// Host serving games that have no direct HTML5 URL
pub const FALLBACK_HOST: &str = "https://www.gamepix.com";

/// iframe `sandbox` attribute
pub const IFRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups allow-popups-to-escape-sandbox";

/// iframe `allow` attribute
pub const IFRAME_ALLOW: &str = "fullscreen";

/// URL embedded in the player: the game's own HTML5 URL when present
pub fn play_url(game: &GameRecord) -> String {
    match &game.html5_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!("{}{}", FALLBACK_HOST, game.href),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FullscreenMethod {
    /// `requestFullscreen`
    Standard,
    /// `webkitRequestFullscreen`
    Webkit,
    /// `mozRequestFullScreen`
    Moz,
    /// `msRequestFullscreen`
    Ms,
    /// Open the game URL in a new tab (`noopener,noreferrer`)
    NewTab,
}

impl FullscreenMethod {
    /// Name of the element method the browser exposes, if any
    pub fn api_name(&self) -> Option<&'static str> {
        match self {
            FullscreenMethod::Standard => Some("requestFullscreen"),
            FullscreenMethod::Webkit => Some("webkitRequestFullscreen"),
            FullscreenMethod::Moz => Some("mozRequestFullScreen"),
            FullscreenMethod::Ms => Some("msRequestFullscreen"),
            FullscreenMethod::NewTab => None,
        }
    }
}

/// Order in which fullscreen methods are attempted
pub const FULLSCREEN_FALLBACK: [FullscreenMethod; 5] = [
    FullscreenMethod::Standard,
    FullscreenMethod::Webkit,
    FullscreenMethod::Moz,
    FullscreenMethod::Ms,
    FullscreenMethod::NewTab,
];

/// First method in fallback order that `supported` accepts; `NewTab` always works
pub fn choose_fullscreen(supported: impl Fn(FullscreenMethod) -> bool) -> FullscreenMethod {
    FULLSCREEN_FALLBACK.iter()
        .copied()
        .find(|m| *m == FullscreenMethod::NewTab || supported(*m))
        .unwrap_or(FullscreenMethod::NewTab)
}
