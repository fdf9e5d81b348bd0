//! Static page text: title, tagline and the about panel.

pub const APP_TITLE: &str = "🇮🇳 CivicLens AI";
pub const TAGLINE: &str = "Making Indian government services understandable for everyone";
pub const ABOUT_HEADING: &str = "About CivicLens AI";
pub const ABOUT_TEXT: &str = "CivicLens AI helps Indian citizens understand government schemes \
and convert civic issues into structured complaints using AI.";
