//! Album data as shown in the result grid and the detail view.

use chrono::NaiveDate;
use reqwest::Url;

/// Shown on a card when the album has no usable medium cover
pub const CARD_PLACEHOLDER_COVER: &str =
    "https://placehold.co/250x250/cccccc/333333?text=No+Image";

/// Shown in the detail view when the album has no usable big cover
pub const DETAIL_PLACEHOLDER_COVER: &str =
    "https://placehold.co/500x500/cccccc/333333?text=No+Image";

/// An album from search results. Read-only once built from the API response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub cover_small: String,
    pub cover_medium: String,
    pub cover_big: String,
    /// `YYYY-MM-DD`; search responses usually leave it out
    pub release_date: Option<String>,
    pub track_count: Option<u32>,
}

impl Album {
    /// Cover used on result cards
    pub fn card_cover(&self) -> &str {
        cover_or_placeholder(&self.cover_medium, CARD_PLACEHOLDER_COVER)
    }

    /// Cover used in the detail view
    pub fn detail_cover(&self) -> &str {
        cover_or_placeholder(&self.cover_big, DETAIL_PLACEHOLDER_COVER)
    }

    /// Human readable release date, falling back to the raw string
    pub fn release_date_display(&self) -> String {
        match self.release_date.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => date.format("%B %-d, %Y").to_string(),
                Err(_) => raw.to_string(),
            },
            None => "Unknown".to_string(),
        }
    }

    pub fn track_count_display(&self) -> String {
        match self.track_count {
            Some(1) => "1 track".to_string(),
            Some(n) => format!("{} tracks", n),
            None => "Unknown".to_string(),
        }
    }
}

/// Swap an unusable image URL for the placeholder instead of failing.
pub fn cover_or_placeholder<'a>(url: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return placeholder;
    }
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => trimmed,
        _ => placeholder,
    }
}

#[cfg(test)]
pub(crate) fn sample_album(id: u64, title: &str) -> Album {
    Album {
        id,
        title: title.to_string(),
        artist: "Queen".to_string(),
        cover_small: format!("https://cdn.example.com/{}/56x56.jpg", id),
        cover_medium: format!("https://cdn.example.com/{}/250x250.jpg", id),
        cover_big: format!("https://cdn.example.com/{}/500x500.jpg", id),
        release_date: None,
        track_count: Some(12),
    }
}
