//! Form input normalization
//!
//! HTML forms arrive as ordered `(key, value)` pairs. Repeated keys carry
//! multi-select values (genres); checkboxes are present only when ticked.

use crate::db::models::{ArtistFields, NewShow, VenueFields};
use crate::time::parse_start_time;
use crate::{Error, Result};

/// Tokens accepted as "true" for checkbox-style flags
const TRUTHY_TOKENS: [&str; 5] = ["y", "yes", "true", "on", "1"];

/// Convert a raw flag to a boolean
///
/// Absent means false. Present means true only for an accepted token
/// (case-insensitive, surrounding whitespace ignored).
pub fn normalize_flag(raw: Option<&str>) -> bool {
    match raw {
        Some(value) => {
            let value = value.trim();
            TRUTHY_TOKENS
                .iter()
                .any(|token| value.eq_ignore_ascii_case(token))
        }
        None => false,
    }
}

/// Decoded `application/x-www-form-urlencoded` body
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-blank value for `key`, trimmed, in submission order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn text(&self, key: &str) -> String {
        self.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn id(&self, key: &str) -> Result<i64> {
        let raw = self.text(key);
        if raw.is_empty() {
            return Err(Error::Validation(format!("{} is required", key)));
        }
        raw.parse()
            .map_err(|_| Error::Validation(format!("{} must be a number: {}", key, raw)))
    }

    /// Search box value exactly as typed; missing means empty
    pub fn search_term(&self) -> String {
        self.get("search_term").unwrap_or_default().to_string()
    }

    pub fn venue_fields(&self) -> VenueFields {
        VenueFields {
            name: self.text("name"),
            city: self.text("city"),
            state: self.text("state"),
            address: self.text("address"),
            phone: self.optional("phone"),
            website: self.optional("website_link"),
            facebook_link: self.optional("facebook_link"),
            image_link: self.optional("image_link"),
            genres: self.get_all("genres"),
            seeking_talent: normalize_flag(self.get("seeking_talent")),
            seeking_description: self.optional("seeking_description"),
        }
    }

    pub fn artist_fields(&self) -> ArtistFields {
        ArtistFields {
            name: self.text("name"),
            city: self.text("city"),
            state: self.text("state"),
            phone: self.optional("phone"),
            website: self.optional("website_link"),
            facebook_link: self.optional("facebook_link"),
            image_link: self.optional("image_link"),
            genres: self.get_all("genres"),
            seeking_venue: normalize_flag(self.get("seeking_venue")),
            seeking_description: self.optional("seeking_description"),
        }
    }

    pub fn new_show(&self) -> Result<NewShow> {
        Ok(NewShow {
            artist_id: self.id("artist_id")?,
            venue_id: self.id("venue_id")?,
            start_time: parse_start_time(&self.text("start_time"))?,
        })
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_normalize_flag_absent_is_false() {
        assert!(!normalize_flag(None));
    }

    #[test]
    fn test_normalize_flag_tokens() {
        for token in ["y", "Y", "yes", "TRUE", "on", "1", " y "] {
            assert!(normalize_flag(Some(token)), "{token:?} should be true");
        }
        for token in ["", "n", "no", "false", "0", "off", "maybe"] {
            assert!(!normalize_flag(Some(token)), "{token:?} should be false");
        }
    }

    #[test]
    fn test_venue_fields_from_form() {
        let fields = form(&[
            ("name", " The Musical Hop "),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", ""),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("genres", "  "),
            ("genres", "Jazz"),
            ("website_link", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
        ])
        .venue_fields();

        assert_eq!(fields.name, "The Musical Hop");
        assert_eq!(fields.phone, None);
        assert_eq!(fields.genres, vec!["Jazz", "Reggae", "Jazz"]);
        assert_eq!(fields.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(fields.seeking_talent);
    }

    #[test]
    fn test_venue_fields_missing_checkbox() {
        let fields = form(&[("name", "x"), ("city", "y"), ("state", "z")]).venue_fields();
        assert!(!fields.seeking_talent);
    }

    #[test]
    fn test_artist_fields_flag() {
        let fields = form(&[("name", "Matt Quevedo"), ("seeking_venue", "on")]).artist_fields();
        assert!(fields.seeking_venue);
        assert!(fields.genres.is_empty());
    }

    #[test]
    fn test_new_show_from_form() {
        let show = form(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2019-05-21 21:30:00"),
        ])
        .new_show()
        .unwrap();

        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_rfc3339(), "2019-05-21T21:30:00+00:00");
    }

    #[test]
    fn test_new_show_rejects_bad_ids() {
        let missing = form(&[("venue_id", "1"), ("start_time", "2019-05-21 21:30:00")]);
        assert!(matches!(missing.new_show(), Err(Error::Validation(_))));

        let garbage = form(&[
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2019-05-21 21:30:00"),
        ]);
        assert!(matches!(garbage.new_show(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        assert_eq!(form(&[]).search_term(), "");
        assert_eq!(form(&[("search_term", " Hop ")]).search_term(), " Hop ");
    }
}
