//! Target cities and the search-results URL for each of them.

use std::fmt;

use reqwest::Url;

const SEARCH_BASE: &str = "https://www.booking.com/searchresults.en-gb.html";

/// A city to scrape, identified on the site by its destination id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub dest_id: String,
}

impl City {
    pub fn new(name: impl Into<String>, dest_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dest_id: dest_id.into(),
        }
    }

    /// The built-in city list, in scrape order.
    pub fn default_set() -> Vec<City> {
        vec![
            City::new("Casablanca", "-14763"),
            City::new("Fes", "-24307"),
            City::new("Tangier", "-59010"),
            City::new("Agadir", "-2906"),
            City::new("Rabat", "-48901"),
        ]
    }

    /// Parse a `Name:dest_id` pair.  Splits on the last `:` so names may
    /// contain colons; both halves must be non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, dest_id) = s.rsplit_once(':')?;
        let name = name.trim();
        let dest_id = dest_id.trim();
        if name.is_empty() || dest_id.is_empty() {
            return None;
        }
        Some(City::new(name, dest_id))
    }

    /// Search-results page listing hotels for this city (2 adults, 1 room).
    pub fn search_url(&self) -> anyhow::Result<Url> {
        let params: [(&str, &str); 11] = [
            ("ss", self.name.as_str()),
            ("dest_id", self.dest_id.as_str()),
            ("dest_type", "city"),
            ("group_adults", "2"),
            ("no_rooms", "1"),
            ("group_children", "0"),
            ("aid", "2311236"),
            ("lang", "en-gb"),
            ("sb", "1"),
            ("src_elem", "sb"),
            ("src", "searchresults"),
        ];
        Ok(Url::parse_with_params(SEARCH_BASE, params.iter())?)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.dest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_five_moroccan_cities() {
        let names: Vec<_> = City::default_set().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Casablanca", "Fes", "Tangier", "Agadir", "Rabat"]);
    }

    #[test]
    fn parse_splits_on_last_colon() {
        assert_eq!(City::parse("Rabat:-48901"), Some(City::new("Rabat", "-48901")));
        assert_eq!(City::parse(" a:b : 12 "), Some(City::new("a:b", "12")));
        assert_eq!(City::parse("Rabat"), None);
        assert_eq!(City::parse(":-1"), None);
        assert_eq!(City::parse("Rabat: "), None);
    }

    #[test]
    fn search_url_carries_city_and_dest_id() {
        let url = City::new("Casablanca", "-14763").search_url().unwrap();
        assert_eq!(url.host_str(), Some("www.booking.com"));
        assert_eq!(url.path(), "/searchresults.en-gb.html");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("ss".into(), "Casablanca".into()));
        assert_eq!(pairs[1], ("dest_id".into(), "-14763".into()));
        assert_eq!(pairs[2], ("dest_type".into(), "city".into()));
        assert_eq!(pairs.len(), 11);
        assert_eq!(pairs[10], ("src".into(), "searchresults".into()));
    }

    #[test]
    fn search_url_encodes_spaces_in_names() {
        let url = City::new("New York", "20088325").search_url().unwrap();
        assert!(url.as_str().contains("ss=New+York"));
    }
}
