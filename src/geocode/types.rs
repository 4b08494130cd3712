use serde::Deserialize;

/// A successfully resolved location.
///
/// Held only in dialog state until the next check overwrites it; only
/// `raw_query` is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub raw_query: String,
}

/// Response shape of the ZIP lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ZipResponse {
    pub name: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl ZipResponse {
    /// Display label: "<name>, <country>" when a country is present, else
    /// just the name, which falls back to "ZIP <code>".
    pub fn label(&self, code: &str) -> String {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("ZIP {code}"));
        match self.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{name}, {country}"),
            None => name,
        }
    }
}

/// One match from the free-text search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectMatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl DirectMatch {
    /// Display label: name, optionally suffixed with ", <country>" and then
    /// " (<state>)". The name falls back to the original input.
    pub fn label(&self, fallback: &str) -> String {
        let mut label = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback)
            .to_string();
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            label = format!("{label}, {country}");
        }
        if let Some(state) = self.state.as_deref().filter(|s| !s.is_empty()) {
            label = format!("{label} ({state})");
        }
        label
    }
}

/// ZIP/postal classification: after removing commas and spaces, every
/// remaining character must be a digit.
pub fn is_zip_query(query: &str) -> bool {
    let stripped: String = query.chars().filter(|c| *c != ',' && *c != ' ').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_queries_take_the_zip_path() {
        assert!(is_zip_query("90210"));
        assert!(is_zip_query("90210,US"));
        assert!(is_zip_query("941 10"));
        assert!(is_zip_query(" 10115 , 49 "));
    }

    #[test]
    fn test_other_queries_take_the_free_form_path() {
        assert!(!is_zip_query("Paris"));
        assert!(!is_zip_query("Paris,FR"));
        assert!(!is_zip_query("SW1A 1AA"));
        assert!(!is_zip_query("90210x"));
    }

    #[test]
    fn test_only_separators_is_not_a_zip() {
        assert!(!is_zip_query(","));
        assert!(!is_zip_query(" , "));
    }

    #[test]
    fn test_zip_label_with_country() {
        let response = ZipResponse {
            name: Some("Beverly Hills".to_string()),
            country: Some("US".to_string()),
            lat: Some(34.1),
            lon: Some(-118.4),
        };
        assert_eq!(response.label("90210"), "Beverly Hills, US");
    }

    #[test]
    fn test_zip_label_falls_back_to_code() {
        let response = ZipResponse {
            name: None,
            country: None,
            lat: Some(34.1),
            lon: Some(-118.4),
        };
        assert_eq!(response.label("90210"), "ZIP 90210");
    }

    #[test]
    fn test_direct_label_full() {
        let entry = DirectMatch {
            name: Some("Springfield".to_string()),
            country: Some("US".to_string()),
            state: Some("Illinois".to_string()),
            lat: Some(39.8),
            lon: Some(-89.6),
        };
        assert_eq!(entry.label("springfield"), "Springfield, US (Illinois)");
    }

    #[test]
    fn test_direct_label_falls_back_to_query() {
        let entry = DirectMatch {
            name: None,
            country: Some("FR".to_string()),
            state: None,
            lat: Some(48.85),
            lon: Some(2.35),
        };
        assert_eq!(entry.label("paris"), "paris, FR");
    }
}
