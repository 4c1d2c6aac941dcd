use namecat_core::config::Taxonomy;
use namecat_core::name::{Gender, NameType, Status};

/// Parse gender from string
pub fn parse_gender(s: &str) -> std::result::Result<Gender, String> {
    s.parse::<Gender>().map_err(|e| e.to_string())
}

/// Parse name type from string
pub fn parse_name_type(s: &str) -> std::result::Result<NameType, String> {
    s.parse::<NameType>().map_err(|e| e.to_string())
}

/// Parse status from string
pub fn parse_status(s: &str) -> std::result::Result<Status, String> {
    s.parse::<Status>().map_err(|e| e.to_string())
}

/// Parse taxonomy from string
pub fn parse_taxonomy(s: &str) -> std::result::Result<Taxonomy, String> {
    s.parse::<Taxonomy>().map_err(|e| e.to_string())
}
