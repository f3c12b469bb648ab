use serde::{Deserialize, Deserializer};

use crate::catalog::Page;

// `?page=` values that are missing or not a positive integer mean the first page
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<Page, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(Page::parse).unwrap_or_default())
}

// the client takes category ids from JSON object keys, so they may arrive as strings
pub use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct PageQuery {
        #[serde(default, deserialize_with = "deserialize_page")]
        page: Page,
    }

    #[derive(Deserialize)]
    struct Id {
        #[serde(deserialize_with = "deserialize_number_from_string")]
        id: i64,
    }

    #[test]
    fn page_is_lenient() {
        let parse = |raw: &str| serde_json::from_str::<PageQuery>(raw).unwrap().page.number();
        assert_eq!(parse(r#"{"page": "4"}"#), 4);
        assert_eq!(parse(r#"{"page": "four"}"#), 1);
        assert_eq!(parse(r#"{}"#), 1);
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        assert_eq!(serde_json::from_str::<Id>(r#"{"id": 3}"#).unwrap().id, 3);
        assert_eq!(serde_json::from_str::<Id>(r#"{"id": "3"}"#).unwrap().id, 3);
        assert!(serde_json::from_str::<Id>(r#"{"id": "x"}"#).is_err());
    }
}
