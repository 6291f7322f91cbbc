use crate::error::ResultsError;
use async_trait::async_trait;
use contracts::usecases::u101_find_alternatives::{SearchQuery, SearchResponse};

/// Трейт клиента сервиса подбора — внешний коллаборатор за интерфейсом.
///
/// Реализация живёт у хоста (HTTP, mock, что угодно). Сетевые сбои и
/// неуспешные статусы отдаются как `ResultsError::Transport`; успешный
/// ответ, не прошедший схему, — как `ResultsError::MalformedResponse`
/// (тот же класс ошибки для вызывающего, не падение).
#[async_trait]
pub trait MatchingClient {
    async fn find_matches(&self, query: &SearchQuery) -> Result<SearchResponse, ResultsError>;
}

/// Разбор тела успешного ответа с проверкой схемы.
pub fn parse_response(body: &str) -> Result<SearchResponse, ResultsError> {
    serde_json::from_str(body).map_err(ResultsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_response() {
        let body = r#"{"components": [{
            "manufacturer": "Vishay",
            "manufacturer_part_number": "744727825",
            "component_type": "Resistor",
            "wuerth_manufacturer_part_number": "WE-MAPI 74437368",
            "reason_why_it_is_a_match": "Equivalent resistance"
        }]}"#;
        let response = parse_response(body).unwrap();
        assert_eq!(response.components.len(), 1);
        assert!(response.components[0].has_match());
    }

    #[test]
    fn test_parse_malformed_response_is_classified() {
        let err = parse_response(r#"{"components": 42}"#).unwrap_err();
        assert!(matches!(err, ResultsError::MalformedResponse(_)));
    }
}
