use crate::domain::a001_component::MatchRecord;
use serde::{Deserialize, Serialize};

/// Тема письма по умолчанию, подставляется в форму и редактируема.
pub const DEFAULT_SUBJECT: &str = "Component Search Results";

/// Запрос на отправку результатов внешнему почтовому транспорту.
///
/// Здесь только локальная валидация; сама отправка — внешний коллаборатор.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub recipient: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub message: String,

    pub components: Vec<MatchRecord>,
}

impl EmailRequest {
    /// Проверка перед передачей транспорту: адресат непустой,
    /// выбрана хотя бы одна строка.
    pub fn validate(&self) -> Result<(), String> {
        if self.recipient.trim().is_empty() {
            return Err("Не указан адрес получателя".to_string());
        }
        if self.components.is_empty() {
            return Err("Не выбрано ни одной строки результатов".to_string());
        }
        Ok(())
    }
}
