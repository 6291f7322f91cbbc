use crate::domain::a001_component::MatchRecord;
use serde::{Deserialize, Serialize};

/// Ответ сервиса подбора: список записей в порядке запроса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub components: Vec<MatchRecord>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
