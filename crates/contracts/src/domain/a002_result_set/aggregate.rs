use crate::domain::a001_component::{ComponentRecord, MatchRecord};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор строки результата.
///
/// Уникален в пределах активного набора; выдаётся только раздатчиком id
/// (crate `results`), повторно не используется. Содержимое строки на id
/// не влияет — дубликаты партномеров легальны.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub String);

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Rows
// ============================================================================

/// Строка результатов поиска: запись сервиса подбора + состояние выбора.
/// `record` после приёма не меняется, мутирует только `selected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: RowId,

    #[serde(flatten)]
    pub record: MatchRecord,

    #[serde(default)]
    pub selected: bool,
}

impl ResultRow {
    pub fn new(id: RowId, record: MatchRecord) -> Self {
        Self {
            id,
            record,
            selected: false,
        }
    }
}

/// Строка загруженного файла до отправки на подбор: оператор отмечает,
/// какие позиции уходят в запрос.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRow {
    pub id: RowId,

    #[serde(flatten)]
    pub record: ComponentRecord,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub selected: bool,
}

impl IntakeRow {
    pub fn new(id: RowId, record: ComponentRecord, description: String, quantity: u32) -> Self {
        Self {
            id,
            record,
            description,
            quantity,
            selected: false,
        }
    }
}
