use crate::domain::a001_component::ComponentRecord;
use serde::{Deserialize, Serialize};

/// Способ ввода идентификатора компонента.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Массовая загрузка файла (Excel/CSV)
    #[default]
    Excel,
    /// Ручной ввод артикула
    Manual,
    /// Снимок компонента с камеры
    Camera,
}

impl SearchMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchMethod::Excel => "Загрузка файла",
            SearchMethod::Manual => "Ручной ввод",
            SearchMethod::Camera => "Фото компонента",
        }
    }

    pub fn all() -> Vec<SearchMethod> {
        vec![
            SearchMethod::Excel,
            SearchMethod::Manual,
            SearchMethod::Camera,
        ]
    }
}

/// Запрос на подбор аналогов.
///
/// Заполненные поля зависят от способа ввода: excel несёт выбранные
/// позиции файла, manual — артикул, camera — кадр в base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub method: SearchMethod,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,

    /// Искать и функциональные замены, не только прямые аналоги
    #[serde(default)]
    pub include_alternatives: bool,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_items: Option<Vec<ComponentRecord>>,

    /// Кадр с камеры, data-URL/base64. Декодирование — забота транспорта.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl SearchQuery {
    pub fn manual(product_number: impl Into<String>, include_alternatives: bool) -> Self {
        Self {
            method: SearchMethod::Manual,
            product_number: Some(product_number.into()),
            include_alternatives,
            selected_items: None,
            image_data: None,
        }
    }

    pub fn excel(selected_items: Vec<ComponentRecord>) -> Self {
        Self {
            method: SearchMethod::Excel,
            product_number: None,
            include_alternatives: false,
            selected_items: Some(selected_items),
            image_data: None,
        }
    }

    pub fn camera(image_data: impl Into<String>) -> Self {
        Self {
            method: SearchMethod::Camera,
            product_number: None,
            include_alternatives: false,
            selected_items: None,
            image_data: Some(image_data.into()),
        }
    }
}
