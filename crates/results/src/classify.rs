use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Категория компонента для отображения (бейдж в таблице и карточках).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    Resistors,
    Capacitors,
    Inductors,
    Connectors,
    Diodes,
    /// Нераспознанный тип — нейтральный бейдж, не ошибка
    Other,
}

impl DisplayCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayCategory::Resistors => "Resistors",
            DisplayCategory::Capacitors => "Capacitors",
            DisplayCategory::Inductors => "Inductors",
            DisplayCategory::Connectors => "Connectors",
            DisplayCategory::Diodes => "Diodes",
            DisplayCategory::Other => "Other",
        }
    }

    /// CSS-класс бейджа; слой отображения сам решает, как его применить.
    pub fn badge_class(&self) -> &'static str {
        match self {
            DisplayCategory::Resistors => "category-resistors",
            DisplayCategory::Capacitors => "category-capacitors",
            DisplayCategory::Inductors => "category-inductors",
            DisplayCategory::Connectors => "category-connectors",
            DisplayCategory::Diodes => "category-diodes",
            DisplayCategory::Other => "bg-gray-100 text-gray-800",
        }
    }
}

static CATEGORY_MAP: Lazy<HashMap<&'static str, DisplayCategory>> = Lazy::new(|| {
    HashMap::from([
        ("resistor", DisplayCategory::Resistors),
        ("resistors", DisplayCategory::Resistors),
        ("capacitor", DisplayCategory::Capacitors),
        ("capacitors", DisplayCategory::Capacitors),
        ("inductor", DisplayCategory::Inductors),
        ("inductors", DisplayCategory::Inductors),
        ("connector", DisplayCategory::Connectors),
        ("connectors", DisplayCategory::Connectors),
        ("diode", DisplayCategory::Diodes),
        ("diodes", DisplayCategory::Diodes),
    ])
});

/// Тип компонента (свободная строка источника) -> категория отображения.
/// Тотальна над любыми строками: всё незнакомое уходит в `Other`.
pub fn classify(component_type: &str) -> DisplayCategory {
    CATEGORY_MAP
        .get(component_type.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DisplayCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map() {
        assert_eq!(classify("Resistor"), DisplayCategory::Resistors);
        assert_eq!(classify("Capacitors"), DisplayCategory::Capacitors);
        assert_eq!(classify("  inductor "), DisplayCategory::Inductors);
        assert_eq!(classify("DIODE"), DisplayCategory::Diodes);
    }

    #[test]
    fn test_unknown_type_is_other() {
        assert_eq!(classify("Transformer"), DisplayCategory::Other);
        assert_eq!(classify(""), DisplayCategory::Other);
        assert_eq!(classify("Резистор"), DisplayCategory::Other);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(classify("Inductor").badge_class(), "category-inductors");
        assert_eq!(
            DisplayCategory::Other.badge_class(),
            "bg-gray-100 text-gray-800"
        );
    }
}
