use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Описание одного электронного компонента, как его возвращают
/// upload-сервис и сервис подбора аналогов.
///
/// Имена полей на проводе отличаются от внутренних — см. `serde(rename)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub manufacturer: String,

    #[serde(rename = "manufacturer_part_number")]
    pub part_number: String,

    /// Тип компонента как свободная строка ("Resistor", "Capacitor", ...).
    /// Классификация для отображения — забота сервиса, не модели.
    pub component_type: String,

    /// Ключевые электрические характеристики (имя -> текстовое значение).
    /// `None`, когда источник их не знает. BTreeMap — чтобы JSON-экспорт
    /// был детерминированным.
    #[serde(rename = "key_electrical_specs", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrical_specs: Option<BTreeMap<String, String>>,
}

/// ComponentRecord + результат работы сервиса подбора.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(flatten)]
    pub component: ComponentRecord,

    /// Пустая строка — сигнал "аналог не найден".
    #[serde(rename = "wuerth_manufacturer_part_number", default)]
    pub alternative_part_number: String,

    /// Осмысленно только когда аналог найден.
    #[serde(rename = "reason_why_it_is_a_match", default)]
    pub match_reason: String,
}

impl MatchRecord {
    /// Нашёл ли сервис аналог для этого компонента.
    pub fn has_match(&self) -> bool {
        !self.alternative_part_number.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_matching_response_item() {
        let raw = r#"{
            "manufacturer": "Murata",
            "manufacturer_part_number": "744771147",
            "component_type": "Inductor",
            "key_electrical_specs": { "inductance": "4.7 uH", "rated_current": "2.8 A" },
            "wuerth_manufacturer_part_number": "WE-LQS 744032",
            "reason_why_it_is_a_match": "Same inductance and footprint"
        }"#;

        let record: MatchRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.component.part_number, "744771147");
        assert_eq!(record.component.manufacturer, "Murata");
        assert!(record.has_match());
        let specs = record.component.electrical_specs.as_ref().unwrap();
        assert_eq!(specs.get("inductance").unwrap(), "4.7 uH");
    }

    #[test]
    fn test_deserialize_without_specs_and_without_match() {
        let raw = r#"{
            "manufacturer": "TDK",
            "manufacturer_part_number": "CGA3E2X7R1H104K",
            "component_type": "Capacitor",
            "wuerth_manufacturer_part_number": "",
            "reason_why_it_is_a_match": ""
        }"#;

        let record: MatchRecord = serde_json::from_str(raw).unwrap();
        assert!(record.component.electrical_specs.is_none());
        assert!(!record.has_match());
    }

    #[test]
    fn test_roundtrip_keeps_wire_field_names() {
        let record = MatchRecord {
            component: ComponentRecord {
                manufacturer: "Vishay".to_string(),
                part_number: "CRCW0603".to_string(),
                component_type: "Resistor".to_string(),
                electrical_specs: None,
            },
            alternative_part_number: "WE-MAPI 74437368".to_string(),
            match_reason: "Equivalent resistance".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("manufacturer_part_number"));
        assert!(json.contains("wuerth_manufacturer_part_number"));
        assert!(json.contains("reason_why_it_is_a_match"));
        assert!(!json.contains("key_electrical_specs"));
    }
}
