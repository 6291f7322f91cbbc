use crate::error::ResultsError;
use chrono::Local;
use contracts::domain::a002_result_set::ResultRow;
use serde::Serialize;

/// Trait для типов, которые выгружаются в CSV с фиксированной схемой колонок
pub trait CsvExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for ResultRow {
    fn headers() -> Vec<&'static str> {
        vec!["Product Number", "Competitor", "Category", "Alternative"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.record.component.part_number.clone(),
            self.record.component.manufacturer.clone(),
            self.record.component.component_type.clone(),
            self.record.alternative_part_number.clone(),
        ]
    }
}

/// Готовый к отдаче файл экспорта; запись на диск/скачивание — забота
/// вызывающего, включая политику перезаписи при совпадении имён.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Имя файла с датой вызова: два экспорта одного вида в один день
/// сталкиваются по имени намеренно.
fn dated_file_name(stem: &str, extension: &str) -> String {
    format!("{}-{}.{}", stem, Local::now().format("%Y-%m-%d"), extension)
}

/// CSV-выгрузка. Пустой вход — `Ok(None)`, явный no-op без файла.
///
/// Кавычки ставятся только там, где без них нельзя (запятая, кавычка,
/// перевод строки в значении) — обычные значения уходят байт в байт,
/// и при этом RFC 4180 не нарушается.
pub fn export_csv<T: CsvExportable>(
    rows: &[T],
    stem: &str,
) -> Result<Option<ExportFile>, ResultsError> {
    if rows.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| ResultsError::Export(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row.to_csv_row())
            .map_err(|e| ResultsError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ResultsError::Export(e.to_string()))?;

    Ok(Some(ExportFile {
        file_name: dated_file_name(stem, "csv"),
        mime: "text/csv",
        bytes,
    }))
}

/// JSON-выгрузка: человекочитаемый массив полных объектов строк, включая
/// вложенные характеристики — схема шире, чем четыре колонки CSV.
/// Пустой вход — `Ok(None)`.
pub fn export_json<T: Serialize>(
    rows: &[T],
    stem: &str,
) -> Result<Option<ExportFile>, ResultsError> {
    if rows.is_empty() {
        return Ok(None);
    }

    let bytes = serde_json::to_vec_pretty(rows)?;

    Ok(Some(ExportFile {
        file_name: dated_file_name(stem, "json"),
        mime: "application/json",
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_component::{ComponentRecord, MatchRecord};
    use contracts::domain::a002_result_set::RowId;
    use std::collections::BTreeMap;

    fn row(i: usize, part: &str, manufacturer: &str) -> ResultRow {
        ResultRow::new(
            RowId::new(format!("row-{}", i)),
            MatchRecord {
                component: ComponentRecord {
                    manufacturer: manufacturer.to_string(),
                    part_number: part.to_string(),
                    component_type: "Inductor".to_string(),
                    electrical_specs: Some(BTreeMap::from([(
                        "inductance".to_string(),
                        "4.7 uH".to_string(),
                    )])),
                },
                alternative_part_number: format!("WE-{}", i),
                match_reason: "Same footprint".to_string(),
            },
        )
    }

    #[test]
    fn test_empty_input_is_noop() {
        let rows: Vec<ResultRow> = Vec::new();
        assert_eq!(export_csv(&rows, "component-results").unwrap(), None);
        assert_eq!(export_json(&rows, "component-results").unwrap(), None);
    }

    #[test]
    fn test_csv_two_rows_three_lines_verbatim() {
        let rows = vec![row(1, "744771147", "Murata"), row(2, "744773356", "TDK")];
        let file = export_csv(&rows, "component-results").unwrap().unwrap();
        let text = String::from_utf8(file.bytes).unwrap();

        let lines: Vec<&str> = text.trim_end().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Product Number,Competitor,Category,Alternative");
        assert_eq!(lines[1], "744771147,Murata,Inductor,WE-1");
        assert_eq!(lines[2], "744773356,TDK,Inductor,WE-2");
        assert_eq!(file.mime, "text/csv");
    }

    #[test]
    fn test_csv_quotes_only_when_needed() {
        let rows = vec![row(1, "P1,comma", "Mur\"ata")];
        let file = export_csv(&rows, "component-results").unwrap().unwrap();
        let text = String::from_utf8(file.bytes).unwrap();
        let data_line = text.trim_end().split('\n').nth(1).unwrap();
        assert_eq!(data_line, "\"P1,comma\",\"Mur\"\"ata\",Inductor,WE-1");
    }

    #[test]
    fn test_file_names_embed_current_date() {
        let rows = vec![row(1, "744771147", "Murata")];
        let date = Local::now().format("%Y-%m-%d").to_string();
        let csv = export_csv(&rows, "component-results").unwrap().unwrap();
        let json = export_json(&rows, "component-results").unwrap().unwrap();
        assert_eq!(csv.file_name, format!("component-results-{}.csv", date));
        assert_eq!(json.file_name, format!("component-results-{}.json", date));
    }

    #[test]
    fn test_json_is_pretty_and_complete() {
        let rows = vec![row(1, "744771147", "Murata")];
        let file = export_json(&rows, "component-results").unwrap().unwrap();
        let text = String::from_utf8(file.bytes).unwrap();

        // отступы и все поля строки, включая вложенные характеристики
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"id\": \"row-1\""));
        assert!(text.contains("\"inductance\": \"4.7 uH\""));
        assert!(text.contains("\"selected\": false"));
        assert_eq!(file.mime, "application/json");

        let parsed: Vec<ResultRow> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, rows);
    }
}
