use crate::identity::IdAssigner;
use crate::selection;
use contracts::domain::a001_component::ComponentRecord;
use contracts::domain::a002_result_set::{IntakeRow, RowId};

/// Набор строк загруженного файла до отправки на подбор.
///
/// Транспорт загрузки уже превратил файл в структурированные записи;
/// здесь оператор отмечает, какие позиции уходят в запрос. Механика
/// выбора общая с таблицей результатов (см. `selection`).
#[derive(Debug, Default)]
pub struct IntakeSet {
    rows: Vec<IntakeRow>,
    assigner: IdAssigner,
}

impl IntakeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Принять разобранные строки файла, раздав им свежие id.
    /// Прежнее содержимое заменяется целиком — как и набор результатов,
    /// intake не сливается инкрементально.
    pub fn load(&mut self, records: Vec<(ComponentRecord, String, u32)>) {
        self.assigner = IdAssigner::new();
        self.rows = records
            .into_iter()
            .map(|(record, description, quantity)| {
                IntakeRow::new(self.assigner.next(), record, description, quantity)
            })
            .collect();
        tracing::debug!(rows = self.rows.len(), "intake rows loaded");
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.assigner = IdAssigner::new();
    }

    pub fn rows(&self) -> &[IntakeRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn toggle(&mut self, id: &RowId, selected: bool) -> bool {
        selection::toggle(&mut self.rows, id, selected)
    }

    pub fn toggle_all(&mut self, selected: bool) {
        selection::toggle_all(&mut self.rows, selected);
    }

    pub fn all_selected(&self) -> bool {
        selection::all_selected(&self.rows)
    }

    /// Записи, уходящие в запрос подбора; пусто — отправлять нечего,
    /// кнопка поиска у вызывающего остаётся неактивной.
    pub fn submission(&self) -> Vec<ComponentRecord> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.record.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(n: usize) -> Vec<(ComponentRecord, String, u32)> {
        (1..=n)
            .map(|i| {
                (
                    ComponentRecord {
                        manufacturer: "TDK".to_string(),
                        part_number: format!("P{}", i),
                        component_type: "Capacitor".to_string(),
                        electrical_specs: None,
                    },
                    format!("Electronic Component {}", i),
                    i as u32,
                )
            })
            .collect()
    }

    #[test]
    fn test_load_assigns_fresh_unselected_rows() {
        let mut intake = IntakeSet::new();
        intake.load(parsed(3));
        assert_eq!(intake.rows().len(), 3);
        assert!(intake.rows().iter().all(|r| !r.selected));
        assert_eq!(intake.rows()[0].id.as_str(), "row-1");
        assert_eq!(intake.rows()[2].quantity, 3);
    }

    #[test]
    fn test_submission_contains_only_selected() {
        let mut intake = IntakeSet::new();
        intake.load(parsed(4));
        assert!(intake.submission().is_empty());

        let id = intake.rows()[1].id.clone();
        intake.toggle(&id, true);
        let submission = intake.submission();
        assert_eq!(submission.len(), 1);
        assert_eq!(submission[0].part_number, "P2");
    }

    #[test]
    fn test_reload_replaces_and_reissues_ids() {
        let mut intake = IntakeSet::new();
        intake.load(parsed(2));
        intake.toggle_all(true);

        intake.load(parsed(2));
        assert!(!intake.all_selected());
        assert_eq!(intake.rows()[0].id.as_str(), "row-1");
    }
}
