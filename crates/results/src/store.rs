use crate::config::ResultsConfig;
use crate::error::ResultsError;
use crate::export::{self, ExportFile};
use crate::identity::IdAssigner;
use crate::pagination::{PageSlot, Pagination};
use crate::selection;
use contracts::domain::a001_component::MatchRecord;
use contracts::domain::a002_result_set::{ResultRow, RowId};

/// Агрегат набора результатов текущей сессии.
///
/// Единственный владелец строк: intake-потоки и UI мутируют набор только
/// через него. Порядок вставки сохраняется, неявной сортировки нет.
/// Набор заменяется целиком по завершении поиска и очищается при смене
/// способа ввода — инкрементального слияния не бывает.
#[derive(Debug)]
pub struct ResultStore {
    rows: Vec<ResultRow>,
    assigner: IdAssigner,
    pagination: Pagination,
    export_stem: String,
}

impl ResultStore {
    pub fn new(config: &ResultsConfig) -> Self {
        Self {
            rows: Vec::new(),
            assigner: IdAssigner::new(),
            pagination: Pagination::new(config.page_size),
            export_stem: config.export_stem.clone(),
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Заменить набор целиком результатами завершившегося поиска.
    ///
    /// Свежий раздатчик id (одинаковые записи нового поиска не наследуют
    /// id старого), все строки без выбора, пагинация на первую страницу.
    pub fn replace(&mut self, records: Vec<MatchRecord>) {
        self.assigner = IdAssigner::new();
        self.rows = records
            .into_iter()
            .map(|record| ResultRow::new(self.assigner.next(), record))
            .collect();
        self.pagination.reset(self.rows.len());
        tracing::info!(rows = self.rows.len(), "result set replaced");
    }

    /// Очистить набор (смена способа ввода): строки, выбор и пагинация
    /// сбрасываются разом.
    pub fn clear(&mut self) {
        let dropped = self.rows.len();
        self.rows.clear();
        self.assigner = IdAssigner::new();
        self.pagination.reset(0);
        if dropped > 0 {
            tracing::info!(rows = dropped, "result set cleared");
        }
    }

    // ------------------------------------------------------------------
    // Пагинация
    // ------------------------------------------------------------------

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn go_to_page(&mut self, n: usize) {
        self.pagination.go_to(n);
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
    }

    /// Строки текущей страницы; выбор на других страницах не теряется
    pub fn current_page_rows(&self) -> &[ResultRow] {
        let (start, end) = self.pagination.current_bounds();
        &self.rows[start..end]
    }

    pub fn page_window(&self) -> Vec<PageSlot> {
        self.pagination.page_window()
    }

    // ------------------------------------------------------------------
    // Выбор
    // ------------------------------------------------------------------

    pub fn toggle(&mut self, id: &RowId, selected: bool) -> bool {
        selection::toggle(&mut self.rows, id, selected)
    }

    pub fn toggle_all(&mut self, selected: bool) {
        selection::toggle_all(&mut self.rows, selected);
    }

    /// Пересчитывается по всему набору при каждом вызове, не хранится
    pub fn all_selected(&self) -> bool {
        selection::all_selected(&self.rows)
    }

    pub fn selected_rows(&self) -> Vec<ResultRow> {
        selection::selected_rows(&self.rows)
    }

    // ------------------------------------------------------------------
    // Экспорт
    // ------------------------------------------------------------------

    /// CSV по набору; `selected_only` фильтрует по живому выбору всего
    /// набора, не текущей страницы. Пустой вход — `Ok(None)`.
    pub fn export_csv(&self, selected_only: bool) -> Result<Option<ExportFile>, ResultsError> {
        if selected_only {
            export::export_csv(&self.selected_rows(), &self.export_stem)
        } else {
            export::export_csv(&self.rows, &self.export_stem)
        }
    }

    pub fn export_json(&self, selected_only: bool) -> Result<Option<ExportFile>, ResultsError> {
        if selected_only {
            export::export_json(&self.selected_rows(), &self.export_stem)
        } else {
            export::export_json(&self.rows, &self.export_stem)
        }
    }
}
