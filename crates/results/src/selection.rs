use contracts::domain::a002_result_set::{IntakeRow, ResultRow, RowId};

/// Trait для строк с отмечаемым выбором (таблица результатов и таблица
/// загруженного файла используют одну и ту же механику).
pub trait Selectable {
    fn row_id(&self) -> &RowId;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}

impl Selectable for ResultRow {
    fn row_id(&self) -> &RowId {
        &self.id
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl Selectable for IntakeRow {
    fn row_id(&self) -> &RowId {
        &self.id
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Выставить флаг ровно одной строке. Возвращает `true`, если id найден;
/// остальные строки не трогаются.
pub fn toggle<S: Selectable>(rows: &mut [S], id: &RowId, selected: bool) -> bool {
    match rows.iter_mut().find(|row| row.row_id() == id) {
        Some(row) => {
            row.set_selected(selected);
            true
        }
        None => false,
    }
}

/// Выставить флаг всем строкам набора — не только видимой странице.
pub fn toggle_all<S: Selectable>(rows: &mut [S], selected: bool) {
    for row in rows.iter_mut() {
        row.set_selected(selected);
    }
}

/// Агрегат "выбрано всё": логическое И по всему набору, пересчитывается
/// при каждом чтении и нигде не хранится. Для пустого набора — `false`:
/// чекбокс над нулём строк не должен выглядеть отмеченным.
pub fn all_selected<S: Selectable>(rows: &[S]) -> bool {
    !rows.is_empty() && rows.iter().all(|row| row.is_selected())
}

/// Живой снимок выбранных строк по всему набору на момент вызова
pub fn selected_rows<S: Selectable + Clone>(rows: &[S]) -> Vec<S> {
    rows.iter()
        .filter(|row| row.is_selected())
        .cloned()
        .collect()
}
