use contracts::domain::a002_result_set::RowId;

/// Раздатчик id строк: монотонный счётчик на время жизни одного набора.
///
/// Id не зависит от содержимого записи — одинаковые партномера из разных
/// строк источника получают разные id. Счётчик вместо случайной строки
/// делает уникальность доказуемой, а не вероятностной; при замене набора
/// создаётся свежий раздатчик, так что id внутри набора не переиспользуются.
#[derive(Debug, Default)]
pub struct IdAssigner {
    next: u64,
}

impl IdAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> RowId {
        self.next += 1;
        RowId::new(format!("row-{}", self.next))
    }

    /// Сколько id уже выдано
    pub fn issued(&self) -> u64 {
        self.next
    }
}
