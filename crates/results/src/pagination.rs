/// Слот окна навигации: номер страницы либо многоточие.
///
/// `Ellipsis` несёт номер скрытой за ним страницы — контрол рисуется
/// неактивным, но значение остаётся доступным слою отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis(usize),
}

/// Постраничный вывод: размер страницы фиксирован, номера страниц с единицы.
#[derive(Debug, Clone)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
    total_items: usize,
}

impl Pagination {
    /// `page_size` == 0 подменяется единицей: движок не должен уметь
    /// оказаться в невалидном состоянии.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_items: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Всегда минимум 1: пустой набор — это одна пустая страница.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Обновить размер набора; текущая страница поджимается в диапазон,
    /// если набор сократился.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Сбросить на первую страницу с новым размером набора
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Переход на страницу `n`; вне диапазона [1, total_pages] — тихо
    /// игнорируется (модель "кнопка неактивна", не ошибка).
    pub fn go_to(&mut self, n: usize) {
        if n >= 1 && n <= self.total_pages() {
            self.current_page = n;
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page + 1);
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.go_to(self.current_page - 1);
        }
    }

    /// Границы среза `[start, end)` для страницы `n`.
    /// `n` вне диапазона поджимается в [1, total_pages] (задокументированный
    /// выбор: clamp, не отказ).
    pub fn page_bounds(&self, n: usize) -> (usize, usize) {
        let n = n.clamp(1, self.total_pages());
        let start = (n - 1) * self.page_size;
        let end = (n * self.page_size).min(self.total_items);
        (start, end)
    }

    /// Границы среза текущей страницы
    pub fn current_bounds(&self) -> (usize, usize) {
        self.page_bounds(self.current_page)
    }

    /// Строка вида "Showing 1 to 10 of 47 results" для подвала таблицы
    pub fn summary(&self) -> String {
        let (start, end) = self.current_bounds();
        if self.total_items == 0 {
            return "Showing 0 results".to_string();
        }
        format!(
            "Showing {} to {} of {} results",
            start + 1,
            end,
            self.total_items
        )
    }

    /// Окно навигации: не больше пяти слотов.
    ///
    /// До пяти страниц — все номера подряд. Дальше первый и последний слот
    /// закреплены за крайними страницами (обе достижимы в один клик),
    /// середина следует за текущей страницей. Слот схлопывается в
    /// многоточие, когда он второй со значением больше 2 либо четвёртый
    /// со значением меньше `total_pages - 1` — чтобы не рисовать номер
    /// впритык к закреплённому краю.
    pub fn page_window(&self) -> Vec<PageSlot> {
        let total = self.total_pages();
        let current = self.current_page;

        if total <= 5 {
            return (1..=total).map(PageSlot::Page).collect();
        }

        let slots: [usize; 5] = if current <= 3 {
            [1, 2, 3, 4, total]
        } else if current >= total - 2 {
            [1, total - 3, total - 2, total - 1, total]
        } else {
            [1, current - 1, current, current + 1, total]
        };

        slots
            .iter()
            .enumerate()
            .map(|(i, &page)| {
                if (i == 1 && page > 2) || (i == 3 && page < total - 1) {
                    PageSlot::Ellipsis(page)
                } else {
                    PageSlot::Page(page)
                }
            })
            .collect()
    }
}
