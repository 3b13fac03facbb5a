use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator_class(self) -> &'static str {
        match self {
            SortDirection::Asc => "sorting-asc",
            SortDirection::Desc => "sorting-desc",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub label: String,
    /// Columns with a sort key get a clickable header.
    pub sort_key: Option<String>,
    /// Category name that filters match this column's cells against.
    pub category: Option<String>,
}

impl Column {
    pub fn new(label: &str) -> Self {
        Self { label: label.to_string(), sort_key: None, category: None }
    }

    pub fn sortable(mut self, key: &str) -> Self {
        self.sort_key = Some(key.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub feature: Option<String>,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { feature: None, cells: cells.into_iter().map(Into::into).collect() }
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.feature = Some(feature.to_string());
        self
    }

    fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(|c| c.trim()).unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub category: String,
    pub value: String,
}

pub const SHOW_ALL: &str = "all";

/// Case-insensitive text ordering with a case-sensitive tiebreak.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// View state of one comparison table: row order, per-header sort direction,
/// the active filter and the highlighted feature. Rows themselves are never
/// mutated; `order` holds indices into them.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    columns: Vec<Column>,
    rows: Vec<Row>,
    order: Vec<usize>,
    next_direction: Vec<SortDirection>,
    indicator: Option<(usize, SortDirection)>,
    filter: Option<Filter>,
    highlighted: Option<String>,
}

impl TableState {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let order = (0..rows.len()).collect();
        let next_direction = vec![SortDirection::Asc; columns.len()];
        Self {
            columns,
            rows,
            order,
            next_direction,
            indicator: None,
            filter: None,
            highlighted: None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in display order, each with its index in the source list.
    pub fn ordered_rows(&self) -> impl Iterator<Item = (usize, &Row)> + '_ {
        self.order.iter().map(move |&index| (index, &self.rows[index]))
    }

    fn column_for_key(&self, key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.sort_key.as_deref() == Some(key))
    }

    /// Sorts by the header carrying `key` using that header's pending
    /// direction, then flips it for the next click. Returns the direction used.
    pub fn sort_by(&mut self, key: &str) -> Option<SortDirection> {
        let column = self.column_for_key(key)?;
        let direction = self.next_direction[column];
        let rows = &self.rows;
        self.order.sort_by(|&a, &b| {
            let ordering = compare_text(rows[a].cell(column), rows[b].cell(column));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        self.next_direction[column] = direction.flipped();
        self.indicator = Some((column, direction));
        Some(direction)
    }

    /// Indicator class for the header at `column`, if it was the last one sorted.
    pub fn indicator(&self, column: usize) -> Option<&'static str> {
        match self.indicator {
            Some((sorted, direction)) if sorted == column => Some(direction.indicator_class()),
            _ => None,
        }
    }

    /// `value == "all"` clears the filter.
    pub fn set_filter(&mut self, category: &str, value: &str) {
        self.filter = if value == SHOW_ALL {
            None
        } else {
            Some(Filter { category: category.to_string(), value: value.to_string() })
        };
    }

    pub fn is_visible(&self, row: &Row) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        self.columns
            .iter()
            .position(|c| c.category.as_deref() == Some(filter.category.as_str()))
            .map(|column| row.cell(column) == filter.value)
            .unwrap_or(false)
    }

    pub fn highlight(&mut self, feature: &str) {
        self.highlighted = Some(feature.to_string());
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_highlighted(&self, row: &Row) -> bool {
        match (&self.highlighted, &row.feature) {
            (Some(wanted), Some(feature)) => wanted == feature,
            _ => false,
        }
    }

    /// Distinct trimmed values of the column tagged with `category`, in first-seen order.
    pub fn category_values(&self, category: &str) -> Vec<String> {
        let Some(column) = self
            .columns
            .iter()
            .position(|c| c.category.as_deref() == Some(category))
        else {
            return Vec::new();
        };
        let mut values: Vec<String> = Vec::new();
        for row in &self.rows {
            let value = row.cell(column);
            if !value.is_empty() && !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableState {
        TableState::new(
            vec![
                Column::new("Plugin").sortable("plugin"),
                Column::new("Price").sortable("price"),
                Column::new("HIPAA").category("hipaa"),
                Column::new("Notes"),
            ],
            vec![
                Row::new(["MBA Gallery", "$79", "Yes", ""]).feature("privacy"),
                Row::new(["envira", "$99", " No ", ""]).feature("lightbox"),
                Row::new(["NextGEN", "$69", "No", ""]),
                Row::new(["Modula", "$39", "Yes", ""]).feature("privacy"),
            ],
        )
    }

    fn first_cells(state: &TableState) -> Vec<String> {
        state.ordered_rows().map(|(_, r)| r.cells[0].clone()).collect()
    }

    #[test]
    fn rows_keep_source_order_until_sorted() {
        let state = table();
        assert_eq!(first_cells(&state), ["MBA Gallery", "envira", "NextGEN", "Modula"]);
        assert_eq!(state.indicator(0), None);
    }

    #[test]
    fn first_click_sorts_ascending_case_insensitively() {
        let mut state = table();
        assert_eq!(state.sort_by("plugin"), Some(SortDirection::Asc));
        assert_eq!(first_cells(&state), ["envira", "MBA Gallery", "Modula", "NextGEN"]);
        assert_eq!(state.indicator(0), Some("sorting-asc"));
    }

    #[test]
    fn second_click_sorts_descending() {
        let mut state = table();
        state.sort_by("plugin");
        assert_eq!(state.sort_by("plugin"), Some(SortDirection::Desc));
        assert_eq!(first_cells(&state), ["NextGEN", "Modula", "MBA Gallery", "envira"]);
        assert_eq!(state.indicator(0), Some("sorting-desc"));
    }

    #[test]
    fn only_last_sorted_header_shows_indicator() {
        let mut state = table();
        state.sort_by("plugin");
        state.sort_by("price");
        assert_eq!(state.indicator(0), None);
        assert_eq!(state.indicator(1), Some("sorting-asc"));
        assert_eq!(first_cells(&state), ["Modula", "NextGEN", "MBA Gallery", "envira"]);
    }

    #[test]
    fn each_header_remembers_its_own_direction() {
        let mut state = table();
        state.sort_by("plugin");
        state.sort_by("price");
        assert_eq!(state.sort_by("plugin"), Some(SortDirection::Desc));
    }

    #[test]
    fn unknown_sort_key_is_ignored() {
        let mut state = table();
        assert_eq!(state.sort_by("rating"), None);
        assert_eq!(first_cells(&state), ["MBA Gallery", "envira", "NextGEN", "Modula"]);
    }

    #[test]
    fn filter_matches_trimmed_cell_text() {
        let mut state = table();
        state.set_filter("hipaa", "No");
        let visible: Vec<_> = state
            .ordered_rows()
            .filter(|(_, r)| state.is_visible(r))
            .map(|(_, r)| r.cells[0].clone())
            .collect();
        assert_eq!(visible, ["envira", "NextGEN"]);
    }

    #[test]
    fn all_shows_every_row() {
        let mut state = table();
        state.set_filter("hipaa", "Yes");
        state.set_filter("hipaa", SHOW_ALL);
        assert!(state.ordered_rows().all(|(_, r)| state.is_visible(r)));
    }

    #[test]
    fn filter_on_missing_category_hides_rows() {
        let mut state = table();
        state.set_filter("rating", "5");
        assert!(state.ordered_rows().all(|(_, r)| !state.is_visible(r)));
    }

    #[test]
    fn highlight_replaces_previous_feature() {
        let mut state = table();
        state.highlight("lightbox");
        state.highlight("privacy");
        let highlighted: Vec<_> = state
            .ordered_rows()
            .filter(|(_, r)| state.is_highlighted(r))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, [0, 3]);
        assert_eq!(state.highlighted(), Some("privacy"));
    }

    #[test]
    fn category_values_are_distinct_and_trimmed() {
        let state = table();
        assert_eq!(state.category_values("hipaa"), ["Yes", "No"]);
        assert!(state.category_values("nope").is_empty());
    }
}
