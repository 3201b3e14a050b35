use crate::views::Bar;

pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PopularityView {
    /// Popularity score of the selected title, when it is in the table.
    pub selected_popularity: Option<f64>,
    pub bars: Vec<Bar>,
}

/// Top ten of `rows` by popularity, with the selected title appended when it
/// did not make the cut. Equal scores keep feed order.
pub fn popularity_view(rows: &[(&str, f64)], selected: &str) -> PopularityView {
    let mut ranked: Vec<&(&str, f64)> = rows.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(TOP_N);

    let selected_row = rows.iter().find(|(name, _)| *name == selected);

    if !ranked.iter().any(|(name, _)| *name == selected) {
        if let Some(row) = selected_row {
            ranked.push(row);
        }
    }

    let bars = ranked
        .into_iter()
        .map(|(name, popularity)| Bar {
            label: name.to_string(),
            value: *popularity,
            highlighted: *name == selected,
        })
        .collect();

    PopularityView {
        selected_popularity: selected_row.map(|(_, p)| *p),
        bars,
    }
}
