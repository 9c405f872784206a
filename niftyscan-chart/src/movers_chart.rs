//! Movers chart widget - gainers vs losers by percentage change.
//!
//! Two bar series on one categorical x-axis (one slot per symbol, first seen
//! first). Gainers use the positive colour, losers the negative one. A symbol
//! that appears in both series shares its slot.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Paragraph, Widget},
};

use niftyscan_core::MoverBar;

use crate::theme::Theme;

pub const TITLE: &str = "Top 5 Gainers and Losers of the Day";
pub const GAINERS_LABEL: &str = "Top 5 Gainers";
pub const LOSERS_LABEL: &str = "Top 5 Losers";
pub const X_TITLE: &str = "Stock";
pub const Y_TITLE: &str = "% Change";

#[derive(Clone, Copy)]
pub struct MoversChart<'a> {
    gainers: &'a [MoverBar],
    losers: &'a [MoverBar],
    theme: &'a Theme,
}

impl<'a> MoversChart<'a> {
    pub fn new(gainers: &'a [MoverBar], losers: &'a [MoverBar], theme: &'a Theme) -> Self {
        Self {
            gainers,
            losers,
            theme,
        }
    }

    /// Distinct symbols in slot order: gainers first, then losers not already seen.
    pub fn categories(&self) -> Vec<&'a str> {
        let mut categories: Vec<&'a str> = Vec::new();
        for bar in self.gainers.iter().chain(self.losers) {
            if !categories.contains(&bar.symbol.as_str()) {
                categories.push(bar.symbol.as_str());
            }
        }
        categories
    }

    /// Y range covering every bar and zero, padded by 10%.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self
            .gainers
            .iter()
            .chain(self.losers)
            .map(|b| b.p_change)
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let range = hi - lo;
        let pad = if range > 0.0 { range * 0.1 } else { 1.0 };
        [lo - pad, hi + pad]
    }

    fn points(bars: &[MoverBar], categories: &[&str]) -> Vec<(f64, f64)> {
        bars.iter()
            .filter_map(|bar| {
                categories
                    .iter()
                    .position(|c| *c == bar.symbol)
                    .map(|slot| (slot as f64, bar.p_change))
            })
            .collect()
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Line::styled(format!(" {TITLE} [No Data] "), self.theme.title()))
            .border_style(self.theme.axis());
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::styled("No gainers or losers to plot.", self.theme.axis()))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for MoversChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.gainers.is_empty() && self.losers.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let categories = self.categories();
        let gainer_points = Self::points(self.gainers, &categories);
        let loser_points = Self::points(self.losers, &categories);

        // Axis labels are spread evenly from the first bound to the last, so
        // slot i lines up with label i when the bounds are [0, n - 1].
        let mut x_labels: Vec<Span> = categories
            .iter()
            .map(|c| Span::styled(c.to_string(), self.theme.label()))
            .collect();
        if x_labels.len() == 1 {
            x_labels.push(Span::raw(""));
        }
        let x_max = (categories.len().saturating_sub(1) as f64).max(1.0);

        let [y_min, y_max] = self.y_bounds();
        let y_labels = vec![
            Span::styled(format!("{y_min:.1}"), self.theme.axis()),
            Span::styled(format!("{:.1}", (y_min + y_max) / 2.0), self.theme.axis()),
            Span::styled(format!("{y_max:.1}"), self.theme.axis()),
        ];

        let datasets = vec![
            Dataset::default()
                .name(GAINERS_LABEL)
                .marker(Marker::Block)
                .graph_type(GraphType::Bar)
                .style(self.theme.gainer)
                .data(&gainer_points),
            Dataset::default()
                .name(LOSERS_LABEL)
                .marker(Marker::Block)
                .graph_type(GraphType::Bar)
                .style(self.theme.loser)
                .data(&loser_points),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .title(Line::styled(format!(" {TITLE} "), self.theme.title()))
                    .title_bottom(Line::styled(" q / Esc / Enter to close ", self.theme.axis()))
                    .border_style(self.theme.axis()),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(X_TITLE, self.theme.axis()))
                    .style(self.theme.axis())
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .labels_alignment(Alignment::Center),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(Y_TITLE, self.theme.axis()))
                    .style(self.theme.axis())
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        chart.render(area, buf);
    }
}
