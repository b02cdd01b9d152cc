use crate::freq::alphabet::AMINO_ACIDS;
use crate::freq::FrequencyTable;
use crate::heatmap::color::{Color, FreqScale};
use crate::heatmap::highlight::HighlightSpec;
use crate::utils::Result;
use gridplot::{Cell, ColorBar, GridPlot, Tick};
use itertools::Itertools;

const NUM_BAR_SAMPLES: usize = 64;

/// Assemble the heatmap for the requested positions: amino acids run down
/// the vertical axis, positions across the horizontal axis in caller order
/// with labels along the top edge.
pub fn build_heatmap(
    table: &FrequencyTable,
    positions: &[u32],
    highlights: &HighlightSpec,
) -> Result<GridPlot> {
    if positions.is_empty() {
        return Err("No positions selected for plotting".to_string());
    }

    let selected = positions
        .iter()
        .map(|&position| {
            table
                .get(position)
                .map(|freqs| (position, freqs))
                .ok_or_else(|| {
                    format!("Position {} is not present in the frequency table", position)
                })
        })
        .collect::<Result<Vec<_>>>()?;

    // The scale spans the plotted subset, not the whole table
    let min_nonzero = selected
        .iter()
        .flat_map(|(_, freqs)| freqs.iter())
        .copied()
        .filter(|&freq| freq > 0.0)
        .fold(f64::INFINITY, f64::min);
    let scale = FreqScale::new(if min_nonzero.is_finite() {
        min_nonzero
    } else {
        1.0
    });

    let mut cells = Vec::new();
    for (col, (position, freqs)) in selected.iter().enumerate() {
        for (row, (&symbol, &freq)) in AMINO_ACIDS.iter().zip(freqs.iter()).enumerate() {
            let label = (freq > 0.0).then(|| format!("{:.2}", freq));
            let outline = highlights
                .contains(*position, symbol)
                .then(|| Color::Red.to_string());
            cells.push(Cell {
                row: row as u32,
                col: col as u32,
                color: scale.color(freq).to_string(),
                label,
                outline,
            });
        }
    }

    let colorbar = ColorBar {
        colors: scale
            .samples(NUM_BAR_SAMPLES)
            .iter()
            .map(|color| color.to_string())
            .collect(),
        ticks: scale
            .ticks()
            .into_iter()
            .map(|(frac, freq)| Tick {
                frac,
                label: format!("{:.2}", freq),
            })
            .collect(),
    };

    Ok(GridPlot {
        col_labels: positions.iter().map(|position| position.to_string()).collect_vec(),
        row_labels: AMINO_ACIDS
            .iter()
            .map(|&symbol| (symbol as char).to_string())
            .collect_vec(),
        cells,
        colorbar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::alphabet::{symbol_index, NUM_SYMBOLS};

    fn test_table() -> FrequencyTable {
        let mut row2 = [0.0; NUM_SYMBOLS];
        row2[symbol_index(b'C').unwrap()] = 0.25;
        let mut row3 = [0.0; NUM_SYMBOLS];
        row3[symbol_index(b'C').unwrap()] = 1.0;
        row3[symbol_index(b'Y').unwrap()] = 0.5;
        FrequencyTable::from_rows(vec![[0.0; NUM_SYMBOLS], row2, row3])
    }

    fn find_cell<'a>(plot: &'a GridPlot, row: u32, col: u32) -> &'a Cell {
        plot.cells
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
            .unwrap()
    }

    #[test]
    fn columns_follow_caller_order() {
        let plot = build_heatmap(&test_table(), &[3, 1], &HighlightSpec::default()).unwrap();
        assert_eq!(plot.col_labels, vec!["3", "1"]);
        assert_eq!(plot.row_labels.len(), NUM_SYMBOLS);
        assert_eq!(plot.cells.len(), 2 * NUM_SYMBOLS);
    }

    #[test]
    fn scale_spans_only_the_selected_subset() {
        // Position 2 (frequency 0.25) is not selected, so the scale minimum
        // is position 3's 0.5
        let plot = build_heatmap(&test_table(), &[3, 1], &HighlightSpec::default()).unwrap();
        let labels: Vec<&str> = plot
            .colorbar
            .ticks
            .iter()
            .map(|tick| tick.label.as_str())
            .collect();
        assert_eq!(labels, vec!["0.50", "0.75", "1.00"]);
    }

    #[test]
    fn non_zero_cells_are_annotated() {
        let plot = build_heatmap(&test_table(), &[3, 1], &HighlightSpec::default()).unwrap();
        let y_row = symbol_index(b'Y').unwrap() as u32;
        let c_row = symbol_index(b'C').unwrap() as u32;
        assert_eq!(find_cell(&plot, y_row, 0).label.as_deref(), Some("0.50"));
        assert_eq!(find_cell(&plot, c_row, 0).label.as_deref(), Some("1.00"));
        assert_eq!(find_cell(&plot, y_row, 1).label, None);
    }

    #[test]
    fn zero_cells_are_gray_and_extremes_hit_the_endpoints() {
        let plot = build_heatmap(&test_table(), &[3, 1], &HighlightSpec::default()).unwrap();
        let c_row = symbol_index(b'C').unwrap() as u32;
        let y_row = symbol_index(b'Y').unwrap() as u32;
        assert_eq!(find_cell(&plot, 0, 1).color, "#BABABA");
        assert_eq!(find_cell(&plot, c_row, 0).color, "#1383C6");
        assert_eq!(find_cell(&plot, y_row, 0).color, "#BABABA");
    }

    #[test]
    fn highlighted_cells_get_an_outline() {
        let highlights = HighlightSpec::from_string("3:Y").unwrap();
        let plot = build_heatmap(&test_table(), &[3, 1], &highlights).unwrap();
        let y_row = symbol_index(b'Y').unwrap() as u32;
        assert_eq!(
            find_cell(&plot, y_row, 0).outline.as_deref(),
            Some("#E3371E")
        );
        assert_eq!(find_cell(&plot, y_row, 1).outline, None);
    }

    #[test]
    fn missing_position_is_reported_by_name() {
        let result = build_heatmap(&test_table(), &[1, 9], &HighlightSpec::default());
        assert_eq!(
            result.unwrap_err(),
            "Position 9 is not present in the frequency table"
        );
    }

    #[test]
    fn empty_position_list_is_a_configuration_error() {
        let result = build_heatmap(&test_table(), &[], &HighlightSpec::default());
        assert_eq!(result.unwrap_err(), "No positions selected for plotting");
    }

    #[test]
    fn all_zero_subset_renders_without_annotations() {
        let plot = build_heatmap(&test_table(), &[1], &HighlightSpec::default()).unwrap();
        assert!(plot.cells.iter().all(|cell| cell.label.is_none()));
        assert!(plot.cells.iter().all(|cell| cell.color == "#BABABA"));
    }
}
