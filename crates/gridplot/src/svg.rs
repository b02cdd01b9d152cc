use crate::gridplot::{Cell, ColorBar, GridPlot};
use std::fmt::Write;
use std::path::Path;

const CELL_SIDE: f64 = 26.0;
const PADDING: f64 = 12.0;
const TOP_MARGIN: f64 = 26.0;
const LEFT_MARGIN: f64 = 26.0;
const BAR_GAP: f64 = 22.0;
const BAR_WIDTH: f64 = 14.0;
const BAR_TEXT_SPACE: f64 = 46.0;
const LABEL_PAD: f64 = 6.0;
const TICK_LEN: f64 = 4.0;

pub fn generate_string(plot: &GridPlot) -> String {
    let mut generator = Generator::new();
    generator.generate(plot);
    generator.out
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator {
    out: String,
    origin: (f64, f64),
}

impl Generator {
    fn new() -> Self {
        Self {
            out: String::new(),
            origin: (PADDING + LEFT_MARGIN, PADDING + TOP_MARGIN),
        }
    }

    fn generate(&mut self, plot: &GridPlot) {
        let (width, height) = self.get_dimensions(plot);
        self.start_svg(width, height);
        self.add_background();
        self.plot_col_labels(plot);
        self.plot_row_labels(plot);
        for cell in &plot.cells {
            self.plot_cell(cell);
        }
        // Outlines go on top of every fill
        for cell in &plot.cells {
            self.plot_outline(cell);
        }
        self.plot_colorbar(plot);
        self.end_svg();
    }

    fn plot_col_labels(&mut self, plot: &GridPlot) {
        let y = self.origin.1 - LABEL_PAD;
        for (index, label) in plot.col_labels.iter().enumerate() {
            let x = self.origin.0 + (index as f64 + 0.5) * CELL_SIDE;
            self.add_text(x, y, label, 12.0, "middle", "auto");
        }
    }

    fn plot_row_labels(&mut self, plot: &GridPlot) {
        let x = self.origin.0 - LABEL_PAD;
        for (index, label) in plot.row_labels.iter().enumerate() {
            let y = self.origin.1 + (index as f64 + 0.5) * CELL_SIDE;
            self.add_text(x, y, label, 12.0, "end", "central");
        }
    }

    fn plot_cell(&mut self, cell: &Cell) {
        let x = self.origin.0 + cell.col as f64 * CELL_SIDE;
        let y = self.origin.1 + cell.row as f64 * CELL_SIDE;
        self.add_rect(x, y, CELL_SIDE, CELL_SIDE, &cell.color);
        if let Some(label) = &cell.label {
            let cx = x + CELL_SIDE / 2.0;
            let cy = y + CELL_SIDE / 2.0;
            self.add_text(cx, cy, label, 9.0, "middle", "central");
        }
    }

    fn plot_outline(&mut self, cell: &Cell) {
        if let Some(color) = &cell.outline {
            let x = self.origin.0 + cell.col as f64 * CELL_SIDE;
            let y = self.origin.1 + cell.row as f64 * CELL_SIDE;
            let pos = format!("x=\"{}\" y=\"{}\"", x, y);
            let dims = format!("width=\"{}\" height=\"{}\"", CELL_SIDE, CELL_SIDE);
            let style = format!(
                "stroke=\"{}\" stroke-width=\"2.5\" fill=\"transparent\"",
                color
            );
            writeln!(self.out, "<rect {} {} {} />", pos, dims, style).unwrap();
        }
    }

    fn plot_colorbar(&mut self, plot: &GridPlot) {
        let colorbar = &plot.colorbar;
        let num_samples = colorbar.colors.len();
        if num_samples == 0 {
            return;
        }

        let bar_x = self.origin.0 + plot.col_labels.len() as f64 * CELL_SIDE + BAR_GAP;
        let bar_height = plot.row_labels.len() as f64 * CELL_SIDE;

        // Samples are ordered bottom to top
        let step = bar_height / num_samples as f64;
        for (index, color) in colorbar.colors.iter().enumerate() {
            let y = self.origin.1 + bar_height - (index as f64 + 1.0) * step;
            self.add_rect(bar_x, y, BAR_WIDTH, step, color);
        }

        for tick in &colorbar.ticks {
            let y = self.origin.1 + (1.0 - tick.frac) * bar_height;
            let x1 = bar_x + BAR_WIDTH;
            let x1y1 = format!("x1=\"{}\" y1=\"{}\"", x1, y);
            let x2y2 = format!("x2=\"{}\" y2=\"{}\"", x1 + TICK_LEN, y);
            writeln!(
                self.out,
                "<line {} {} stroke=\"#000000\" stroke-width=\"1\" />",
                x1y1, x2y2
            )
            .unwrap();
            self.add_text(x1 + TICK_LEN + 3.0, y, &tick.label, 10.0, "start", "central");
        }
    }

    fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dims = format!("width=\"{}\" height=\"{}\"", width, height);
        let style = format!("fill=\"{}\" stroke=\"{}\" stroke-width=\"0\"", color, color);
        writeln!(self.out, "<rect {} {} {} />", pos, dims, style).unwrap();
    }

    fn add_text(&mut self, x: f64, y: f64, text: &str, size: f64, anchor: &str, baseline: &str) {
        let point = format!("x=\"{}\" y=\"{}\"", x, y);
        let font = format!("font-family=\"monospace\" font-size=\"{}px\"", size);
        let align = format!(
            "text-anchor=\"{}\" dominant-baseline=\"{}\"",
            anchor, baseline
        );
        writeln!(
            self.out,
            "<text {} {} {} >{}</text>",
            point, font, align, text
        )
        .unwrap();
    }

    fn get_dimensions(&self, plot: &GridPlot) -> (f64, f64) {
        let grid_width = plot.col_labels.len() as f64 * CELL_SIDE;
        let grid_height = plot.row_labels.len() as f64 * CELL_SIDE;
        let width = self.origin.0 + grid_width + BAR_GAP + BAR_WIDTH + BAR_TEXT_SPACE + PADDING;
        let height = self.origin.1 + grid_height + PADDING;
        (width, height)
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        writeln!(self.out, r#"<?xml version="1.0"?>"#).unwrap();
        write!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#
        )
        .unwrap();
        writeln!(self.out, "width=\"{}\" height=\"{}\">", width, height).unwrap();
    }

    fn end_svg(&mut self) {
        writeln!(self.out, "</svg>").unwrap();
    }

    fn add_background(&mut self) {
        writeln!(
            self.out,
            r#"<rect width="100%" height="100%" fill="white"/>"#
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gridplot::Tick;

    fn test_plot() -> GridPlot {
        let cells = vec![
            Cell {
                row: 0,
                col: 0,
                color: "#BABABA".to_string(),
                label: None,
                outline: None,
            },
            Cell {
                row: 0,
                col: 1,
                color: "#1383C6".to_string(),
                label: Some("1.00".to_string()),
                outline: None,
            },
            Cell {
                row: 1,
                col: 0,
                color: "#8AA3B8".to_string(),
                label: Some("0.50".to_string()),
                outline: Some("#E3371E".to_string()),
            },
            Cell {
                row: 1,
                col: 1,
                color: "#BABABA".to_string(),
                label: None,
                outline: None,
            },
        ];
        GridPlot {
            col_labels: vec!["12".to_string(), "45".to_string()],
            row_labels: vec!["A".to_string(), "C".to_string()],
            cells,
            colorbar: ColorBar {
                colors: vec!["#BABABA".to_string(), "#1383C6".to_string()],
                ticks: vec![
                    Tick {
                        frac: 0.0,
                        label: "0.25".to_string(),
                    },
                    Tick {
                        frac: 0.5,
                        label: "0.62".to_string(),
                    },
                    Tick {
                        frac: 1.0,
                        label: "1.00".to_string(),
                    },
                ],
            },
        }
    }

    #[test]
    fn svg_contains_one_rect_per_cell_plus_chrome() {
        let svg = generate_string(&test_plot());
        // Background + 4 cells + 1 outline + 2 colorbar samples
        assert_eq!(svg.matches("<rect").count(), 8);
        assert!(svg.starts_with(r#"<?xml version="1.0"?>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn svg_annotates_only_labeled_cells() {
        let svg = generate_string(&test_plot());
        assert!(svg.contains(">1.00</text>"));
        assert!(svg.contains(">0.50</text>"));
        // Axis labels (2 + 2), cell labels (2), tick labels (3)
        assert_eq!(svg.matches("<text").count(), 9);
    }

    #[test]
    fn svg_outlines_marked_cells() {
        let svg = generate_string(&test_plot());
        assert_eq!(svg.matches("fill=\"transparent\"").count(), 1);
        assert!(svg.contains("stroke=\"#E3371E\""));
    }

    #[test]
    fn svg_draws_three_colorbar_ticks() {
        let svg = generate_string(&test_plot());
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains(">0.25</text>"));
        assert!(svg.contains(">0.62</text>"));
    }

    #[test]
    fn render_from_string_writes_file() {
        let svg = generate_string(&test_plot());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        render_from_string(&svg, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);
    }
}
