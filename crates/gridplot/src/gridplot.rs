pub type Color = String;

#[derive(Debug, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub color: Color,
    pub label: Option<String>,
    pub outline: Option<Color>,
}

#[derive(Debug, PartialEq)]
pub struct Tick {
    // Fraction of the bar height, 0.0 = bottom, 1.0 = top
    pub frac: f64,
    pub label: String,
}

#[derive(Debug)]
pub struct ColorBar {
    // Gradient samples ordered bottom to top
    pub colors: Vec<Color>,
    pub ticks: Vec<Tick>,
}

#[derive(Debug)]
pub struct GridPlot {
    // Column labels are drawn along the top edge, row labels along the left
    pub col_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub cells: Vec<Cell>,
    pub colorbar: ColorBar,
}
