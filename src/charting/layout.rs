/// Chart surface dimensions and padding, in viewBox units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    /// Floor for bar heights so zero/near-zero months stay visible
    pub min_bar_height: f64,
    /// Horizontal gap between adjacent bars
    pub bar_gap: f64,
}

/// Inner padding between the chart surface and the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 180.0,
            padding: Padding {
                left: 10.0,
                right: 10.0,
                top: 6.0,
                bottom: 30.0,
            },
            min_bar_height: 4.0,
            bar_gap: 6.0,
        }
    }
}

impl ChartDimensions {
    /// Horizontal extent available to data points.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }

    /// Vertical extent available to data points.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding.top).max(0.0)
    }
}
