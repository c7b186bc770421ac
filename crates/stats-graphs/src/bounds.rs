//! Default chart layout bounds.

use serde::{Deserialize, Serialize};

/// Outer size and margins of a chart, in pixels.
///
/// The drawable area is the box inset by the margins. Nothing enforces that
/// the margins fit inside the outer size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphBounds {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Space left of the plot, used by the y axis labels.
    pub margin_left: f64,
    /// Space right of the plot, used by a secondary y axis.
    pub margin_right: f64,
    /// Space above the plot.
    pub margin_top: f64,
    /// Space below the plot, used by the x axis labels.
    pub margin_bottom: f64,
}

/// Bounds used by every chart unless it overrides them.
pub const fn default_graph_bounds() -> GraphBounds {
    GraphBounds {
        width: 600.0,
        height: 250.0,
        margin_left: 70.0,
        margin_right: 70.0,
        margin_top: 20.0,
        margin_bottom: 25.0,
    }
}

impl Default for GraphBounds {
    fn default() -> Self {
        default_graph_bounds()
    }
}

impl GraphBounds {
    /// Width of the drawable area. Negative if the margins overlap.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height of the drawable area. Negative if the margins overlap.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}
