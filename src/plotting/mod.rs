mod chart;
mod styles;

pub use chart::{render_chart, render_chart_to_bytes, CHART_TITLE};
pub use styles::{ChartStyle, ChartTheme};
