/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: plotters::style::RGBAColor,
    pub text_color: plotters::style::RGBAColor,
    pub grid_color: plotters::style::RGBAColor,
    pub major_grid_color: plotters::style::RGBAColor,
    pub axis_color: plotters::style::RGBAColor,
    pub line_color: plotters::style::RGBColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: plotters::style::RGBAColor(0, 0, 0, 0.94),
            text_color: plotters::style::RGBAColor(255, 255, 255, 0.8),
            grid_color: plotters::style::RGBAColor(255, 255, 255, 0.15),
            major_grid_color: plotters::style::RGBAColor(255, 255, 255, 0.25),
            axis_color: plotters::style::RGBAColor(255, 255, 255, 0.8),
            // Light sky blue
            line_color: plotters::style::RGBColor(135, 206, 250),
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub line_width: u32,
    pub marker_size: u32,
    pub font_size: u32,
    pub title_font_size: u32,
    pub margin: u32,
    pub x_label_area_size: u32,
    pub y_label_area_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            marker_size: 4,
            font_size: 15,
            title_font_size: 30,
            margin: 10,
            // Rotated month labels need the extra room below the plot
            x_label_area_size: 70,
            y_label_area_size: 50,
        }
    }
}
