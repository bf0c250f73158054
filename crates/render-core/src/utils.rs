/// Convert a top-left-origin page y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f64, page_height: f64) -> f64 {
    page_height - y
}
