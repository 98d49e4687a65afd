// Example: member photo grid with a trailing partial row.
use windowing::{GridConfig, GridViewport, VirtualGrid};

fn main() {
    let config = GridConfig::new(200, 200, 800)
        .expect("non-zero cell size")
        .with_overscan(1, 0);
    let mut grid = VirtualGrid::new(config, 10);
    grid.set_viewport(GridViewport::new(0, 0, 800, 400));

    println!(
        "columns_per_row={} rows={} spacer={}x{}",
        grid.columns_per_row(),
        grid.rows_count(),
        grid.total_width(),
        grid.total_height()
    );
    grid.for_each_visible_cell(|c| {
        println!("cell #{:>2} at row {} col {} -> ({}, {})", c.index, c.row, c.col, c.left, c.top);
    });
}
