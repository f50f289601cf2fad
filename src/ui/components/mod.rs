pub mod dropdown;
pub mod filter_panel;
pub mod header;
pub mod heatmap_cell;
pub mod heatmap_grid;
pub mod toast;
pub mod tooltip;
