pub mod dashboard_state;
pub mod heatmap_state;
