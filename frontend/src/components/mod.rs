pub mod chart_canvas;
pub mod country_search;
pub mod density_table;
pub mod distribution_map;
pub mod footer;
pub mod market_gaps;
pub mod nav;
pub mod role_breakdown;
pub mod toast;
