pub mod chart_frame;
pub mod iframe;
