//! Charts module - chart derivation and rendering

mod derive;
mod plotter;

pub use derive::{
    payload_scatter, success_breakdown, PayloadRange, PieSlice, PieSpec, ScatterSpec,
    SiteSelection,
};
pub use plotter::ChartPlotter;
