//! Data module - launch record types and CSV loading

mod dataset;
mod loader;

pub use dataset::{
    LaunchDataset, LaunchRecord, Outcome, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
    PAYLOAD_SLIDER_STEP,
};
pub use loader::{LaunchDataLoader, LoaderError};
