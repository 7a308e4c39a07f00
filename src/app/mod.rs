//! Run orchestration — page fetching and the per-city scrape loop.

pub mod fetch;
pub mod pipeline;
