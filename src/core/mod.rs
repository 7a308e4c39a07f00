//! Core scraping logic – cities, HTML extraction, record building and output.
//!
//! Nothing in this module touches the network; pages come in as strings.

pub mod city;
pub mod listing;
pub mod output;
pub mod placeholder;
pub mod rating;
pub mod record;
