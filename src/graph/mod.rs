//! Microsoft Graph proxy: resource projections, the Graph client, and
//! per-resource services.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
