//! CardMarket - Knowledge-Product Marketplace Backend
//!
//! Sellers publish markdown "cards", buyers acquire them for free, and a
//! trust layer (reviews, admin-verified certifications, seller approval)
//! builds credibility. The publication gate enforces structural completeness
//! before a card can move from draft to published.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
