//! Dopair - Subscription-gated dashboard backend
//!
//! This crate implements the user access-state model shared by the dashboard
//! guard and billing webhook processors, its document-backed storage, and the
//! HTTP surface (CORS test endpoint and caller profile routes).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
