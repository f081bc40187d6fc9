//! Indaia Planner - Wedding Planning Dashboard Backend
//!
//! This crate implements the planning dashboard for a single couple:
//! budget line items, guest RSVPs, the curated showcase catalog, and a
//! conversational concierge backed by Google's Gemini API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
