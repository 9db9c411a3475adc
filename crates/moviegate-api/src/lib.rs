//! Movie data gateway library.
//!
//! Wraps the OMDb catalog API and normalizes its responses into
//! canonical movie records.

/// Movie data gateway: validation, normalization, category browsing.
pub mod gateway;

/// OMDb API client.
pub mod omdb;
