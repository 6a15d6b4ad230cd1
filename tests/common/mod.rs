//! Common test utilities for choropleth.
//!
//! This module provides fixtures, a recording surface and assertion helpers
//! shared by the integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod image_utils;
pub mod recording_surface;
pub mod test_data;
