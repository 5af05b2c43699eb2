//! Shared types for the BigONE spot REST API
//!
//! This crate provides the domain enums and documented exchange limits used
//! across the BigONE SDK. It has minimal dependencies and can be used
//! independently.
//!
//! # Key Types
//!
//! - [`OrderSide`], [`OrderState`], [`OrderStateFilter`] - order enums
//! - [`OrderType`], [`StopOperator`] - order placement enums
//! - [`CandlePeriod`] - candlestick periods
//! - [`AccountType`], [`FundingState`] - account and funding enums
//! - [`limits`] - documented rate limits (reference only, not enforced)

pub mod enums;
pub mod limits;

// Re-export commonly used types
pub use enums::*;
pub use limits::*;
