//! Portfolio UI Components
//!
//! Presentational Dioxus components shared by the portfolio page. They hold
//! no page state; callers pass data in and receive events back.
//!
//! The look follows the page palette:
//! - **Saddle brown (#8b4513)**: headings and borders
//! - **Chocolate (#d2691e)**: accents, focus rings, active links
//! - **Cream (#fdf8f3)**: backgrounds

pub mod components;

pub use components::*;
