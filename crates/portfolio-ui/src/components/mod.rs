//! Reusable UI components
//!
//! Icons come from Font Awesome classes; the stylesheet lives in the app.

mod button;
mod icon;
mod tech_tags;
mod toast;

pub use button::*;
pub use icon::*;
pub use tech_tags::*;
pub use toast::*;
