//! iced-based picker window.

#[cfg(feature = "iced-ui")]
pub mod app;
#[cfg(feature = "iced-ui")]
pub mod style;
#[cfg(feature = "iced-ui")]
pub mod theme;

#[cfg(feature = "iced-ui")]
pub use app::MojiApp;
