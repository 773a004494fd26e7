//! The persistent chrome around the content region: navigation, footer,
//! preloader overlay and the listeners that drive them.

pub mod footer;
pub mod interactions;
pub mod nav;
pub mod preloader;
