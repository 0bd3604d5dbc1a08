//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled output through
//! composable rendering components, with theme support and query match
//! highlighting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`pagination`]: Page strip windowing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod pagination;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use pagination::{page_window, PageSlot};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, FooterInfo, HeaderInfo, PaginationInfo, ResultsBody, ResultsView,
    SearchBarInfo, UIViewModel,
};
