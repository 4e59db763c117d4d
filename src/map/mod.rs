//! Map module - Leaflet marker map rendering

mod coords;
mod popup;
mod renderer;
mod tier;

pub use coords::{coordinate_for, Coordinate, MAP_CENTER};
pub use popup::{legend_html, popup_html};
pub use renderer::{MapDocument, MapRenderer, MarkerSpec, RenderError};
pub use tier::Tier;
