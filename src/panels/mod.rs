//! The editor shell around the canvas: toolbar, layer list, property
//! inspector and the floating preview window. Panels are free
//! functions over the store and hold no state of their own.

mod layers;
mod preview;
mod properties;
mod toolbar;

pub use layers::layers_panel;
pub use preview::preview_window;
pub use properties::properties_panel;
pub use toolbar::toolbar;
