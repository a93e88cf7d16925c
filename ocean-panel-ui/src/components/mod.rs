//! Reusable Dioxus RSX components for the 3D model panel.

mod combo_box;
mod error_display;
mod loading_spinner;
mod model_3d_panel;
mod panel_frame;
mod plot_viewport;
mod selection_row;

pub use combo_box::ComboBox;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use model_3d_panel::Model3DPanel;
pub use panel_frame::PanelFrame;
pub use plot_viewport::PlotViewport;
pub use selection_row::SelectionRow;
