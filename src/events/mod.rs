pub mod keyboard;
pub mod panel;
pub mod pointer;
pub mod window;

pub use keyboard::wire_panel_toggle_h;
pub use panel::wire_color_picker;
pub use pointer::wire_pointer_move;
pub use window::{wire_pagehide, wire_window_handlers, WindowWiring};
