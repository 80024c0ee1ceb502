pub mod interactive;
pub mod layout;
pub mod menu;
pub mod modal;
pub mod page;
pub mod palette;
pub mod parallax;

pub use interactive::run_interactive_ui;
pub use layout::{PageLayout, Rect};
pub use menu::NavMenu;
pub use modal::{FocusTarget, HelpModal, ModalControl};
pub use page::{SlidePage, render_plain};
pub use parallax::ParallaxState;
