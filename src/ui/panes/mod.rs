//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`pseudocode`]: the algorithm listing with the current line indicator
//! - [`state`]: the current step's payload, drawn through [`StateView`]
//! - [`variables`]: the step tag and its variable bindings
//! - [`narration`]: step messages up to the current step
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports a single `render_*` function. Panes that scroll take
//! their offset by `&mut` and clamp it to the content they draw.
//!
//! [`StateView`]: crate::ui::view::StateView

pub mod narration;
pub mod pseudocode;
pub mod state;
pub mod status;
pub mod variables;

pub use narration::render_narration_pane;
pub use pseudocode::{render_pseudocode_pane, PseudocodeScrollState};
pub use state::render_state_pane;
pub use status::render_status_bar;
pub use variables::render_variables_pane;
