//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: cursor over a trace, keyboard event loop, pane focus, autoplay
//! - **[`panes`]**: stateless render functions for each visible pane (pseudocode,
//!   state, variables, narration, status bar)
//! - **[`view`]**: how each algorithm's state is drawn inside the state pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a finished
//! [`Trace`] and its pseudocode, then call [`App::run`] to start the event loop.
//! The viewer never mutates the trace; stepping only moves a cursor.
//!
//! [`Trace`]: crate::trace::Trace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod view;

pub use app::App;
pub use view::StateView;
