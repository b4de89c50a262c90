pub mod event_apply;
pub mod selection_session;

pub use selection_session::*;
