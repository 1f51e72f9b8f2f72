//! Order details form.
//!
//! MVVM split in the usual shape:
//! - view_model.rs: draft state, validation, submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
