//! Generic resource-panel machinery: one parameterized controller for the
//! fetch / filter / paginate / modal-edit cycle every page goes through.
//!
//! The pure pieces (cursor, snapshot state, form lifecycle, request tags)
//! live in their own modules and are unit-tested on the host; `panel`
//! wires them to signals and the gateway.

pub mod filters;
pub mod form;
pub mod pagination;
pub mod panel;
pub mod seq;
pub mod state;

pub use form::{FormMode, FormState};
pub use pagination::PageCursor;
pub use panel::Panel;
pub use state::{no_filter, FilterFn, PagingMode, ResourceState};
