//! View Result Contract
//!
//! Each dashboard view holds exactly one [`FetchResult`] per activation:
//! `Loading` until its single fetch completes, then `Ready` or `Error`.
//!
//! [`ResourceView`] owns that state across activations and guarantees that a
//! response arriving for an older activation never touches a newer one.

mod resource_view;
mod state;

pub use resource_view::{Activation, ResourceView};
pub use state::FetchResult;
