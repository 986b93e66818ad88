pub mod products;
pub mod search;
pub mod ui;

pub use products::ProductState;
pub use search::{SearchState, run_search};
pub use ui::UiState;

use crate::cart::Cart;

/// The whole application state, owned in one place and passed by
/// reference. Mutations run to completion between awaits; there is no
/// shared-memory contention to lock against.
#[derive(Debug, Default)]
pub struct AppState {
    pub products: ProductState,
    pub cart: Cart,
    pub ui: UiState,
    pub search: SearchState,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }
}
