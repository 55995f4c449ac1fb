pub mod search_viewmodel;
pub mod session_viewmodel;

pub use search_viewmodel::SearchViewModel;
pub use session_viewmodel::SessionViewModel;
