pub mod app;
pub mod dog_table;
pub mod login_screen;
pub mod pagination;
pub mod search_page;
pub mod search_toolbar;

pub use app::App;
pub use dog_table::DogTable;
pub use login_screen::LoginScreen;
pub use pagination::Pagination;
pub use search_page::SearchPage;
pub use search_toolbar::SearchToolbar;
