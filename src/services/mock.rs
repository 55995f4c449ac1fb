//! In-memory `DogApi` for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::models::{Coordinates, Dog, GeoBoundingBox, SearchCursor, SearchPage, SearchQuery};
use crate::services::traits::DogApi;

/// Recorded call, in the order it reached the mock
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Login { name: String, email: String },
    Logout,
    Search(SearchQuery),
    Cursor(SearchCursor),
    Details(Vec<String>),
    ResolveZip(String),
    SearchZips(GeoBoundingBox),
}

pub struct MockDogApi {
    login_result: RefCell<ApiResult<bool>>,
    logout_result: RefCell<ApiResult<()>>,
    pages: RefCell<VecDeque<ApiResult<SearchPage>>>,
    dogs: RefCell<HashMap<String, Dog>>,
    details_error: RefCell<Option<ApiError>>,
    zips: RefCell<HashMap<String, Coordinates>>,
    area_zips: RefCell<Vec<String>>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockDogApi {
    pub fn new() -> Self {
        Self {
            login_result: RefCell::new(Ok(true)),
            logout_result: RefCell::new(Ok(())),
            pages: RefCell::new(VecDeque::new()),
            dogs: RefCell::new(HashMap::new()),
            details_error: RefCell::new(None),
            zips: RefCell::new(HashMap::new()),
            area_zips: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_login_result(&self, result: ApiResult<bool>) {
        *self.login_result.borrow_mut() = result;
    }

    pub fn set_logout_result(&self, result: ApiResult<()>) {
        *self.logout_result.borrow_mut() = result;
    }

    /// Queues the answer for the next search or cursor request
    pub fn push_page(&self, ids: &[&str], next: Option<&str>) {
        self.pages.borrow_mut().push_back(Ok(SearchPage {
            result_ids: ids.iter().map(|id| id.to_string()).collect(),
            next: next.map(|n| SearchCursor(n.to_string())),
            total: None,
        }));
    }

    pub fn push_page_error(&self, error: ApiError) {
        self.pages.borrow_mut().push_back(Err(error));
    }

    pub fn add_dogs(&self, dogs: impl IntoIterator<Item = Dog>) {
        let mut known = self.dogs.borrow_mut();
        for dog in dogs {
            known.insert(dog.id.clone(), dog);
        }
    }

    pub fn fail_details(&self, error: ApiError) {
        *self.details_error.borrow_mut() = Some(error);
    }

    pub fn add_zip(&self, zip_code: &str, coordinates: Coordinates) {
        self.zips.borrow_mut().insert(zip_code.to_string(), coordinates);
    }

    pub fn set_area_zips(&self, zips: &[&str]) {
        *self.area_zips.borrow_mut() = zips.iter().map(|z| z.to_string()).collect();
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    /// Id lists of every detail request
    pub fn detail_requests(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                MockCall::Details(ids) => Some(ids.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_page(&self) -> ApiResult<SearchPage> {
        self.pages.borrow_mut().pop_front().unwrap_or_else(|| Ok(SearchPage::default()))
    }
}

#[async_trait(?Send)]
impl DogApi for MockDogApi {
    async fn login(&self, name: &str, email: &str) -> ApiResult<bool> {
        self.record(MockCall::Login {
            name: name.to_string(),
            email: email.to_string(),
        });
        self.login_result.borrow().clone()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record(MockCall::Logout);
        self.logout_result.borrow().clone()
    }

    async fn fetch_search_page(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        self.record(MockCall::Search(query.clone()));
        self.next_page()
    }

    async fn fetch_search_cursor(&self, cursor: &SearchCursor) -> ApiResult<SearchPage> {
        self.record(MockCall::Cursor(cursor.clone()));
        self.next_page()
    }

    async fn fetch_details(&self, ids: &[String]) -> ApiResult<Vec<Dog>> {
        self.record(MockCall::Details(ids.to_vec()));
        if let Some(error) = self.details_error.borrow().clone() {
            return Err(error);
        }
        let known = self.dogs.borrow();
        Ok(ids.iter().filter_map(|id| known.get(id).cloned()).collect())
    }

    async fn resolve_zip(&self, zip_code: &str) -> ApiResult<Coordinates> {
        self.record(MockCall::ResolveZip(zip_code.to_string()));
        self.zips
            .borrow()
            .get(zip_code)
            .copied()
            .ok_or_else(|| ApiError::ZipNotFound {
                zip_code: zip_code.to_string(),
            })
    }

    async fn search_zips_in_radius(&self, bounding_box: &GeoBoundingBox) -> ApiResult<Vec<String>> {
        self.record(MockCall::SearchZips(*bounding_box));
        Ok(self.area_zips.borrow().clone())
    }
}

pub fn dog(id: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: format!("https://img.test/{}.jpg", id),
        name: format!("Dog {}", id),
        age: 3,
        zip_code: "10001".to_string(),
        breed: breed.to_string(),
    }
}
