use serde::{Deserialize, Serialize};

use crate::utils::constants::REMOTE_PAGE_SIZE;

/// Sort direction by breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Value of the `sort` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "breed:asc",
            SortOrder::Desc => "breed:desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "A → Z",
            SortOrder::Desc => "Z → A",
        }
    }
}

/// Inputs that invalidate the result set and the cursor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub breed: String,
    pub zip_code: String,
    pub radius_miles: u32,
    pub sort: SortOrder,
}

impl SearchCriteria {
    pub fn breed_filter(&self) -> Option<&str> {
        let breed = self.breed.trim();
        (!breed.is_empty()).then_some(breed)
    }

    pub fn zip_filter(&self) -> Option<&str> {
        let zip = self.zip_code.trim();
        (!zip.is_empty()).then_some(zip)
    }

    /// ZIP + positive radius: resolve coordinates and search the area
    pub fn wants_radius_search(&self) -> bool {
        self.zip_filter().is_some() && self.radius_miles > 0
    }
}

/// Opaque next-page path (`/dogs/search?...&from=25`) handed out by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchCursor(pub String);

impl SearchCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query for `GET /dogs/search`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub size: u32,
    pub sort: SortOrder,
    pub breed: Option<String>,
    pub zip_codes: Vec<String>,
}

impl SearchQuery {
    pub fn from_criteria(criteria: &SearchCriteria, zip_codes: Vec<String>) -> Self {
        Self {
            size: REMOTE_PAGE_SIZE,
            sort: criteria.sort,
            breed: criteria.breed_filter().map(str::to_string),
            zip_codes,
        }
    }

    /// Query pairs in request order; `zipCodes` repeats once per ZIP
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("size", self.size.to_string()),
            ("sort", self.sort.as_param().to_string()),
        ];
        if let Some(breed) = &self.breed {
            pairs.push(("breeds", breed.clone()));
        }
        pairs.extend(self.zip_codes.iter().map(|zip| ("zipCodes", zip.clone())));
        pairs
    }
}

/// Response of `GET /dogs/search`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub result_ids: Vec<String>,
    #[serde(default)]
    pub next: Option<SearchCursor>,
    #[serde(default)]
    pub total: Option<u64>,
}
