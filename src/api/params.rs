use crate::error::{CatApiError, Result};
use crate::models::{CategoryName, FavouriteAction, ImageSize, ImageType};

/// Ordered query pairs, without the API key.
pub type Query = Vec<(&'static str, String)>;

pub const MAX_RESULTS_PER_PAGE: u32 = 100;
pub const MAX_TYPES: usize = 3;
pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 10;

/// Empty strings count as unset.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_opt(query: &mut Query, key: &'static str, value: &Option<String>) {
    if let Some(v) = present(value) {
        query.push((key, v.to_string()));
    }
}

/// Options for `images/get`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetImageParams {
    /// Returns exactly this image; `results_per_page` must then be 1 or unset.
    pub image_id: Option<String>,
    /// Comma separated formats, e.g. `"png,gif"`. Sent as `type`.
    pub image_type: Option<String>,
    pub results_per_page: Option<u32>,
    pub category: Option<String>,
    pub size: Option<String>,
    /// Includes votes and favourites stored under this sub_id in the result.
    pub sub_id: Option<String>,
}

impl GetImageParams {
    pub fn to_query(&self) -> Result<Query> {
        if let Some(n) = self.results_per_page {
            if !(1..=MAX_RESULTS_PER_PAGE).contains(&n) {
                return Err(CatApiError::Range(format!(
                    "results_per_page value ({}) outside of acceptable range (1 - {})",
                    n, MAX_RESULTS_PER_PAGE
                )));
            }
        }

        let image_id = present(&self.image_id);
        if image_id.is_some() && self.results_per_page.unwrap_or(1) > 1 {
            return Err(CatApiError::Invalid(
                "image_id and results_per_page are set but results_per_page is greater than 1"
                    .to_string(),
            ));
        }

        let types = present(&self.image_type).map(parse_types).transpose()?;
        let category = present(&self.category)
            .map(str::parse::<CategoryName>)
            .transpose()?;
        let size = present(&self.size).map(str::parse::<ImageSize>).transpose()?;

        let mut query = Query::new();
        if let Some(id) = image_id {
            query.push(("image_id", id.to_string()));
        }
        if let Some(types) = types {
            let joined = types.iter().map(ImageType::as_str).collect::<Vec<_>>().join(",");
            query.push(("type", joined));
        }
        if let Some(n) = self.results_per_page {
            query.push(("results_per_page", n.to_string()));
        }
        if let Some(category) = category {
            query.push(("category", category.as_str().to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.as_str().to_string()));
        }
        push_opt(&mut query, "sub_id", &self.sub_id);
        Ok(query)
    }
}

/// Split a comma separated type list, ignoring whitespace.
pub fn parse_types(raw: &str) -> Result<Vec<ImageType>> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || CatApiError::Invalid(format!("type: '{}' is invalid", compact));

    let parts: Vec<&str> = compact.split(',').collect();
    if parts.len() > MAX_TYPES {
        return Err(invalid());
    }

    parts
        .into_iter()
        .map(|part| part.parse::<ImageType>().map_err(|_| invalid()))
        .collect()
}

/// Options for `images/vote`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteParams {
    pub image_id: Option<String>,
    /// 1 (bad) to 10 (good).
    pub score: Option<u32>,
    pub sub_id: Option<String>,
}

impl VoteParams {
    pub fn new(image_id: impl Into<String>, score: u32) -> Self {
        Self {
            image_id: Some(image_id.into()),
            score: Some(score),
            sub_id: None,
        }
    }

    pub fn to_query(&self) -> Result<Query> {
        if let Some(score) = self.score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(CatApiError::Range(format!(
                    "score value ({}) outside of acceptable range ({} - {})",
                    score, MIN_SCORE, MAX_SCORE
                )));
            }
        }

        let (Some(image_id), Some(score)) = (present(&self.image_id), self.score) else {
            return Err(CatApiError::Invalid(
                "Not all required values (image_id & score) were set".to_string(),
            ));
        };

        let mut query = vec![("image_id", image_id.to_string()), ("score", score.to_string())];
        push_opt(&mut query, "sub_id", &self.sub_id);
        Ok(query)
    }
}

/// Options shared by `images/getvotes` and `images/getfavourites`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubIdParams {
    pub sub_id: Option<String>,
}

impl SubIdParams {
    pub fn new(sub_id: impl Into<String>) -> Self {
        Self {
            sub_id: Some(sub_id.into()),
        }
    }

    pub fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        push_opt(&mut query, "sub_id", &self.sub_id);
        Ok(query)
    }
}

/// Options for `images/favourite`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavouriteParams {
    pub image_id: Option<String>,
    /// `add` (the service default) or `remove`.
    pub action: Option<String>,
    pub sub_id: Option<String>,
}

impl FavouriteParams {
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: Some(image_id.into()),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: FavouriteAction) -> Self {
        self.action = Some(action.as_str().to_string());
        self
    }

    pub fn to_query(&self) -> Result<Query> {
        let action = present(&self.action)
            .map(str::parse::<FavouriteAction>)
            .transpose()?;

        let Some(image_id) = present(&self.image_id) else {
            return Err(CatApiError::Invalid(
                "Not all required values (image_id) were set".to_string(),
            ));
        };

        let mut query = vec![("image_id", image_id.to_string())];
        if let Some(action) = action {
            query.push(("action", action.as_str().to_string()));
        }
        push_opt(&mut query, "sub_id", &self.sub_id);
        Ok(query)
    }
}

/// Options for `images/report`. A reported image no longer shows up in
/// `images/get` results for the reporting API key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportParams {
    pub image_id: Option<String>,
    pub sub_id: Option<String>,
    pub reason: Option<String>,
}

impl ReportParams {
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: Some(image_id.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Result<Query> {
        let Some(image_id) = present(&self.image_id) else {
            return Err(CatApiError::Invalid(
                "Not all required values (image_id) were set".to_string(),
            ));
        };

        let mut query = vec![("image_id", image_id.to_string())];
        push_opt(&mut query, "sub_id", &self.sub_id);
        push_opt(&mut query, "reason", &self.reason);
        Ok(query)
    }
}
