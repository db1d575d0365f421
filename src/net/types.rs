//! Wire types shared with the backend REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by the auth endpoints and
/// persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Request body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body of `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Plant summary shown in the collection and explorer lists.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlantSummary {
    pub id: String,
    pub name: String,
    pub species: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Full plant record shown on the detail page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlantDetail {
    pub id: String,
    pub name: String,
    pub species: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// One candidate species from `POST /plants/identify`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IdentificationMatch {
    pub species: String,
    #[serde(rename = "commonName")]
    pub common_name: Option<String>,
    pub score: f64,
}
