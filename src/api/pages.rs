//! HTML pages
//!
//! Server-rendered listing of the catalog.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::error::Result;
use crate::models::{Product, User};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub users: Vec<User>,
    pub products: Vec<Product>,
}

/// Handler for GET /
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>> {
    let page = IndexTemplate {
        users: state.catalog.list_users().await?,
        products: state.catalog.list_products().await?,
    };
    Ok(Html(page.render()?))
}
