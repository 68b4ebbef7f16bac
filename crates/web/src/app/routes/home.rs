use axum::response::Html;

use crate::app::views;

pub async fn index() -> Html<String> {
    views::home_page()
}
