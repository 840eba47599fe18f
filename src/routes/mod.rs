use axum::Router;

pub mod rooms;
pub mod time;

pub fn router() -> Router {
    Router::new()
        .merge(time::router())
        .merge(rooms::router())
}
