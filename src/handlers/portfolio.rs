// GET /api/v1/portfolio handler

use crate::portfolio::Portfolio;
use std::convert::Infallible;

pub async fn get_portfolio_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&Portfolio::snapshot()))
}
