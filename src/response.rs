//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (StatusCode::CREATED, Json(SuccessOne { data }))
}

pub fn success_one_ok<T: Serialize>(data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (StatusCode::OK, Json(SuccessOne { data }))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<SuccessMany<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(SuccessMany {
            data,
            meta: MetaCount { count },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_envelope_carries_count() {
        let (status, Json(body)) = success_many(vec!["a", "b"]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["meta"]["count"], 2);
        assert_eq!(json["data"][1], "b");
    }

    #[test]
    fn created_envelope_is_201() {
        let (status, Json(body)) = success_one("row");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(serde_json::to_value(&body).unwrap()["data"], "row");
    }
}
