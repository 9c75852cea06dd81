//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

pub const API_KEY: &str = "av_test_key";

pub fn user_json(id: &str, token: &str) -> Value {
    json!({
        "id": id,
        "externalId": "crm-42",
        "createdAt": "2025-12-11 08:25:10.144334+00",
        "updatedAt": "2025-12-11T08:25:10.144334+00:00",
        "createdBy": null,
        "env": "playground",
        "token": token
    })
}

pub fn run_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2025-12-11T08:25:10Z",
        "finishedAt": null,
        "status": status,
        "failReason": null,
        "version": { "id": "v1", "version": "1.0.0", "createdAt": "2025-12-01T00:00:00Z" },
        "metadata": null,
        "sessionItems": [{
            "id": format!("{id}-item"),
            "createdAt": "2025-12-11T08:25:10Z",
            "updatedAt": "2025-12-11T08:25:10Z",
            "content": { "role": "user", "content": "Hi" },
            "runId": id,
            "sessionId": "s1"
        }],
        "sessionId": "s1"
    })
}

pub fn session_json(id: &str, runs: Vec<Value>) -> Value {
    json!({
        "id": id,
        "agent": "support",
        "handle": "7",
        "createdAt": "2025-12-11 08:25:10.144334+00",
        "updatedAt": "2025-12-11 08:25:10.144334+00",
        "metadata": null,
        "user": user_json("u1", "tok-1"),
        "userId": "u1",
        "env": "playground",
        "runs": runs
    })
}

pub fn summary_json(id: &str) -> Value {
    let mut session = session_json(id, Vec::new());
    if let Some(fields) = session.as_object_mut() {
        fields.remove("runs");
    }
    session
}

pub fn page_json(ids: &[&str], page: u32, total_pages: u32, total_count: u64) -> Value {
    let limit = 2u64;
    let start = if ids.is_empty() { 0 } else { (page as u64 - 1) * limit + 1 };
    let end = if ids.is_empty() { 0 } else { start + ids.len() as u64 - 1 };
    json!({
        "sessions": ids.iter().map(|id| summary_json(id)).collect::<Vec<_>>(),
        "pagination": {
            "page": page,
            "limit": limit,
            "totalPages": total_pages,
            "totalCount": total_count,
            "hasNextPage": page < total_pages,
            "hasPreviousPage": page > 1,
            "currentPageStart": start,
            "currentPageEnd": end
        }
    })
}

pub fn config_json(config: Value) -> Value {
    json!({
        "id": "c2",
        "config": config,
        "createdAt": "2025-12-11T08:25:10Z",
        "createdBy": "m1"
    })
}
