//! JSON payloads in the shape of the remote clan API.

use serde_json::{json, Map, Value};

/// One row of a `clan/list/` page.
pub fn clan_summary(clan_id: i64, name: &str, members_count: i64) -> Value {
    json!({
        "clan_id": clan_id,
        "name": name,
        "tag": name.to_uppercase(),
        "members_count": members_count,
        "created_at": 1_000,
    })
}

/// A successful `clan/list/` response; `total` is reported in `meta` when given.
pub fn clan_list_page(clans: &[Value], total: Option<u64>) -> Value {
    let mut meta = Map::new();
    meta.insert("count".to_string(), json!(clans.len()));
    if let Some(total) = total {
        meta.insert("total".to_string(), json!(total));
    }

    json!({
        "status": "ok",
        "meta": meta,
        "data": clans,
    })
}

/// One roster entry of a `clan/info/` record.
pub fn member(account_id: i64, account_name: &str, created_at: i64) -> Value {
    json!({
        "account_id": account_id,
        "account_name": account_name,
        "created_at": created_at,
        "role": "private",
    })
}

/// A full `clan/info/` record with its members keyed by account id.
pub fn clan(clan_id: i64, name: &str, members: &[Value]) -> Value {
    let roster: Map<String, Value> = members
        .iter()
        .map(|m| (m["account_id"].to_string(), m.clone()))
        .collect();

    json!({
        "clan_id": clan_id,
        "name": name,
        "tag": name.to_uppercase(),
        "members_count": members.len(),
        "members": roster,
    })
}

/// A successful `clan/info/` response keyed by clan id.
pub fn clan_info(clans: &[Value]) -> Value {
    let data: Map<String, Value> = clans
        .iter()
        .map(|c| (c["clan_id"].to_string(), c.clone()))
        .collect();

    json!({
        "status": "ok",
        "meta": { "count": clans.len() },
        "data": data,
    })
}

/// An API-level failure envelope.
pub fn error(code: u16, message: &str) -> Value {
    json!({
        "status": "error",
        "error": {
            "code": code,
            "message": message,
            "field": null,
            "value": null,
        },
    })
}
