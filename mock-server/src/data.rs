//! Static fixtures served by the mock endpoints.
//!
//! # Design
//! Route records mirror the admin panel's route modules (the frontend router
//! consumes them as-is), and the demo table is a deterministic seed so page
//! boundaries are stable across runs. None of this is logic; it exists so
//! the frontend has something to render during development.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title/icon metadata bag carried by each route record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
}

impl RouteMeta {
    /// Leaf-route metadata: title only.
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: None,
            order: None,
            keep_alive: None,
        }
    }
}

/// One entry of the route table consumed by the frontend router.
///
/// `component` is the frontend's lazy-import path for leaf routes; group
/// routes carry `children` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteRecord>,
}

/// One row of the demo table endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableItem {
    pub id: Uuid,
    pub name: String,
    pub department: String,
    pub active: bool,
}

/// The route table the admin panel loads at startup.
pub fn menu_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord {
            name: "Test".to_string(),
            path: "/test".to_string(),
            component: None,
            meta: RouteMeta {
                title: "Test Pages".to_string(),
                icon: Some("ic:baseline-view-in-ar".to_string()),
                order: Some(1000),
                keep_alive: Some(true),
            },
            children: vec![RouteRecord {
                name: "Test01".to_string(),
                path: "/test/test01".to_string(),
                component: Some("/views/test/test01".to_string()),
                meta: RouteMeta::titled("Test Page 01"),
                children: Vec::new(),
            }],
        },
        RouteRecord {
            name: "DigitalHuman".to_string(),
            path: "/dgman".to_string(),
            component: None,
            meta: RouteMeta {
                title: "Digital Human".to_string(),
                icon: Some("ic:baseline-view-in-ar".to_string()),
                order: Some(1000),
                keep_alive: Some(true),
            },
            children: vec![RouteRecord {
                name: "DigitalHuman01".to_string(),
                path: "/dgman/digitalhuman01".to_string(),
                component: Some("/views/digital_human/index".to_string()),
                meta: RouteMeta::titled("Digital Human"),
                children: Vec::new(),
            }],
        },
    ]
}

/// 25 demo rows in a fixed order; ids are fresh per seed, everything else is
/// deterministic.
pub fn seed_table() -> Vec<TableItem> {
    const DEPARTMENTS: [&str; 5] = ["Platform", "Design", "Sales", "Support", "Research"];
    (1..=25usize)
        .map(|n| TableItem {
            id: Uuid::new_v4(),
            name: format!("User {n:02}"),
            department: DEPARTMENTS[(n - 1) % DEPARTMENTS.len()].to_string(),
            active: n % 4 != 0,
        })
        .collect()
}
