//! Navigation effects handed to the routing layer.
//!
//! The core never routes by itself. Workflows that end on another screen return a
//! [`Route`]; the view layer decides how to get there. Returning `None` instead of
//! a route means "stay".

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Screen the routing layer should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screenName", content = "params")]
pub enum Route {
    Lists,
    Items {
        #[serde(rename = "listIndex")]
        list_index: usize,
    },
}

impl Route {
    #[must_use]
    pub const fn screen_name(&self) -> &'static str {
        match self {
            Self::Lists => "Lists",
            Self::Items { .. } => "Items",
        }
    }

    /// Screen parameters as name/value pairs.
    #[must_use]
    pub fn params(&self) -> BTreeMap<&'static str, usize> {
        match self {
            Self::Lists => BTreeMap::new(),
            Self::Items { list_index } => BTreeMap::from([("listIndex", *list_index)]),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lists => f.write_str("Lists"),
            Self::Items { list_index } => write!(f, "Items(listIndex={list_index})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_route_carries_list_index() {
        let route = Route::Items { list_index: 4 };

        assert_eq!(route.screen_name(), "Items");
        assert_eq!(route.params().get("listIndex"), Some(&4));
        assert_eq!(
            serde_json::to_value(route).unwrap(),
            serde_json::json!({ "screenName": "Items", "params": { "listIndex": 4 } })
        );
    }

    #[test]
    fn lists_route_has_no_params() {
        assert!(Route::Lists.params().is_empty());
        assert_eq!(Route::Lists.to_string(), "Lists");
    }
}
