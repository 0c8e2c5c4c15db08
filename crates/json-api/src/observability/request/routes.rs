//! Route templates for span names and metric labels.

/// Replace order ids (`PX01`, `PX102`) with `{id}` so labels stay bounded.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| if is_order_id(segment) { "{id}" } else { segment })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_order_id(segment: &str) -> bool {
    segment
        .strip_prefix("PX")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_templated() {
        assert_eq!(route_template("/api/orders/PX01"), "/api/orders/{id}");
        assert_eq!(route_template("/api/orders/PX102/"), "/api/orders/{id}");
    }

    #[test]
    fn other_paths_are_kept() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/api/orders"), "/api/orders");
        assert_eq!(route_template("/api/orders/PXA"), "/api/orders/PXA");
        assert_eq!(route_template("/api/orders/PX"), "/api/orders/PX");
    }
}
