//! Route names for request spans.

use bikers_hub_app::documents::parse_object_id;

/// Collapse identifier segments so spans group by route rather than by
/// document.
pub(super) fn route_for_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if parse_object_id(segment).is_ok() {
            route.push_str("{id}");
        } else if segment.contains('@') {
            route.push_str("{email}");
        } else {
            route.push_str(segment);
        }
    }

    route
}
