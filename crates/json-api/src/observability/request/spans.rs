//! Route templates for request spans.

use uuid::Uuid;

/// Replace id segments with `{id}` so spans group by route rather than by
/// record.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            template.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }
    }

    template
}
