use crate::render::View;

pub fn to_json(view: &View) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
