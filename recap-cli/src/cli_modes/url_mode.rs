use crate::{cli::FilterArgs, render::Renderer};
use recap_core::{FilterSpec, params::to_query_string};

pub fn url_mode(filters: &FilterArgs, renderer: &Renderer) {
    let spec = filters.to_spec(FilterSpec::default());
    let query = to_query_string(&spec);
    if query.is_empty() {
        renderer.print_info("No shareable filters set, the view has no query string.");
    } else {
        println!("?{query}");
    }
    if !spec.query.is_empty() || !spec.tags.is_empty() {
        renderer.print_info("Text search and tags are not part of the shareable URL.");
    }
}
