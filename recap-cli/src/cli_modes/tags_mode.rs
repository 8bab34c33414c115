use crate::render::Renderer;
use recap_core::Recapz;

pub fn tags_mode(counts: bool, renderer: &Renderer, recapz: &Recapz) {
    if counts {
        let counts = recapz.tag_counts();
        if counts.is_empty() {
            renderer.print_info("No tags found");
            return;
        }
        renderer.print_info(&format!("{} unique tags found.", counts.len()));
        renderer.print_tag_counts(&counts);
        return;
    }

    let tags = recapz.available_tags();
    if tags.is_empty() {
        renderer.print_info("No tags found");
    } else {
        renderer.print_info(&format!("{} unique tags found.", tags.len()));
        renderer.print_tags(&tags);
    }
}
