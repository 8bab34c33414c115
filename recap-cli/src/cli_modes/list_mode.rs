use crate::{cli::FilterArgs, render::Renderer};
use recap_core::Recapz;

pub fn list_mode(filters: &FilterArgs, renderer: &Renderer, recapz: &Recapz) {
    // Without filter flags the configured default filters apply.
    let base = if filters.is_empty() {
        recapz.default_filters()
    } else {
        Default::default()
    };
    let spec = filters.to_spec(base);
    let entries = recapz.search(&spec);

    if entries.is_empty() {
        renderer.print_info("No entries found");
        return;
    }
    let active = spec.active_count();
    if active > 0 {
        renderer.print_info(&format!(
            "{} of {} entries match {active} filter(s).",
            entries.len(),
            recapz.store.entries().len()
        ));
    } else {
        renderer.print_info(&format!("{} entries found.", entries.len()));
    }
    renderer.print_entries(&entries);
}
