use crate::render::Renderer;
use recap_core::Recapz;

pub fn moodmap_mode(days: Option<u32>, renderer: &Renderer, recapz: &Recapz) {
    let map = recapz.mood_map(days);
    let recaps = map.weeks.iter().flatten().filter(|day| day.has_recap).count();
    let window = days.unwrap_or(recapz.config.mood_map_days);
    renderer.print_info(&format!("{recaps} of the last {window} days have a recap."));
    renderer.print_mood_map(&map);
}
