use crate::render::Renderer;
use chrono::NaiveDate;
use recap_core::{MoodDayData, Recapz, calendar::build_mood_map};
use std::collections::HashMap;

pub fn calendar_mode(month: Option<NaiveDate>, renderer: &Renderer, recapz: &Recapz) {
    let grid = recapz.month_grid(month);
    let dates: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
    let Some(last) = dates.last().copied() else {
        return;
    };

    // A window ending on the last day of the month covers exactly the month.
    let days: HashMap<NaiveDate, MoodDayData> =
        build_mood_map(recapz.store.entries(), dates.len() as u32, last)
            .into_iter()
            .map(|day| (day.date, day))
            .collect();
    renderer.print_month_grid(&grid, &days);

    let recaps = days.values().filter(|day| day.has_recap).count();
    renderer.print_info(&format!("{recaps} of {} days have a recap.", dates.len()));
}
