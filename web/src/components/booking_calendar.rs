use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use shared_types::is_bookable_date;
use thaw::*;

/// Month-grid date picker for the booking form. Weeks start on Monday
/// (Polish locale); past days and Sundays are not selectable.
#[component]
pub fn BookingCalendar(
    selected_date: RwSignal<Option<NaiveDate>>,
    on_date_selected: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let current_month_offset = RwSignal::new(0i32);

    view! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v -= 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() <= 0)
                >
                    "←"
                </Button>

                <div class="calendar-month-label">
                    {move || {
                        let today = Local::now().date_naive();
                        let (year, month) = month_for_offset(today, current_month_offset.get());
                        format!("{} {}", month_name(month), year)
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v += 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() >= 3)
                >
                    "→"
                </Button>
            </div>

            <div class="calendar-weekday-headers">
                <div class="calendar-weekday">"pon."</div>
                <div class="calendar-weekday">"wt."</div>
                <div class="calendar-weekday">"śr."</div>
                <div class="calendar-weekday">"czw."</div>
                <div class="calendar-weekday">"pt."</div>
                <div class="calendar-weekday">"sob."</div>
                <div class="calendar-weekday">"niedz."</div>
            </div>

            <div class="calendar-days">
                {move || {
                    let today = Local::now().date_naive();
                    let (year, month) = month_for_offset(today, current_month_offset.get());
                    let selected = selected_date.get();

                    calendar_days(year, month)
                        .into_iter()
                        .map(|day_opt| {
                            if let Some(day) = day_opt {
                                let bookable = is_bookable_date(day, today);
                                let is_selected = selected == Some(day);

                                view! {
                                    <button
                                        type="button"
                                        class="calendar-day"
                                        class:bookable=bookable
                                        class:unavailable=!bookable
                                        class:selected=is_selected
                                        disabled=!bookable
                                        on:click=move |_| {
                                            if bookable {
                                                selected_date.set(Some(day));
                                                on_date_selected(day);
                                            }
                                        }
                                    >
                                        {day.day()}
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="calendar-day empty"></div>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// Year and month shown for a given offset from today's month.
fn month_for_offset(today: NaiveDate, offset: i32) -> (i32, u32) {
    let total = today.year() * 12 + today.month() as i32 - 1 + offset;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// The month laid out Monday-first, with `None` padding cells before the
/// first day.
fn calendar_days(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_monday() as usize;
    let mut days: Vec<Option<NaiveDate>> = vec![None; leading];
    days.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(Some),
    );
    days
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "styczeń",
        2 => "luty",
        3 => "marzec",
        4 => "kwiecień",
        5 => "maj",
        6 => "czerwiec",
        7 => "lipiec",
        8 => "sierpień",
        9 => "wrzesień",
        10 => "październik",
        11 => "listopad",
        12 => "grudzień",
        _ => "",
    }
}

fn month_name_genitive(month: u32) -> &'static str {
    match month {
        1 => "stycznia",
        2 => "lutego",
        3 => "marca",
        4 => "kwietnia",
        5 => "maja",
        6 => "czerwca",
        7 => "lipca",
        8 => "sierpnia",
        9 => "września",
        10 => "października",
        11 => "listopada",
        12 => "grudnia",
        _ => "",
    }
}

/// "10 marca 2026", the way the chosen date reads in running text.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name_genitive(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_offset_wraps_across_year_end() {
        let today = NaiveDate::from_ymd_opt(2026, 11, 20).unwrap();
        assert_eq!(month_for_offset(today, 0), (2026, 11));
        assert_eq!(month_for_offset(today, 1), (2026, 12));
        assert_eq!(month_for_offset(today, 2), (2027, 1));
        assert_eq!(month_for_offset(today, 3), (2027, 2));
    }

    #[test]
    fn march_2026_grid_starts_with_six_padding_cells() {
        // 2026-03-01 is a Sunday, so a Monday-first grid pads six cells
        let days = calendar_days(2026, 3);
        assert_eq!(days.len(), 6 + 31);
        assert!(days[..6].iter().all(Option::is_none));
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(days.last().copied().flatten(), NaiveDate::from_ymd_opt(2026, 3, 31));
    }

    #[test]
    fn long_date_uses_genitive_month() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(format_long_date(date), "10 marca 2026");
    }
}
