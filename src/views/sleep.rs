use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    sleep::SleepSummary,
    store::SleepEntry,
    views::components,
};

/// How many of the latest nights the log table shows.
const RECENT_NIGHTS: usize = 5;

pub fn sleep_page(summary: &SleepSummary, entries: &[SleepEntry]) -> Markup {
    html! {
        h1 { (t!("sleep.title")) }
        p { (t!("sleep.intro")) }
        (tracker(summary, entries, None))
    }
}

/// Dashboard, log table, tips and the log form. Swapped as a whole after
/// every submission.
pub fn tracker(summary: &SleepSummary, entries: &[SleepEntry], error: Option<&str>) -> Markup {
    html! {
        div id=(names::SLEEP_TRACKER_ID) {
            article.sleep-score {
                header { h3 { (t!("sleep.score_title")) } }
                @if summary.nights == 0 {
                    p { (t!("sleep.no_entries")) }
                } @else {
                    (components::score_bar(&t!("sleep.average_score"), summary.average_score))
                    p { mark { (summary.rating.as_str()) } }
                    p {
                        (t!("sleep.average_duration")) ": "
                        strong { (format!("{:.1}h", summary.average_duration)) }
                        br;
                        (t!("sleep.average_quality")) ": "
                        strong { (format!("{:.1}/10", summary.average_quality)) }
                    }
                }
                footer { small { (t!("sleep.consistency_tip")) } }
            }
            @if !entries.is_empty() {
                (recent_nights(entries))
            }
            article {
                h3 { (t!("sleep.recommendations_title")) }
                ul {
                    @for tip in &summary.recommendations {
                        li { (tip) }
                    }
                }
            }
            (log_form(error))
        }
    }
}

fn recent_nights(entries: &[SleepEntry]) -> Markup {
    html! {
        article {
            h3 { (t!("sleep.recent_title")) }
            figure {
                table {
                    thead {
                        tr {
                            th { (t!("sleep.date")) }
                            th { (t!("sleep.bed_time")) }
                            th { (t!("sleep.wake_time")) }
                            th { (t!("sleep.duration")) }
                            th { (t!("sleep.quality")) }
                            th { (t!("sleep.score")) }
                            th { (t!("sleep.notes")) }
                        }
                    }
                    tbody {
                        @for entry in entries.iter().rev().take(RECENT_NIGHTS) {
                            tr {
                                td { (entry.date) }
                                td { (entry.bed_time.format("%H:%M")) }
                                td { (entry.wake_time.format("%H:%M")) }
                                td { (format!("{:.1}h", entry.duration)) }
                                td { (entry.quality) "/10" }
                                td { (entry.sleep_score) }
                                td { (entry.notes) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn log_form(error: Option<&str>) -> Markup {
    html! {
        article {
            h3 { (t!("sleep.log_title")) }
            @if let Some(error) = error {
                p.form-error { (error) }
            }
            form hx-post=(names::SLEEP_URL)
                 hx-target={ "#" (names::SLEEP_TRACKER_ID) }
                 hx-swap="outerHTML" {
                label {
                    (t!("sleep.date"))
                    input name="date" type="date";
                }
                div.grid {
                    label {
                        (t!("sleep.bed_time"))
                        input name="bedTime" type="time" value="23:00" required="true";
                    }
                    label {
                        (t!("sleep.wake_time"))
                        input name="wakeTime" type="time" value="07:00" required="true";
                    }
                }
                label {
                    (t!("sleep.quality_range"))
                    input name="quality" type="range" min="1" max="10" step="1" value="7";
                }
                label {
                    (t!("sleep.notes"))
                    textarea name="notes" rows="3" placeholder=(t!("sleep.notes_placeholder")) {}
                }
                button type="submit" { (t!("sleep.save")) }
            }
        }
    }
}
