//! Minimal terminal week view: the composition-root wiring end to end.

use chrono::{Duration, NaiveDate};
use daygrid::{
    format_clock, format_date, ConflictBehavior, DateKey, DateOrder, DateStore, Event, EventStore,
    SchedulingPolicy, TimeFormat,
};

const START_HOUR: u32 = 9;

fn main() {
    let policy = SchedulingPolicy::default();

    let mut dates = DateStore::starting_at(
        NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid demo date"),
    );
    let mut events = EventStore::new();

    events.subscribe(|store| println!("  ({} events total)", store.len()));

    let monday = DateKey::from(dates.week_start());
    println!("Week of {}", format_date(dates.week_start(), DateOrder::MonthDayYear));
    println!();

    println!("Scheduling:");
    events.upsert_event(Event::new("standup", "Standup", monday.clone(), 0, 15));
    events.upsert_event(Event::new("review", "Design review", monday.clone(), 60, 60));
    events.upsert_event(
        Event::new("lunch", "Team lunch", monday.clone(), 180, 60).with_color("#9ece6a"),
    );
    println!();

    // Simulate dropping "review" onto a slot that collides with lunch.
    let conflicts = events.conflicts_same_day(&monday, 150, 60, Some("review"));
    if !conflicts.is_empty() && policy.conflicts == ConflictBehavior::Inform {
        for hit in &conflicts {
            println!(
                "note: overlaps '{}' at {}",
                hit.label,
                format_clock(hit.start_minutes, START_HOUR, TimeFormat::TwelveHour)
            );
        }
    }
    events.update_event_time("review", 150, 60, None);
    println!();

    // Render the week, one column per day.
    for offset in 0..7 {
        let day_date = dates.week_start() + Duration::days(offset);
        let key = DateKey::from(day_date);
        let mut column: Vec<&Event> = events.events_for_date(&key).collect();
        column.sort_by_key(|e| e.start_minutes);

        println!("{}", format_date(day_date, DateOrder::MonthDayYear));
        if column.is_empty() {
            println!("  -");
        }
        for event in column {
            println!(
                "  {:>8}  {}",
                format_clock(event.start_minutes, START_HOUR, TimeFormat::TwelveHour),
                event.label
            );
        }
    }

    dates.next_day();
    println!();
    println!("Now viewing {}", dates.date_key());
}
