#![allow(dead_code)]

use chrono::NaiveDate;
use daygrid::{DateKey, Event};

pub fn day(s: &str) -> DateKey {
    s.parse().expect("test date key")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test date")
}

pub fn ev(id: &str, key: &str, start_minutes: u32, duration: u32) -> Event {
    Event::new(id, format!("event {id}"), day(key), start_minutes, duration)
}
