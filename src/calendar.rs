//! Month grid of the "Calendário" page.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::domain::appointment::Appointment;
use crate::domain::dashboard::MonthlyAppointment;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Column headers, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Appointment counts keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayCounts(BTreeMap<String, u32>);

impl DayCounts {
    pub fn from_monthly(days: &[MonthlyAppointment]) -> Self {
        let mut counts = BTreeMap::new();
        for day in days {
            let key = day.date.get(..10).unwrap_or(&day.date).to_string();
            *counts.entry(key).or_insert(0) += day.count;
        }
        Self(counts)
    }

    /// Groups appointments by the date part of their start.
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut counts = BTreeMap::new();
        for appointment in appointments {
            *counts.entry(appointment.day().to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, date: NaiveDate) -> u32 {
        self.0
            .get(&date.format("%Y-%m-%d").to_string())
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub count: u32,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            return 31;
        }
        u32::try_from((next - self.first).num_days()).unwrap_or(31)
    }

    /// Empty cells before day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .with_day(self.days_in_month())
            .unwrap_or(self.first)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Blank cells followed by one cell per day.
    pub fn cells(&self, counts: &DayCounts, today: NaiveDate) -> Vec<CalendarCell> {
        let mut cells = vec![CalendarCell::Blank; self.leading_blanks() as usize];
        cells.extend(self.first.iter_days().take_while(|d| self.contains(*d)).map(|date| {
            CalendarCell::Day(CalendarDay {
                date,
                day: date.day(),
                count: counts.count(date),
                is_today: date == today,
            })
        }));
        cells
    }
}

impl Display for MonthView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = MONTH_NAMES[self.first.month0() as usize];
        write!(f, "{} {}", name, self.first.year())
    }
}
