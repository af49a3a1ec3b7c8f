//! View models for trip detail pages and the trips API.

use serde::Serialize;

use crate::domain::destination::Destination;
use crate::domain::trip::{ScheduleEntry, TripDetail};

/// Schedule entries of one trip day, sorted by start time.
#[derive(Debug, Serialize)]
pub struct DaySchedule {
    pub day: i32,
    pub entries: Vec<ScheduleEntry>,
}

/// Trip detail shaped for rendering: day-grouped schedule plus the
/// derived budget figures.
#[derive(Debug, Serialize)]
pub struct TripView {
    pub trip: crate::domain::trip::Trip,
    pub destinations: Vec<Destination>,
    pub days: Vec<DaySchedule>,
    pub total_budget: i64,
    pub per_person_budget: i64,
}

impl From<TripDetail> for TripView {
    fn from(detail: TripDetail) -> Self {
        let day_count = detail.trip.day_count();
        let total_budget = detail.trip.total_budget();
        let per_person_budget = total_budget / i64::from(detail.trip.people_count.max(1));

        let mut days: Vec<DaySchedule> = (1..=day_count)
            .map(|day| DaySchedule {
                day,
                entries: Vec::new(),
            })
            .collect();
        for entry in detail.schedule {
            // Entries are stored within the day range; anything else is
            // silently dropped rather than panicking the view.
            let slot = usize::try_from(entry.day - 1)
                .ok()
                .and_then(|index| days.get_mut(index));
            if let Some(slot) = slot {
                slot.entries.push(entry);
            }
        }
        for slot in &mut days {
            slot.entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        }

        Self {
            trip: detail.trip,
            destinations: detail.destinations,
            days,
            total_budget,
            per_person_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::trip::{Budget, Trip, TripType};

    fn sample_detail() -> TripDetail {
        TripDetail {
            trip: Trip {
                id: 1,
                user_email: "user@example.com".to_string(),
                public_id: uuid::Uuid::new_v4(),
                name: "Libur akhir tahun".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
                people_count: 2,
                trip_type: TripType::Couple,
                budget: Budget {
                    transport: 500_000,
                    lodging: 800_000,
                    food: 400_000,
                    activities: 300_000,
                },
                notes: String::new(),
                packing_list: vec![],
                is_public: false,
                created_at: chrono::Utc::now().naive_utc(),
                updated_at: chrono::Utc::now().naive_utc(),
            },
            destinations: vec![],
            schedule: vec![
                ScheduleEntry {
                    id: 1,
                    trip_id: 1,
                    destination_id: 4,
                    day: 2,
                    start_time: "13:00".to_string(),
                    end_time: "15:00".to_string(),
                    label: "Snorkeling".to_string(),
                    note: None,
                },
                ScheduleEntry {
                    id: 2,
                    trip_id: 1,
                    destination_id: 4,
                    day: 2,
                    start_time: "09:00".to_string(),
                    end_time: "11:00".to_string(),
                    label: "Sarapan di pantai".to_string(),
                    note: None,
                },
            ],
        }
    }

    #[test]
    fn groups_schedule_by_day_and_sorts_by_start_time() {
        let view = TripView::from(sample_detail());
        assert_eq!(view.days.len(), 3);
        assert!(view.days[0].entries.is_empty());
        assert_eq!(view.days[1].entries[0].label, "Sarapan di pantai");
        assert_eq!(view.days[1].entries[1].label, "Snorkeling");
        assert!(view.days[2].entries.is_empty());
    }

    #[test]
    fn out_of_range_days_are_dropped() {
        let mut detail = sample_detail();
        detail.schedule.push(ScheduleEntry {
            id: 3,
            trip_id: 1,
            destination_id: 4,
            day: 0,
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            label: "Hari nol".to_string(),
            note: None,
        });
        detail.schedule.push(ScheduleEntry {
            id: 4,
            trip_id: 1,
            destination_id: 4,
            day: 99,
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            label: "Hari jauh".to_string(),
            note: None,
        });

        let view = TripView::from(detail);
        let total: usize = view.days.iter().map(|d| d.entries.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn derives_budget_totals() {
        let view = TripView::from(sample_detail());
        assert_eq!(view.total_budget, 2_000_000);
        assert_eq!(view.per_person_budget, 1_000_000);
    }
}
