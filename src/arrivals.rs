extern crate chrono;
extern crate chrono_tz;

use crate::tfl;

const MAX_PER_DESTINATION: usize = 5;

pub struct ProcessedArrival {
    pub destination_name: String,
    pub platform_name: String,
    pub expected_arrival: chrono::DateTime<chrono_tz::Tz>,
    pub time_to_station: i64,
    pub time_to_station_display: String,
}

// Keeps the 5 soonest arrivals per destination, then interleaves everything
// into one list sorted by arrival time. Records that can't be parsed are
// skipped, so bad input degrades to fewer (or zero) results.
pub fn process(records: &[tfl::ArrivalRecord]) -> Vec<ProcessedArrival> {
    let mut by_destination = std::collections::BTreeMap::new();
    for record in records {
        match chrono::DateTime::parse_from_rfc3339(&record.expected_arrival) {
            Ok(instant) => {
                by_destination.entry(record.destination_name.clone())
                    .or_insert_with(Vec::new)
                    .push((instant, record));
            },
            Err(err) => {
                warn!("Skipping arrival for {} with bad expectedArrival '{}': {}",
                      record.destination_name, record.expected_arrival, err);
            },
        }
    }

    let mut selected = vec![];
    for (_destination, mut group) in by_destination {
        group.sort_by_key(|&(instant, _)| instant);
        group.truncate(MAX_PER_DESTINATION);
        selected.extend(group);
    }
    selected.sort_by_key(|&(instant, _)| instant);

    return selected.iter().map(|&(instant, record)| {
        return ProcessedArrival{
            destination_name: record.destination_name.clone(),
            platform_name: record.platform_name.clone(),
            expected_arrival: instant.with_timezone(&chrono_tz::Europe::London),
            time_to_station: record.time_to_station,
            time_to_station_display: format_wait(record.time_to_station),
        };
    }).collect();
}

// Whole minutes plus the remainder rounded to the nearest half minute, ties
// to even. The remainder can round up to a full extra minute: 345s is
// "6 mins", not "5.5 mins".
pub fn format_wait(seconds: i64) -> String {
    let minutes = seconds.div_euclid(60);
    let remainder = seconds.rem_euclid(60);
    let half_minutes = round_half_to_even(remainder as f64 * 2.0 / 60.0) / 2.0;
    let value = minutes as f64 + half_minutes;

    if value == value.trunc() {
        return format!("{} mins", value as i64);
    }
    return format!("{} mins", value);
}

fn round_half_to_even(x: f64) -> f64 {
    let floor = x.floor();
    let fraction = x - floor;
    if fraction > 0.5 {
        return floor + 1.0;
    }
    if fraction < 0.5 {
        return floor;
    }
    if (floor as i64) % 2 == 0 {
        return floor;
    }
    return floor + 1.0;
}
