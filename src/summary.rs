use crate::arrivals;

// The processed list is already sorted by arrival time, so the first record
// seen for each destination is that destination's soonest train.
pub fn summarize(processed: &[arrivals::ProcessedArrival]) -> Vec<(String, String)> {
    let mut seen = std::collections::HashSet::new();
    let mut pairs = vec![];
    for arrival in processed {
        if seen.insert(arrival.destination_name.clone()) {
            pairs.push((arrival.destination_name.clone(),
                        arrival.time_to_station_display.clone()));
        }
    }
    return pairs;
}

pub fn build_message(summary: &[(String, String)]) -> String {
    if summary.is_empty() {
        return "No upcoming trains found.".to_string();
    }

    let mut message = String::new();
    for (destination, wait) in summary {
        message.push_str(&format!("\nNext train to {} is in {}\n", destination, wait));
    }
    return message;
}

#[cfg(test)]
mod tests {
    extern crate chrono;
    extern crate chrono_tz;

    use crate::arrivals;
    use crate::tfl;

    fn processed(destination: &str, display: &str, expected_arrival: &str) -> arrivals::ProcessedArrival {
        return arrivals::ProcessedArrival{
            destination_name: destination.to_string(),
            platform_name: "Platform 1".to_string(),
            expected_arrival: chrono::DateTime::parse_from_rfc3339(expected_arrival)
                .expect("test timestamp")
                .with_timezone(&chrono_tz::Europe::London),
            time_to_station: 0,
            time_to_station_display: display.to_string(),
        };
    }

    #[test]
    fn one_entry_per_destination_in_first_seen_order() {
        let list = vec![
            processed("Reading", "2 mins", "2024-03-29T17:00:00Z"),
            processed("Reading", "1 mins", "2024-03-29T17:01:00Z"),
            processed("Shenfield", "5 mins", "2024-03-29T17:02:00Z"),
        ];

        let summary = super::summarize(&list);

        assert_eq!(vec![("Reading".to_string(), "2 mins".to_string()),
                        ("Shenfield".to_string(), "5 mins".to_string())],
                   summary);
    }

    #[test]
    fn message_wording() {
        let summary = vec![
            ("Reading".to_string(), "2 mins".to_string()),
            ("Shenfield".to_string(), "5 mins".to_string()),
        ];

        assert_eq!("\nNext train to Reading is in 2 mins\n\nNext train to Shenfield is in 5 mins\n",
                   super::build_message(&summary));
    }

    #[test]
    fn empty_summary_gets_placeholder_message() {
        assert_eq!(0, super::summarize(&vec![]).len());
        assert_eq!("No upcoming trains found.", super::build_message(&vec![]));
    }

    #[test]
    fn pipeline_from_golden_response() {
        let raw_json = std::fs::read_to_string("testdata/arrivals.json")
            .expect("Error reading arrivals.json");
        let records = tfl::parse_arrivals(&raw_json).expect("Error parsing JSON");

        let summary = super::summarize(&arrivals::process(&records));

        assert_eq!(vec![("Abbey Wood Rail Station".to_string(), "2.5 mins".to_string()),
                        ("Shenfield Rail Station".to_string(), "7.5 mins".to_string()),
                        ("Reading Rail Station".to_string(), "12.5 mins".to_string()),
                        ("Heathrow Terminal 4 Rail Station".to_string(), "17.5 mins".to_string())],
                   summary);
    }
}
