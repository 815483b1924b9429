extern crate anyhow;
extern crate chrono;
extern crate chrono_tz;
extern crate flexi_logger;
extern crate getopts;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

mod arrivals;
mod notify;
mod persist;
mod result;
mod summary;
mod tfl;

// Acton Main Line
const DEFAULT_STOP_POINT_ID: &str = "910GACTONML";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optopt("s", "stop", "StopPoint ID to query", "STOP_ID");
    opts.optopt("c", "creds", "JSON file with TfL app credentials", "FILENAME");
    opts.optopt("j", "save-json", "Where to dump the raw API response", "FILENAME");
    opts.optflag("d", "dialog", "Show the summary in a native dialog");

    let matches = opts.parse(&args[1..]).expect("parse opts");

    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("logger spec")
        .start()
        .expect("starting logger");

    let stop_point_id = matches.opt_str("stop")
        .unwrap_or(DEFAULT_STOP_POINT_ID.to_string());

    let credentials = match matches.opt_str("creds") {
        Some(path) => {
            match tfl::credentials_from_file(&path) {
                Ok(creds) => Some(creds),
                Err(err) => {
                    warn!("Ignoring credentials from {}: {}", path, err);
                    None
                },
            }
        },
        None => None,
    };

    info!("Fetching arrivals for {}", stop_point_id);
    let raw_response = match tfl::fetch_raw_arrivals(&stop_point_id, credentials.as_ref()) {
        Ok(body) => Some(body),
        Err(err) => {
            error!("Error fetching arrivals: {}", err);
            None
        },
    };

    if let (Some(raw_json), Some(path)) = (&raw_response, matches.opt_str("save-json")) {
        match persist::save_raw_json(raw_json, &path) {
            Ok(()) => info!("Raw response saved to {}", path),
            Err(err) => error!("Error saving raw response to {}: {}", path, err),
        }
    }

    let records = match &raw_response {
        Some(raw_json) => {
            match tfl::parse_arrivals(raw_json) {
                Ok(records) => records,
                Err(err) => {
                    error!("Discarding arrivals response: {}", err);
                    vec![]
                },
            }
        },
        None => vec![],
    };

    let processed = arrivals::process(&records);
    let pairs = summary::summarize(&processed);
    debug!("{} arrivals, {} destinations", processed.len(), pairs.len());

    let notifier = notify::for_flags(matches.opt_present("dialog"));
    match notifier.notify(&summary::build_message(&pairs)) {
        Ok(()) => {},
        Err(err) => error!("Error displaying summary: {}", err),
    }
}
