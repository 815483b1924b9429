extern crate anyhow;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::result;

use anyhow::Context;

const ARRIVALS_BASE_URL: &str = "https://api.tfl.gov.uk/Line/elizabeth/Arrivals";

// One predicted arrival from /Line/elizabeth/Arrivals/{stopPointId}.
// The response carries many more fields; these are the ones the pipeline needs,
// and a record missing any of them is rejected at the parse boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalRecord {
    pub destination_name: String,
    pub platform_name: String,
    pub expected_arrival: String,
    pub time_to_station: i64,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub id: String,
    pub key: String,
}

pub fn credentials_from_file<P: AsRef<std::path::Path>>(path: P) -> result::LizNextResult<Credentials> {
    let debug_path = path.as_ref().to_str().map(|x| x.to_string());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Opening TfL creds from '{:?}'", debug_path))?;
    let reader = std::io::BufReader::new(file);
    let creds: Credentials = serde_json::from_reader(reader)
        .with_context(|| format!("while parsing credentials"))?;
    return Ok(creds);
}

pub fn fetch_raw_arrivals(stop_point_id: &str, credentials: Option<&Credentials>) -> result::LizNextResult<String> {
    return fetch_raw_arrivals_ext(stop_point_id, credentials, real_fetch_json_fn);
}

fn fetch_raw_arrivals_ext(stop_point_id: &str,
                          credentials: Option<&Credentials>,
                          fetch_json_fn: fn(&str) -> result::LizNextResult<String>) -> result::LizNextResult<String> {
    if stop_point_id.is_empty() {
        return Err(result::make_error("No StopPoint ID given"));
    }
    return fetch_json_fn(&arrivals_url(stop_point_id, credentials));
}

fn arrivals_url(stop_point_id: &str, credentials: Option<&Credentials>) -> String {
    match credentials {
        Some(creds) => {
            return format!("{}/{}?app_id={}&app_key={}",
                           ARRIVALS_BASE_URL, stop_point_id, creds.id, creds.key);
        },
        None => {
            return format!("{}/{}", ARRIVALS_BASE_URL, stop_point_id);
        },
    }
}

pub fn parse_arrivals(raw_json: &str) -> result::LizNextResult<Vec<ArrivalRecord>> {
    let records: Vec<ArrivalRecord> = serde_json::from_str(raw_json)?;
    return Ok(records);
}

fn real_fetch_json_fn(url: &str) -> result::LizNextResult<String> {
    use std::io::Read;

    debug!("Fetching {}", url);
    let client = reqwest::blocking::Client::new();
    let mut response = client.get(url)
        .header(reqwest::header::USER_AGENT, "liznext")
        .send()?
        .error_for_status()?;
    let mut response_body = String::new();
    response.read_to_string(&mut response_body)?;
    return Ok(response_body);
}
