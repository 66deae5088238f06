mod load;
mod scan;

use dynscan_config::Config;

pub(crate) const FIXTURE: &str = include_str!("../fixtures/test.json");

pub(crate) fn fixture() -> Config {
    Config::from_json_str(FIXTURE).unwrap()
}
