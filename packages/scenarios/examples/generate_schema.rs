use aivss_scenarios::ScenarioCatalog;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(ScenarioCatalog);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
