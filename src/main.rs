use std::{env, io::stdin};

use service::{data_manager::DataManager, riotapi::client::ApiClient};
use ui::repl;

mod model;
mod service;
mod ui;

const DEFAULT_REGION: &str = "euw1";

fn main() {
    let mut args = env::args().skip(1);
    let api_key = match args.next().or_else(|| env::var("RIOT_API_KEY").ok()) {
        Some(key) => key,
        None => {
            println!("Usage: riftgold <api-key> [region]");
            println!("The key can also be passed via the RIOT_API_KEY environment variable.");
            return;
        }
    };
    let region = args.next().unwrap_or_else(|| DEFAULT_REGION.to_string());

    match ApiClient::new(&region, &api_key) {
        Ok(client) => match repl::run(DataManager::new(client)) {
            Ok(_) => return,
            Err(error) => println!("Error occured while running REPL:\n{}\n", error),
        },
        Err(error) => println!("Error occured while initializing:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
