use ipv4_inventory::config::Config;
use ipv4_inventory::inspect_addresses;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: ipv4-inventory <address[/cidr]>...");
        return Ok(());
    }

    let config = Config::from_env();
    for line in inspect_addresses(inputs.as_slice(), &config)? {
        println!("{line}");
    }

    log::info!("#End main()");
    Ok(())
}
