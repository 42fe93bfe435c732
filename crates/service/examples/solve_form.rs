//! Submits a 3x3 system the way the web form would and prints the result.
//!
//! Pass a JSON config file as the first argument to override the defaults.

use std::sync::Arc;

use prettytable::{row, table};
use service::{form, ServiceConfig, SolverClient, SolverServer};

fn main() -> Result<(), service::Error> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };

    let client = SolverClient::new(
        Arc::new(SolverServer::from_config(&config)),
        config.deadline(),
    )
    .with_max_in_flight(config.max_in_flight);

    let fields = [
        ("size", "3"),
        ("m0_0", "1"),
        ("m0_1", "2"),
        ("m0_2", "1"),
        ("m1_0", "4"),
        ("m1_1", "1"),
        ("m1_2", "0"),
        ("m2_0", "2"),
        ("m2_1", "2"),
        ("m2_2", "3"),
        ("c0", "4"),
        ("c1", "5"),
        ("c2", "7"),
    ];

    let mut table_out = table!(["field", "value"]);
    for (name, value) in fields {
        table_out.add_row(row![name, value]);
    }
    table_out.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table_out.printstd();

    let reply = form::submit(&client, fields);
    println!("{} {}", reply.status, reply.message);

    Ok(())
}
