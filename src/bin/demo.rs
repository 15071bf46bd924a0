use hashtable::{DemoError, parse_capacity, run};
use log::{error, trace};

fn main() -> Result<(), DemoError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let arg = std::env::args().nth(1);
    let capacity = parse_capacity(arg.as_deref())?;
    trace!("starting with {capacity} buckets");

    let table = run(capacity).inspect_err(|e| error!("demo failed: {e}"))?;
    trace!("final table: {table:?}");

    Ok(())
}
