use collections::{HashTable, TableError};
use log::{info, warn};
use thiserror::Error;

/// Initial bucket count when none is given on the command line
pub const DEMO_CAPACITY: usize = 2;

pub const LINES: [(&str, &str); 3] = [
    ("line_1", "Tiny hash table"),
    ("line_2", "Filled beyond capacity"),
    ("line_3", "Linked list saves the day!"),
];

#[derive(Debug, Error)]
pub enum DemoError {
    /// The capacity argument was not a number
    #[error("Invalid capacity argument: {0}")]
    InvalidArgument(#[from] std::num::ParseIntError),

    /// Derived table error
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// A stored line did not come back out of the table
    #[error("Lost {0} while {1}")]
    Lost(&'static str, &'static str),

    /// Removing an already removed key reported success
    #[error("Removed {0} twice")]
    RemovedTwice(&'static str),
}

/// Parses the optional capacity argument, falling back to [`DEMO_CAPACITY`]
pub fn parse_capacity(arg: Option<&str>) -> Result<usize, DemoError> {
    match arg {
        Some(s) => Ok(s.trim().parse()?),
        None => Ok(DEMO_CAPACITY),
    }
}

/// Fills a table past its bucket count, resizes it, and checks nothing was lost
///
/// Returns the table so callers can keep poking at it.
pub fn run(capacity: usize) -> Result<HashTable<&'static str>, DemoError> {
    let mut table = HashTable::new(capacity)?;

    for (key, value) in LINES {
        table.insert(key, value);
    }

    // storing beyond capacity
    check_lines(&table, "chaining")?;

    let old_capacity = table.capacity();
    table.resize();
    info!("Resized from {old_capacity} to {}.", table.capacity());

    // data intact after resizing
    check_lines(&table, "resizing")?;

    let (first, _) = LINES[0];
    let removed = table.remove(first)?;
    info!("Removed {first}: {removed}");

    match table.remove(first) {
        Err(e @ TableError::KeyNotFound { .. }) => {
            warn!("Second removal of {first} failed as expected: {e}");
        }
        Err(e) => return Err(e.into()),
        Ok(_) => return Err(DemoError::RemovedTwice(first)),
    }

    Ok(table)
}

fn check_lines(table: &HashTable<&'static str>, stage: &'static str) -> Result<(), DemoError> {
    for (key, expected) in LINES {
        match table.retrieve(key) {
            Some(value) if value == &expected => info!("{key}: {value}"),
            _ => return Err(DemoError::Lost(key, stage)),
        }
    }
    Ok(())
}
