//! `courses paths`

use anyhow::Result;
use courses_core::{data_root, database_path};

pub fn execute() -> Result<()> {
    println!("Data directory: {}", data_root()?.display());
    println!("Database:       {}", database_path()?.display());
    Ok(())
}
