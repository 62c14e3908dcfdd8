//! Stripping comments and whitespace from annotated LUON.
//!
//! Run with: cargo run --example strip

use luon::ReadOptions;
use std::error::Error;

const ANNOTATED: &str = "\
-- deployment settings
{
  host = 'relay-1', -- primary node
  port = 7077,
  --[[ the retry block is tuned for slow links;
       adjust with care ]]
  retries = { max = 5, backoff = 1.5 }
}";

fn main() -> Result<(), Box<dyn Error>> {
    // Remove comments while preserving line numbers for error reporting
    let without_comments = luon::strip_comments(ANNOTATED);
    println!("comments removed:\n{without_comments}\n");

    // Collapse insignificant whitespace for the wire
    let compact = luon::strip_whitespace(&without_comments);
    println!("whitespace stripped:\n{compact}\n");

    // Or let the reader strip comments itself
    let options = ReadOptions::new().with_remove_comments(true);
    let value = luon::from_str_with_options(ANNOTATED, options)?;
    println!("parsed:\n{}", luon::to_string_beautified(&value)?);

    Ok(())
}
