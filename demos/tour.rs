//! Reading a LUON document, navigating it and writing every output profile.
//!
//! Run with: cargo run --example tour

use luon::{Key, Value};
use std::error::Error;

const DOCUMENT: &str = "\
{
  name = 'orbital relay',
  online = true,
  crew = 6,
  modules = { 'habitat', 'lab', 'dock' },
  limits = { [0.5] = 'half power', ceiling = 1e4 }
}";

fn main() -> Result<(), Box<dyn Error>> {
    let value = luon::from_str(DOCUMENT)?;

    // Navigate the parsed table
    let table = value.as_table().ok_or("expected a table")?;
    let name = table.get(&Key::from("name")).ok_or("missing name")?;
    println!("station: {name}");

    if let Some(Value::Table(modules)) = table.get(&Key::from("modules")) {
        for (index, module) in modules.list().iter().enumerate() {
            println!("module {}: {module}", index + 1);
        }
    }

    // Fractional keys live in the dictionary part
    let limits = table
        .get(&Key::from("limits"))
        .and_then(Value::as_table)
        .ok_or("missing limits")?;
    println!("at 0.5: {:?}", limits.get(&Key::from(0.5)));

    // The three output profiles
    println!("\ndefault:\n{}", luon::to_string(&value)?);
    println!("\ncompressed:\n{}", luon::to_string_compressed(&value)?);
    println!("\nbeautified:\n{}", luon::to_string_beautified(&value)?);

    Ok(())
}
