//! Resolve a lookup sequence given on the command line

use anyhow::Result;
use serde_json::Value;

use crate::helpers::resolve;

/// Parse a command-line argument as JSON, falling back to a plain string
pub fn parse_argument(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

/// Resolve the arguments and print the result as JSON
pub fn run(args: &[String]) -> Result<()> {
    let values: Vec<Value> = args.iter().map(|arg| parse_argument(arg)).collect();
    let result = resolve(&values);
    tracing::debug!("Resolved {} arguments to {}", values.len(), result);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
