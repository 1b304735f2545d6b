// Error handling utilities for consistent error messages and exit codes

use std::process;

use crate::models::Dimension;
use crate::utils::did_you_mean;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input: unknown dimensions, bad rc entries, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Format a user error message with context
pub fn user_error_with_context(message: &str, context: &str) -> ! {
    eprintln!("Error: {} ({})", message, context);
    process::exit(1);
}

/// Validate a dimension argument
pub fn validate_dimension(name: &str) -> Result<Dimension, String> {
    if name.trim().is_empty() {
        return Err("Dimension cannot be empty".to_string());
    }
    name.parse::<Dimension>().map_err(|e| {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.as_str()).collect();
        format!("{}{}", e, did_you_mean(name, &names))
    })
}

/// Validate that at least one code was supplied
pub fn validate_codes(codes: &[String]) -> Result<(), String> {
    if codes.is_empty() {
        Err("At least one code is required".to_string())
    } else {
        Ok(())
    }
}
