use anyhow::{Result, bail};
use std::io::{self, Write};

use lenswork_core::catalog;
use lenswork_core::models::City;

/// Terminal confirmation gate. `--yes` flags skip this entirely.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Resolve a city argument by id or name.
pub(crate) fn find_city(value: &str) -> Result<&'static City> {
    match catalog::city_by_id(value).or_else(|| catalog::city_by_name(value)) {
        Some(city) => Ok(city),
        None => bail!(
            "unknown city '{value}' (expected one of: {})",
            catalog::cities()
                .iter()
                .map(|c| c.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
