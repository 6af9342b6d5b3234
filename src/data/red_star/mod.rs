//! Red star runs and the players who contributed to them.

pub mod participation;
pub mod star;

#[cfg(test)]
mod tests;
