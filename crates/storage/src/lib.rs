#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod json;
pub mod output;
pub mod snapshot;

pub use json::{JsonFile, JsonStr};

#[cfg(test)]
mod tests {
    pub mod data;
}
