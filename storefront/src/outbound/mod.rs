//! Driven adapters for external collaborators.

pub mod correios;
