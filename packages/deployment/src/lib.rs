pub mod chain;
pub mod config;
pub mod contracts_repository;
pub mod dao;
pub mod error;
pub mod logger;
pub mod mnemonics;
pub mod template;
pub mod validate;

#[cfg(test)]
mod tests;
