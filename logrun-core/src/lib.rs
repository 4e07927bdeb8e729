pub mod classify;
pub mod cli;
pub mod conf;
pub mod group;
pub mod logging;
pub mod order;
pub mod pipeline;
pub mod record;
pub mod resolve;

#[cfg(test)]
mod test_support;
