pub mod dimensions;
pub mod input;
pub mod render;
pub mod ui;

#[cfg(test)]
mod test_helpers;
