// Library exports for integration tests and reusable components

pub mod config;
pub mod import;
pub mod keywords;
pub mod sheet;
pub mod store;

// Desktop front end
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
