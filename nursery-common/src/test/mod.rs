//! Test utilities.
//!
//! ⚠ Do not use in production code ⚠
//!
//! Provide a [TestLogger] able to write logs to stdout or to keep them in memory for
//! inspection, and a [MockBuilder][mock_extensions::MockBuilder] to configure `mockall` mocks.


pub use logger::{MemoryDrainForTestInspector, TestLogger};
