//! Cross-service integration tests for the repohub workspace
//!
//! The tests under `tests/` start the repo, project, user and gateway
//! services in-process on ephemeral ports and drive them over real HTTP.
