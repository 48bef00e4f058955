//! Workspace-level integration tests for fibseries. See `tests/`.
