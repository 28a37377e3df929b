//! Unit tests for the helpdesk module.
