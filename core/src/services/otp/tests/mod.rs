//! Unit tests for the one-time passcode store
