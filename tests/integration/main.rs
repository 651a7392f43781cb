//! Integration test harness.
//!
//! Each module covers one slice of player behavior against mock
//! collaborators; `helpers` holds the mocks and playlist builders shared
//! across modules.

mod helpers;

mod jump_test;
