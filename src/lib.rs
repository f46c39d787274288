//! # gol — Conway's Game of Life on a toroidal board
//!
//! Simulates the Game of Life on a finite square grid whose edges wrap
//! (row 0's upper neighbor is the last row, column 0's left neighbor is the
//! last column), and serves the simulation over a small HTTP API.
//!
//! The core is two modules with no shared state:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`board`] | Board construction (empty, random, parsed from text), dimensions, text/JSON rendering |
//! | [`stepper`] | One generation advance: toroidal neighbor counting + the survival/birth rule |
//!
//! "Simulation" is nothing more than repeated calls to [`stepper::step`];
//! there is no session, loop, or cache inside the library. The HTTP layer
//! ([`server`]) builds or receives a board per request, steps it once, and
//! serializes it back, so every endpoint is safe under concurrent requests.
//!
//! Boards cross the wire as `{"states": [[bool, ...], ...]}` with `true`
//! meaning alive, and cross text files as rows of `'x'` (alive) and `'-'`
//! (dead). The [`fixtures`] module reads the before/after transition files
//! under `test_boards/` that the integration tests replay.

pub mod board;
pub mod env_config;
pub mod error;
pub mod fixtures;
pub mod server;
pub mod stepper;
