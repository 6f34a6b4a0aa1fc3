//! # climate-tutor — Climate-justice curriculum browser
//!
//! Presents a six-dimension climate-justice curriculum, filters it with a
//! keyword-aware search, and answers student questions through a generative
//! model that can ground answers in map locations.
//!
//! ## Architecture
//!
//! - **[`config`]** — JSON configuration loading, validation, API-key lookup
//! - **[`catalog`]** — Section / point / map-focus model and the bundled curriculum
//! - **[`search`]** — Section filter and the static topic-keyword table
//! - **[`assistant`]** — Provider trait, Gemini client, chat session and transcript
//! - **[`links`]** — Map-embed and web-search URLs
//! - **[`navigation`]** — Scroll / share / open-external capability for front-ends
//! - **[`progress`]** — In-memory activity completion per section
//! - **[`render`]** — Plain-text rendering for the terminal
//! - **[`repl`]** — Interactive `explore` and `chat` sessions

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod links;
pub mod navigation;
pub mod progress;
pub mod render;
pub mod repl;
pub mod search;
