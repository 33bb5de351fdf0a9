//! Promptline — interactive question prompts for the terminal.
//!
//! This crate provides composable prompt state machines (single-choice
//! selection lists and free-text input) driven by an in-process event
//! channel, with pagination for long choice lists and an async
//! filter/validate chain for typed answers. Prompt logic is decoupled from
//! the terminal, so the same machines run against real key events or
//! scripted ones.
//!
//! # Quick start
//!
//! ```no_run
//! use promptline::events::InputSource;
//! use promptline::prompt::PromptConfig;
//! use promptline::render::TermRenderer;
//! use promptline::select::SelectPrompt;
//!
//! # async fn example() {
//! let (handle, mut source) = InputSource::channel();
//! # let _ = handle;
//! let mut prompt =
//!     SelectPrompt::new(PromptConfig::new("Pick one").choices(["foo", "bar", "bum"])).unwrap();
//! let mut renderer = TermRenderer::new(true);
//! let answer = prompt.run(&mut source, &mut renderer).await.unwrap();
//! println!("{answer}");
//! # }
//! ```

pub mod build_info;
pub mod choice;
pub mod config;
pub mod error;
pub mod events;
pub mod paginate;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod select;
pub mod settings;
pub mod terminal;
pub mod text;
