#![forbid(unsafe_code)]

pub mod app_services;
pub mod board;
pub mod credentials;
pub mod error;
pub mod playground;
pub mod progress;
pub mod text_gen;

pub use quest_core::Clock;

pub use app_services::AppServices;
pub use board::{TagFilter, UseCaseBoard};
pub use credentials::CredentialService;
pub use error::{
    AppServicesError, CredentialError, PlaygroundError, SaveWarning, TextGenConfigError,
    TextGenError,
};
pub use playground::{
    PlaygroundService, PromptOutcome, PromptRunOutcome, PromptSession, RequestId, TipSelector,
    TIPS,
};
pub use progress::{ProgressService, ProgressUpdate};
pub use text_gen::{TextGenClient, TextGenConfig, NO_RESPONSE_SENTINEL};
