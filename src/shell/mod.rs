// Composition root for the time_entries bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the repository implementation selected by the config.
// - Wire it into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
