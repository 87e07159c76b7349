// Composition root for the weekly_metrics bounded context.
//
// Responsibilities
// - Read config from environment.
// - Build the store client and sign in.
// - Wire the store into use case handlers.
// - Spawn the dashboard projector.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
