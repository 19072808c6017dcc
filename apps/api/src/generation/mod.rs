// Article generation: request validation, tone, prompt building and the provider call.
// All provider calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
