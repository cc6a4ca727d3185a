pub mod challenge_service;
pub mod challenge_steps;
pub mod insight_service;
pub mod manager_service;
