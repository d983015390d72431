#[path = "audit/topic.rs"]
mod topic;

#[path = "audit/skill.rs"]
mod skill;

#[path = "audit/story.rs"]
mod story;

#[path = "audit/exploration.rs"]
mod exploration;

#[path = "audit/batch.rs"]
mod batch;
