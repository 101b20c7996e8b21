pub mod trackable_task;
