mod response;
mod task_mode;
