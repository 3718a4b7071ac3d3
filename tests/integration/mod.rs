mod app_flow;
mod timers;
