mod config;
mod dispatcher;
mod gemini;
mod secrets;
