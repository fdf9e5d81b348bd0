// Integration tests for the civiclens binary's library surface.
// Each scenario runs app::run against in-memory streams.

mod scenarios;
