mod generator_config;
mod key_validation;
mod wire;
